// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use polarmorph_ease::Easing;

/// Default length of one morph between the two views.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1500);

/// The two resting layouts of the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    /// Everything laid out in speed space (progress 0).
    #[default]
    Speed,
    /// Everything laid out in coefficient space (progress 1).
    Coefficient,
}

impl View {
    /// Progress value at which this view rests.
    #[must_use]
    pub fn progress(self) -> f64 {
        match self {
            Self::Speed => 0.0,
            Self::Coefficient => 1.0,
        }
    }

    /// The other view.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Speed => Self::Coefficient,
            Self::Coefficient => Self::Speed,
        }
    }

    /// Caption for the view indicator.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Speed => "SPEED VIEW",
            Self::Coefficient => "COEFFICIENT VIEW",
        }
    }
}

/// An in-flight morph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Progress when the transition started.
    pub from: f64,
    /// Progress the transition ends at, exactly.
    pub to: f64,
    /// Timestamp of the request that started it.
    pub started: Duration,
}

/// Progress of the speed/coefficient morph.
///
/// At most one [`Transition`] runs at a time. Requests made while one is in
/// flight are ignored rather than queued, and a transition always runs until
/// its progress lands exactly on its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    progress: f64,
    transition: Option<Transition>,
    duration: Duration,
    easing: Easing,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl AnimationState {
    /// Idle in speed view, with transitions lasting `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            progress: 0.0,
            transition: None,
            duration,
            easing: Easing::InOutExpo,
        }
    }

    /// Replaces the pacing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Current progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.transition.is_some()
    }

    /// The transition in flight, if any.
    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    /// Length of a transition.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Changes the length of future transitions.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// The view the chart rests in, or is heading to while animating.
    #[must_use]
    pub fn view(&self) -> View {
        let target = self.transition.map_or(self.progress, |t| t.to);
        if target >= 0.5 {
            View::Coefficient
        } else {
            View::Speed
        }
    }

    /// Starts a morph towards the other view.
    ///
    /// Returns `false`, changing nothing, while a transition is running.
    pub fn toggle(&mut self, now: Duration) -> bool {
        if let Some(running) = self.transition {
            tracing::trace!(to = running.to, "toggle ignored while animating");
            return false;
        }
        let to = self.view().toggled().progress();
        self.transition = Some(Transition {
            from: self.progress,
            to,
            started: now,
        });
        tracing::debug!(from = self.progress, to, "transition started");
        true
    }

    /// Advances the running transition to `now`.
    ///
    /// Returns whether the progress changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        let before = self.progress;
        let elapsed = now.saturating_sub(transition.started);
        let raw = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        if raw >= 1.0 {
            self.progress = transition.to;
            self.transition = None;
            tracing::debug!(progress = self.progress, "transition finished");
        } else {
            let eased = self.easing.apply(raw);
            self.progress = transition.from + (transition.to - transition.from) * eased;
        }
        self.progress != before
    }

    /// Returns to idle speed view immediately.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.transition = None;
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{AnimationState, DEFAULT_DURATION, View};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn transition_lands_exactly_on_target() {
        let mut anim = AnimationState::default();
        assert!(anim.toggle(ms(1000)));
        assert!(anim.is_running());

        anim.tick(ms(1000 + 750));
        assert!((anim.progress() - 0.5).abs() < 1e-12);

        anim.tick(ms(1000) + DEFAULT_DURATION);
        assert_eq!(anim.progress(), 1.0);
        assert!(!anim.is_running());
        assert_eq!(anim.view(), View::Coefficient);

        assert!(anim.toggle(ms(5000)));
        anim.tick(ms(5000) + DEFAULT_DURATION + ms(16));
        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_running());
        assert_eq!(anim.view(), View::Speed);
    }

    #[test]
    fn toggle_while_running_is_ignored() {
        let mut anim = AnimationState::default();
        anim.toggle(ms(0));
        anim.tick(ms(300));
        let before = anim.transition();
        assert!(!anim.toggle(ms(400)));
        assert_eq!(anim.transition(), before);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let mut anim = AnimationState::new(ms(100));
        anim.toggle(ms(0));
        let mut last = 0.0;
        for step in 0..=12 {
            anim.tick(ms(step * 10));
            let p = anim.progress();
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn clock_running_backwards_does_not_panic() {
        let mut anim = AnimationState::default();
        anim.toggle(ms(500));
        assert!(!anim.tick(ms(100)));
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut anim = AnimationState::new(Duration::ZERO);
        anim.toggle(ms(0));
        assert!(anim.tick(ms(0)));
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn reset_returns_to_speed_view() {
        let mut anim = AnimationState::default();
        anim.toggle(ms(0));
        anim.tick(ms(200));
        anim.reset();
        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_running());
        assert_eq!(anim.view().label(), "SPEED VIEW");
    }
}
