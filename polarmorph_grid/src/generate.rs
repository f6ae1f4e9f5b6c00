// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use polarmorph_axis::{CoefficientQuantity, SpeedQuantity};
use polarmorph_physics::{
    CoefficientMode, CoefficientPoint, PhysicalParameters, SpeedPoint, SpeedUnit,
};

use crate::curve::{
    CoefficientLine, Curve, CurveCategory, CurveKind, ExtendedPiece, ExtendedSegment, GlideRay,
    Quadrant, Sign, SpeedLine,
};
use crate::spec::{steps, symmetric_multiples};
use crate::{GridKey, GridPalette, GridSpec, format_value};

/// Everything a grid is generated from.
#[derive(Clone, Copy, Debug)]
pub struct GridInput<'a> {
    /// Air density, area and mass.
    pub params: PhysicalParameters,
    /// Which coefficient pair spans coefficient space.
    pub mode: CoefficientMode,
    /// Display unit of speed space.
    pub unit: SpeedUnit,
    /// Stroke colours per category.
    pub palette: &'a GridPalette,
    /// Sampling policy.
    pub spec: &'a GridSpec,
}

impl GridInput<'_> {
    /// The cache key of this input.
    #[must_use]
    pub fn key(&self) -> GridKey {
        GridKey {
            params: self.params,
            mode: self.mode,
            unit: self.unit,
        }
    }
}

/// The complete set of reference curves for one [`GridKey`].
#[derive(Clone, Debug)]
pub struct Grid {
    key: GridKey,
    curves: Vec<Curve>,
}

impl Grid {
    /// The inputs this grid was generated for.
    #[must_use]
    pub fn key(&self) -> GridKey {
        self.key
    }

    /// All curves.
    #[must_use]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Curves of one category.
    pub fn category(&self, category: CurveCategory) -> impl Iterator<Item = &Curve> + '_ {
        self.curves.iter().filter(move |c| c.category() == category)
    }

    /// Total number of paired samples over all curves.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.curves.iter().map(Curve::len).sum()
    }
}

/// Builds every reference curve for `input`.
#[must_use]
pub fn generate(input: &GridInput<'_>) -> Grid {
    let mut curves = Vec::new();
    speed_lines(input, &mut curves);
    coefficient_lines(input, &mut curves);
    extended_segments(input, &mut curves);
    glide_rays(input, &mut curves);

    let grid = Grid {
        key: input.key(),
        curves,
    };
    tracing::debug!(
        curves = grid.curves.len(),
        points = grid.point_count(),
        mode = ?input.mode,
        unit = ?input.unit,
        "generated grid"
    );
    grid
}

const SPEED_DECIMALS: usize = 1;

fn coefficient_decimals(mode: CoefficientMode) -> usize {
    match mode {
        CoefficientMode::Dimensionless => 2,
        CoefficientMode::Dimensional => 5,
    }
}

fn speed_sample(held: SpeedQuantity, value: f64, companion: f64) -> SpeedPoint {
    match held {
        SpeedQuantity::Vxs => SpeedPoint::new(value, companion),
        SpeedQuantity::Vys => SpeedPoint::new(companion, value),
    }
}

fn coefficient_sample(held: CoefficientQuantity, value: f64, companion: f64) -> CoefficientPoint {
    match held {
        CoefficientQuantity::Lift => CoefficientPoint::new(value, companion),
        CoefficientQuantity::Drag => CoefficientPoint::new(companion, value),
    }
}

fn is_multiple(value: f64, step: f64) -> bool {
    let ratio = value / step;
    (ratio - ratio.round()).abs() < 1e-6
}

fn speed_lines(input: &GridInput<'_>, curves: &mut Vec<Curve>) {
    let spec = &input.spec.speed;
    let to_coefficients = |v| input.mode.from_speeds(v, &input.params, input.unit);
    let held_quantities = [SpeedQuantity::Vxs, SpeedQuantity::Vys];

    for value in symmetric_multiples(spec.outer_limit, spec.outer_step) {
        for held in held_quantities {
            let samples = steps(-spec.outer_limit, spec.outer_limit, spec.outer_sample_step)
                .map(|t| speed_sample(held, value, t))
                .collect();
            curves.push(Curve::from_speeds(
                CurveKind::OuterSpeed(SpeedLine { held, value }),
                Some(format_value(value, SPEED_DECIMALS)),
                input.palette.outer_speed,
                samples,
                to_coefficients,
            ));
        }
    }

    for &magnitude in &spec.inner_values {
        for sign in Sign::BOTH {
            let value = magnitude * sign.factor();
            for held in held_quantities {
                let samples = steps(-spec.inner_span, spec.inner_span, spec.inner_sample_step)
                    .map(|t| speed_sample(held, value, t))
                    .collect();
                curves.push(Curve::from_speeds(
                    CurveKind::InnerSpeed(SpeedLine { held, value }),
                    Some(format_value(value, SPEED_DECIMALS)),
                    input.palette.inner_speed,
                    samples,
                    to_coefficients,
                ));
            }
        }
    }
}

fn coefficient_lines(input: &GridInput<'_>, curves: &mut Vec<Curve>) {
    let spec = &input.spec.coefficient;
    let unit = input.mode.grid_unit();
    let decimals = coefficient_decimals(input.mode);
    let to_speeds = |c| input.mode.to_speeds(c, &input.params, input.unit);

    for multiple in symmetric_multiples(spec.core_limit, spec.core_step) {
        let value = multiple * unit;
        let label = is_multiple(multiple, spec.core_label_step)
            .then(|| format_value(value, decimals));
        for held in [CoefficientQuantity::Lift, CoefficientQuantity::Drag] {
            let samples = steps(-spec.core_limit, spec.core_limit, spec.core_sample_step)
                .map(|t| coefficient_sample(held, value, t * unit))
                .collect();
            curves.push(Curve::from_coefficients(
                CurveKind::OuterCoefficient(CoefficientLine { held, value }),
                label.clone(),
                input.palette.outer_coefficient,
                samples,
                to_speeds,
            ));
        }
    }
}

fn extended_segments(input: &GridInput<'_>, curves: &mut Vec<Curve>) {
    let spec = &input.spec.coefficient;
    let unit = input.mode.grid_unit();
    let decimals = coefficient_decimals(input.mode);
    let color = input.palette.extended_coefficient;
    let to_speeds = |c| input.mode.to_speeds(c, &input.params, input.unit);
    let labeled = |magnitude: f64| {
        spec.extended_labels
            .iter()
            .any(|&m| (m - magnitude.abs()).abs() < 1e-9)
    };

    let mut push = |line: CoefficientLine,
                    companion_sign: Sign,
                    piece: ExtendedPiece,
                    companions: Vec<f64>,
                    label: Option<String>| {
        let samples = companions
            .into_iter()
            .map(|t| coefficient_sample(line.held, line.value, companion_sign.factor() * t * unit))
            .collect();
        curves.push(Curve::from_coefficients(
            CurveKind::ExtendedCoefficient(ExtendedSegment {
                line,
                companion_sign,
                piece,
            }),
            label,
            color,
            samples,
            to_speeds,
        ));
    };

    // Core lines carried out to the extended limit.
    for multiple in symmetric_multiples(spec.core_limit, spec.core_step) {
        let value = multiple * unit;
        for held in [CoefficientQuantity::Lift, CoefficientQuantity::Drag] {
            let line = CoefficientLine { held, value };
            for companion_sign in Sign::BOTH {
                let bridge = steps(spec.core_limit, spec.bridge_end, spec.core_sample_step);
                push(
                    line,
                    companion_sign,
                    ExtendedPiece::Bridge,
                    bridge.collect(),
                    None,
                );
                let label = (companion_sign == Sign::Positive && labeled(multiple))
                    .then(|| format_value(value, decimals));
                let continuation =
                    steps(spec.bridge_end, spec.extended_limit, spec.extended_sample_step);
                push(
                    line,
                    companion_sign,
                    ExtendedPiece::Continuation,
                    continuation.collect(),
                    label,
                );
            }
        }
    }

    // Whole-number lines entirely outside the core range.
    for magnitude in steps(
        spec.core_limit + spec.far_step,
        spec.extended_limit,
        spec.far_step,
    ) {
        for value_sign in Sign::BOTH {
            let value = value_sign.factor() * magnitude * unit;
            for held in [CoefficientQuantity::Lift, CoefficientQuantity::Drag] {
                let line = CoefficientLine { held, value };
                for companion_sign in Sign::BOTH {
                    let label = (companion_sign == Sign::Positive && labeled(magnitude))
                        .then(|| format_value(value, decimals));
                    let far = steps(0.0, spec.extended_limit, spec.extended_sample_step);
                    push(line, companion_sign, ExtendedPiece::Far, far.collect(), label);
                }
            }
        }
    }
}

fn glide_rays(input: &GridInput<'_>, curves: &mut Vec<Curve>) {
    let spec = &input.spec.speed;
    let to_coefficients = |v| input.mode.from_speeds(v, &input.params, input.unit);

    for &ratio in &input.spec.glide_ratios {
        if !(ratio.is_finite() && ratio > 0.0) {
            continue;
        }
        let norm = ratio.hypot(1.0);
        for quadrant in Quadrant::ALL {
            let dx = quadrant.vxs.factor() * ratio / norm;
            let dy = quadrant.vys.factor() / norm;
            let samples = steps(0.0, spec.ray_length, spec.ray_sample_step)
                .map(|t| SpeedPoint::new(dx * t, dy * t))
                .collect();
            let label = (quadrant.vys == Sign::Positive)
                .then(|| format!("{}:1", format_value(ratio, SPEED_DECIMALS)));
            curves.push(Curve::from_speeds(
                CurveKind::GlideRay(GlideRay { ratio, quadrant }),
                label,
                input.palette.glide_ray,
                samples,
                to_coefficients,
            ));
        }
    }
}
