// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label anchoring and offset.

use kurbo::{Point, Vec2};
use polarmorph_grid::{Curve, CurveCategory, CurveKind};

/// Distance between a curve and its label, in chart pixels.
pub const LABEL_OFFSET: f64 = 10.0;

/// Samples on either side of the anchor used to estimate the tangent.
const TANGENT_REACH: usize = 3;

/// Index of the sample a curve's label is attached to.
///
/// - Straight grid lines use the sample a third of the way along.
/// - Extended segments use the sample closest to the held axis.
/// - Glide rays slide their label inward as the morph progresses, so the
///   four rays of a ratio do not collide near the plot edge.
#[must_use]
pub fn anchor_index(curve: &Curve, progress: f64) -> usize {
    let n = curve.len();
    if n == 0 {
        return 0;
    }
    match curve.kind() {
        CurveKind::OuterSpeed(_) | CurveKind::InnerSpeed(_) | CurveKind::OuterCoefficient(_) => {
            n / 3
        }
        CurveKind::ExtendedCoefficient(segment) => curve
            .coefficients()
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                segment
                    .line
                    .companion(**a)
                    .abs()
                    .total_cmp(&segment.line.companion(**b).abs())
            })
            .map_or(0, |(i, _)| i),
        CurveKind::GlideRay(_) => {
            let fraction = (0.85 - 0.6 * progress.clamp(0.0, 1.0)).clamp(0.0, 1.0);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "fraction is in [0, 1], so the product is a valid index"
            )]
            let index = (fraction * (n - 1) as f64).round() as usize;
            index.min(n - 1)
        }
    }
}

/// Which side of the tangent a category's labels sit on.
#[must_use]
pub fn label_side(category: CurveCategory) -> f64 {
    if category.is_speed_side() { 1.0 } else { -1.0 }
}

/// Position of a label for the anchor `index` of `points`, pushed
/// [`LABEL_OFFSET`] pixels along the normal to `side`.
///
/// A zero-length tangent falls back to an upward offset.
#[must_use]
pub fn label_position(points: &[Point], index: usize, side: f64) -> Option<Point> {
    let anchor = *points.get(index)?;
    let lo = index.saturating_sub(TANGENT_REACH);
    let hi = (index + TANGENT_REACH).min(points.len() - 1);
    let tangent = points[hi] - points[lo];
    let length = tangent.hypot();
    let normal = if length > 1e-9 && length.is_finite() {
        Vec2::new(-tangent.y, tangent.x) / length
    } else {
        Vec2::new(0.0, -1.0)
    };
    Some(anchor + normal * side * LABEL_OFFSET)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use polarmorph_grid::{CurveCategory, CurveKind, GridInput, GridPalette, GridSpec, generate};
    use polarmorph_physics::{CoefficientMode, PhysicalParameters, SpeedUnit};

    use super::{LABEL_OFFSET, anchor_index, label_position, label_side};

    fn grid() -> polarmorph_grid::Grid {
        generate(&GridInput {
            params: PhysicalParameters::STANDARD,
            mode: CoefficientMode::Dimensionless,
            unit: SpeedUnit::MilesPerHour,
            palette: &GridPalette::default(),
            spec: &GridSpec::for_unit(SpeedUnit::MilesPerHour),
        })
    }

    #[test]
    fn straight_lines_anchor_a_third_along() {
        let grid = grid();
        let curve = grid.category(CurveCategory::OuterSpeed).next().unwrap();
        assert_eq!(anchor_index(curve, 0.3), curve.len() / 3);
    }

    #[test]
    fn extended_segments_anchor_nearest_the_held_axis() {
        let grid = grid();
        for curve in grid.category(CurveCategory::ExtendedCoefficient) {
            let CurveKind::ExtendedCoefficient(seg) = curve.kind() else {
                unreachable!("category filter");
            };
            let i = anchor_index(curve, 0.0);
            let best = seg.line.companion(curve.coefficients()[i]).abs();
            assert!(
                curve
                    .coefficients()
                    .iter()
                    .all(|&c| seg.line.companion(c).abs() >= best)
            );
        }
    }

    #[test]
    fn glide_labels_move_inward_with_progress() {
        let grid = grid();
        let ray = grid.category(CurveCategory::GlideRay).next().unwrap();
        let start = anchor_index(ray, 0.0);
        let end = anchor_index(ray, 1.0);
        assert!(end < start);
        assert_eq!(start, (0.85 * (ray.len() - 1) as f64).round() as usize);
    }

    #[test]
    fn offset_is_perpendicular_and_sided() {
        let points: Vec<_> = (0..10).map(|i| Point::new(f64::from(i) * 5.0, 0.0)).collect();
        let left = label_position(&points, 4, 1.0).unwrap();
        let right = label_position(&points, 4, -1.0).unwrap();
        assert_eq!(left, Point::new(20.0, LABEL_OFFSET));
        assert_eq!(right, Point::new(20.0, -LABEL_OFFSET));
        assert!(label_position(&points, 10, 1.0).is_none());
    }

    #[test]
    fn degenerate_tangent_offsets_upward() {
        let points = [Point::new(3.0, 3.0); 4];
        assert_eq!(
            label_position(&points, 1, 1.0),
            Some(Point::new(3.0, 3.0 - LABEL_OFFSET))
        );
    }

    #[test]
    fn speed_and_coefficient_labels_use_opposite_sides() {
        assert_eq!(
            label_side(CurveCategory::OuterSpeed),
            -label_side(CurveCategory::OuterCoefficient)
        );
        assert_eq!(
            label_side(CurveCategory::GlideRay),
            label_side(CurveCategory::InnerSpeed)
        );
    }
}
