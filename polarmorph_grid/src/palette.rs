// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::CurveCategory;

/// Stroke colour per curve category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPalette {
    /// Outer constant-speed lines.
    pub outer_speed: Color,
    /// Inner constant-speed lines.
    pub inner_speed: Color,
    /// Core constant-coefficient lines.
    pub outer_coefficient: Color,
    /// Extended constant-coefficient segments.
    pub extended_coefficient: Color,
    /// Glide-ratio rays.
    pub glide_ray: Color,
}

impl GridPalette {
    /// Colour of a category.
    #[must_use]
    pub fn color(&self, category: CurveCategory) -> Color {
        match category {
            CurveCategory::OuterSpeed => self.outer_speed,
            CurveCategory::InnerSpeed => self.inner_speed,
            CurveCategory::OuterCoefficient => self.outer_coefficient,
            CurveCategory::ExtendedCoefficient => self.extended_coefficient,
            CurveCategory::GlideRay => self.glide_ray,
        }
    }

    /// Replaces the colour of a category.
    pub fn set(&mut self, category: CurveCategory, color: Color) {
        let slot = match category {
            CurveCategory::OuterSpeed => &mut self.outer_speed,
            CurveCategory::InnerSpeed => &mut self.inner_speed,
            CurveCategory::OuterCoefficient => &mut self.outer_coefficient,
            CurveCategory::ExtendedCoefficient => &mut self.extended_coefficient,
            CurveCategory::GlideRay => &mut self.glide_ray,
        };
        *slot = color;
    }
}

impl Default for GridPalette {
    fn default() -> Self {
        Self {
            outer_speed: Color::from_rgba8(0x4a, 0x90, 0xd9, 0xff),
            inner_speed: Color::from_rgba8(0x9c, 0xc3, 0xeb, 0xff),
            outer_coefficient: Color::from_rgba8(0xd9, 0x6b, 0x4a, 0xff),
            extended_coefficient: Color::from_rgba8(0xeb, 0xb0, 0x9c, 0xff),
            glide_ray: Color::from_rgba8(0x6b, 0xb3, 0x5a, 0xff),
        }
    }
}
