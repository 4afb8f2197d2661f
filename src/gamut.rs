//! Queries for whether a color fits inside the sRGB gamut.
//!
//! Converting a color to [`LinearRgb`](crate::LinearRgb) clamps any component
//! outside `0.0..=1.0`. These functions report whether that clamp would change
//! the color.

use crate::{
    color::{Color, Component, Components},
    convert::ToXyz,
    models::{xyz_to_linear_light, Luv, Xyz},
};

/// Allowed overshoot for rounding errors in the matrix transform.
const TOLERANCE: Component = 1.0e-5;

fn in_unit_range(Components(red, green, blue): Components) -> bool {
    [red, green, blue]
        .into_iter()
        .all(|v| (-TOLERANCE..=1.0 + TOLERANCE).contains(&v))
}

impl Xyz {
    /// Returns true if the color can be converted to linear sRGB without
    /// clipping.
    pub fn in_rgb_gamut(&self) -> bool {
        in_unit_range(xyz_to_linear_light(self))
    }
}

impl Luv {
    /// Returns true if the color can be converted to linear sRGB without
    /// clipping.
    pub fn in_rgb_gamut(&self) -> bool {
        self.to_xyz().in_rgb_gamut()
    }
}

impl Color {
    /// Returns true if the color is inside the sRGB gamut. Colors in the RGB
    /// spaces are always in gamut since their constructors clamp.
    pub fn in_gamut(&self) -> bool {
        match self {
            Color::Rgb(_) | Color::LinearRgb(_) => true,
            Color::Xyz(model) => model.in_rgb_gamut(),
            Color::Luv(model) => model.in_rgb_gamut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ToLuv;
    use crate::models::{linear_rgb, luv, rgb, xyz};

    #[test]
    fn colors_from_rgb_are_in_gamut() {
        for c in [rgb(0, 0, 0), rgb(255, 255, 255), rgb(255, 0, 0), rgb(10, 200, 90)] {
            assert!(c.to_xyz().in_rgb_gamut(), "{:?}", c);
            assert!(c.to_luv().in_rgb_gamut(), "{:?}", c);
        }
    }

    #[test]
    fn colors_outside_of_rgb() {
        assert!(!xyz(80.0, 10.0, -5.0).in_rgb_gamut());
        assert!(!xyz(190.094, 200.0, 217.766).in_rgb_gamut());
        assert!(!luv(50.0, 500.0, 0.0).in_rgb_gamut());
    }

    #[test]
    fn dynamic_colors() {
        assert!(Color::from(rgb(1, 2, 3)).in_gamut());
        assert!(Color::from(linear_rgb(0.5, 0.5, 0.5)).in_gamut());
        assert!(Color::from(xyz(41.24564, 21.26729, 1.93339)).in_gamut());
        assert!(!Color::from(luv(50.0, 500.0, 0.0)).in_gamut());
    }
}
