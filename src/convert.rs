//! Conversions from any model to any other.
//!
//! Each model implements all four conversion traits. Conversions between
//! neighbouring spaces (Rgb - LinearRgb - Xyz - Luv) are implemented with the
//! models; everything else is composed here from those direct conversions.
//!
//! ```rust
//! use tinct::models::{luv, rgb};
//! use tinct::{ToLuv, ToRgb};
//!
//! let orange = rgb(210, 105, 30);
//! assert_eq!(orange.to_luv().to_rgb(), orange);
//! assert_eq!(luv(0.0, 0.0, 0.0).to_rgb(), rgb(0, 0, 0));
//! ```

use crate::{
    color::{Color, Space},
    models::{LinearRgb, Luv, Rgb, Xyz},
};

/// Specify that a color model supports conversion to gamma encoded sRGB.
pub trait ToRgb {
    /// Convert this color to gamma encoded sRGB.
    fn to_rgb(&self) -> Rgb;
}

/// Specify that a color model supports conversion to linear light sRGB.
pub trait ToLinearRgb {
    /// Convert this color to linear light sRGB.
    fn to_linear_rgb(&self) -> LinearRgb;
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz;
}

/// Specify that a color model supports conversion to CIE-LUV.
pub trait ToLuv {
    /// Convert this color to CIE-LUV.
    fn to_luv(&self) -> Luv;
}

impl ToRgb for Rgb {
    fn to_rgb(&self) -> Rgb {
        *self
    }
}

impl ToLinearRgb for Rgb {
    fn to_linear_rgb(&self) -> LinearRgb {
        self.to_linear_light()
    }
}

impl ToXyz for Rgb {
    fn to_xyz(&self) -> Xyz {
        self.to_linear_light().to_xyz()
    }
}

impl ToLuv for Rgb {
    fn to_luv(&self) -> Luv {
        self.to_linear_light().to_luv()
    }
}

impl ToRgb for LinearRgb {
    fn to_rgb(&self) -> Rgb {
        self.to_gamma_encoded()
    }
}

impl ToLinearRgb for LinearRgb {
    fn to_linear_rgb(&self) -> LinearRgb {
        *self
    }
}

impl ToLuv for LinearRgb {
    fn to_luv(&self) -> Luv {
        // Linear sRGB can not leave the white point box, but rounding in the
        // matrix can push Y just past 100.
        Luv::from(self.to_xyz().clamp_to_white_point())
    }
}

impl ToRgb for Xyz {
    fn to_rgb(&self) -> Rgb {
        LinearRgb::from(*self).to_gamma_encoded()
    }
}

impl ToLinearRgb for Xyz {
    fn to_linear_rgb(&self) -> LinearRgb {
        LinearRgb::from(*self)
    }
}

impl ToXyz for Xyz {
    fn to_xyz(&self) -> Xyz {
        *self
    }
}

impl ToLuv for Xyz {
    fn to_luv(&self) -> Luv {
        Luv::from(*self)
    }
}

impl ToRgb for Luv {
    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }
}

impl ToLinearRgb for Luv {
    fn to_linear_rgb(&self) -> LinearRgb {
        LinearRgb::from(self.to_xyz())
    }
}

impl ToLuv for Luv {
    fn to_luv(&self) -> Luv {
        *self
    }
}

macro_rules! dispatch {
    ($color:expr, $method:ident) => {{
        match $color {
            Color::Rgb(model) => model.$method(),
            Color::LinearRgb(model) => model.$method(),
            Color::Xyz(model) => model.$method(),
            Color::Luv(model) => model.$method(),
        }
    }};
}

impl ToRgb for Color {
    fn to_rgb(&self) -> Rgb {
        dispatch!(self, to_rgb)
    }
}

impl ToLinearRgb for Color {
    fn to_linear_rgb(&self) -> LinearRgb {
        dispatch!(self, to_linear_rgb)
    }
}

impl ToXyz for Color {
    fn to_xyz(&self) -> Xyz {
        dispatch!(self, to_xyz)
    }
}

impl ToLuv for Color {
    fn to_luv(&self) -> Luv {
        dispatch!(self, to_luv)
    }
}

impl Color {
    /// Convert this color from its current color space to the specified
    /// color space. Converting to the same space returns an equal color.
    pub fn to_space(&self, space: Space) -> Self {
        if self.space() == space {
            return *self;
        }

        tracing::trace!(from = %self.space(), to = %space, "converting color");

        match space {
            Space::Rgb => Color::Rgb(self.to_rgb()),
            Space::LinearRgb => Color::LinearRgb(self.to_linear_rgb()),
            Space::Xyz => Color::Xyz(self.to_xyz()),
            Space::Luv => Color::Luv(self.to_luv()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::{Component, Components};
    use crate::models::{linear_rgb, luv, rgb, xyz};

    fn color(space: Space, c: Components) -> Color {
        match space {
            Space::Rgb => rgb(c.0 as i32, c.1 as i32, c.2 as i32).into(),
            Space::LinearRgb => linear_rgb(c.0, c.1, c.2).into(),
            Space::Xyz => xyz(c.0, c.1, c.2).into(),
            Space::Luv => luv(c.0, c.1, c.2).into(),
        }
    }

    #[test]
    fn test_conversions() {
        use Space as S;

        #[rustfmt::skip]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(Space, Component, Component, Component)] = &[
            (S::Rgb, 210.0, 105.0, 30.0),
            (S::LinearRgb, 0.644480, 0.141263, 0.012983),
            (S::Xyz, 31.867477, 23.902517, 4.163559),
            (S::Luv, 55.990059, 86.285005, 47.751756),
        ];

        for &(source_space, source_0, source_1, source_2) in TESTS {
            for &(dest_space, dest_0, dest_1, dest_2) in TESTS {
                println!("{:?} -> {:?}", source_space, dest_space);
                let source = color(source_space, Components(source_0, source_1, source_2));
                let dest = source.to_space(dest_space);
                assert_eq!(dest.space(), dest_space);

                let Components(c0, c1, c2) = dest.components();
                assert_component_eq!(c0, dest_0, epsilon = 1.0e-3);
                assert_component_eq!(c1, dest_1, epsilon = 1.0e-3);
                assert_component_eq!(c2, dest_2, epsilon = 1.0e-3);
            }
        }
    }

    #[test]
    fn conversions_are_total() {
        let sources = [
            Color::from(rgb(1, 2, 3)),
            Color::from(linear_rgb(0.2, 0.4, 0.6)),
            Color::from(xyz(500.0, -20.0, 1.0)),
            Color::from(luv(150.0, -300.0, 300.0)),
        ];

        for source in sources {
            for space in Space::ALL {
                let dest = source.to_space(space);
                assert_eq!(dest.space(), space);

                let Components(c0, c1, c2) = dest.components();
                assert!(c0.is_finite() && c1.is_finite() && c2.is_finite());
            }
        }
    }

    #[test]
    fn identity_conversions_return_an_equal_color() {
        assert_eq!(rgb(1, 2, 3).to_rgb(), rgb(1, 2, 3));
        assert_eq!(linear_rgb(0.1, 0.2, 0.3).to_linear_rgb(), linear_rgb(0.1, 0.2, 0.3));
        assert_eq!(xyz(-1.0, 2.0, 300.0).to_xyz(), xyz(-1.0, 2.0, 300.0));
        assert_eq!(luv(120.0, -5.0, 5.0).to_luv(), luv(120.0, -5.0, 5.0));

        let c = Color::from(xyz(-1.0, 2.0, 300.0));
        assert_eq!(c.to_space(Space::Xyz), c);
    }

    #[test]
    fn red_primary() {
        let xyz = rgb(255, 0, 0).to_xyz();
        assert_component_eq!(xyz.x(), 41.24, epsilon = 0.1);
        assert_component_eq!(xyz.y(), 21.26, epsilon = 0.1);
        assert_component_eq!(xyz.z(), 1.93, epsilon = 0.1);
    }

    #[test]
    fn white_and_black() {
        let white = rgb(255, 255, 255).to_luv();
        assert_component_eq!(white.lightness(), 100.0, epsilon = 1.0e-6);
        assert_component_eq!(white.u(), 0.0, epsilon = 0.01);
        assert_component_eq!(white.v(), 0.0, epsilon = 0.01);
        assert_eq!(white.to_rgb(), rgb(255, 255, 255));

        let black = rgb(0, 0, 0).to_luv();
        assert_eq!(black.lightness(), 0.0);
        assert_eq!(black.to_rgb(), rgb(0, 0, 0));
    }

    #[test]
    fn chained_round_trip_stays_close() {
        for red in (0..=255).step_by(15) {
            for green in (0..=255).step_by(15) {
                for blue in (0..=255).step_by(15) {
                    let source = rgb(red, green, blue);
                    let back = source
                        .to_linear_light()
                        .to_xyz()
                        .to_luv()
                        .to_xyz()
                        .to_linear_rgb()
                        .to_gamma_encoded();

                    assert!(
                        (source.red() as i32 - back.red() as i32).abs() <= 2
                            && (source.green() as i32 - back.green() as i32).abs() <= 2
                            && (source.blue() as i32 - back.blue() as i32).abs() <= 2,
                        "{:?} came back as {:?}",
                        source,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn direct_xyz_is_not_clamped_before_luv() {
        // Brighter than the white point, so the result must exceed 100.
        let c = xyz(190.094, 200.0, 217.766).to_luv();
        assert!(c.lightness() > 100.0);
    }

    #[test]
    fn out_of_gamut_luv_clamps_to_rgb() {
        let c = luv(50.0, 500.0, 0.0).to_linear_rgb();
        let Components(red, green, blue) = c.to_components();
        for v in [red, green, blue] {
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
