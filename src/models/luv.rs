//! Models for the rectangular and polar forms of CIE-LUV.

use crate::{
    color::{Component, Components},
    convert::ToXyz,
    math::almost_zero,
    models::xyz::{Xyz, D65},
};

/// Relative luminance below which lightness is linear in Y.
const EPSILON: Component = 0.008856;

/// Slope of lightness on the linear segment.
const KAPPA: Component = 903.3;

/// Lightness at the boundary of the linear segment, `116 * cbrt(EPSILON) - 16`.
const LIGHTNESS_BREAK: Component = 8.0;

const WHITE_DENOMINATOR: Component = D65.0 + 15.0 * D65.1 + 3.0 * D65.2;

/// The u' chromaticity of the white point.
const U_PRIME_WHITE: Component = 4.0 * D65.0 / WHITE_DENOMINATOR;

/// The v' chromaticity of the white point.
const V_PRIME_WHITE: Component = 9.0 * D65.1 / WHITE_DENOMINATOR;

tinct_macros::gen_model! {
    /// A color in the CIE-LUV color space with a D65 white point reference.
    pub struct Luv {
        /// The lightness component, nominally `0.0..=100.0`.
        lightness: Component,
        /// The u component.
        u: Component,
        /// The v component.
        v: Component,
    }
}

impl Luv {
    /// Convert this rectangular model into its cylindrical polar form.
    pub fn to_polar(&self) -> Lchuv {
        let chroma = self.u.hypot(self.v);
        let hue = if almost_zero(chroma) {
            Component::NAN
        } else {
            self.v.atan2(self.u).to_degrees().rem_euclid(360.0)
        };

        Lchuv::new(self.lightness, chroma, hue)
    }
}

impl From<Xyz> for Luv {
    fn from(value: Xyz) -> Self {
        let Components(x, y, z) = value.to_components();

        // Black has no chromaticity.
        let denominator = x + 15.0 * y + 3.0 * z;
        let (u_prime, v_prime) = if denominator == 0.0 {
            (0.0, 0.0)
        } else {
            (4.0 * x / denominator, 9.0 * y / denominator)
        };

        let relative_y = y / D65.1;
        let lightness = if relative_y > EPSILON {
            116.0 * relative_y.cbrt() - 16.0
        } else {
            KAPPA * relative_y
        };

        Luv::new(
            lightness,
            13.0 * lightness * (u_prime - U_PRIME_WHITE),
            13.0 * lightness * (v_prime - V_PRIME_WHITE),
        )
    }
}

impl ToXyz for Luv {
    fn to_xyz(&self) -> Xyz {
        let (lightness, u, v) = (self.lightness, self.u, self.v);

        if almost_zero(lightness) {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let u_prime = u / (13.0 * lightness) + U_PRIME_WHITE;
        let v_prime = v / (13.0 * lightness) + V_PRIME_WHITE;

        let y = if lightness > LIGHTNESS_BREAK {
            let f = (lightness + 16.0) / 116.0;
            D65.1 * f * f * f
        } else {
            D65.1 * lightness / KAPPA
        };

        if v_prime == 0.0 {
            return Xyz::new(0.0, y, 0.0);
        }

        let x = y * 9.0 * u_prime / (4.0 * v_prime);
        let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);

        Xyz::new(x, y, z)
    }
}

tinct_macros::gen_model! {
    /// A color in the CIE-LUV color space in its cylindrical polar form,
    /// also known as LCh(uv).
    pub struct Lchuv {
        /// The lightness component.
        lightness: Component,
        /// The chroma component.
        chroma: Component,
        /// The hue component in degrees. NaN when the hue is powerless.
        hue: Component,
    }
}

impl Lchuv {
    /// Convert this cylindrical polar model into its rectangular form.
    pub fn to_rectangular(&self) -> Luv {
        if self.hue.is_nan() {
            return Luv::new(self.lightness, 0.0, 0.0);
        }

        let hue = self.hue.to_radians();
        Luv::new(
            self.lightness,
            self.chroma * hue.cos(),
            self.chroma * hue.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::models::{luv, xyz};

    #[test]
    fn white_point_is_neutral() {
        let white = Luv::from(xyz(95.047, 100.0, 108.883));
        assert_component_eq!(white.lightness(), 100.0, epsilon = 0.01);
        assert_component_eq!(white.u(), 0.0, epsilon = 0.01);
        assert_component_eq!(white.v(), 0.0, epsilon = 0.01);
    }

    #[test]
    fn reference_color() {
        let c = Luv::from(xyz(31.867477, 23.902517, 4.163559));
        assert_component_eq!(c.lightness(), 55.990059, epsilon = 1.0e-4);
        assert_component_eq!(c.u(), 86.285005, epsilon = 1.0e-4);
        assert_component_eq!(c.v(), 47.751756, epsilon = 1.0e-4);

        let back = c.to_xyz();
        assert_component_eq!(back.x(), 31.867477, epsilon = 1.0e-4);
        assert_component_eq!(back.y(), 23.902517, epsilon = 1.0e-4);
        assert_component_eq!(back.z(), 4.163559, epsilon = 1.0e-4);
    }

    #[test]
    fn black_is_finite_both_ways() {
        let c = Luv::from(xyz(0.0, 0.0, 0.0));
        assert_eq!(c.lightness(), 0.0);
        assert_eq!(c.u(), 0.0);
        assert_eq!(c.v(), 0.0);

        let c = luv(0.0, 25.0, -25.0).to_xyz();
        assert_eq!(c, xyz(0.0, 0.0, 0.0));
    }

    #[test]
    fn tiny_lightness_is_black() {
        let c = luv(1.0e-310, 25.0, -25.0).to_xyz();
        assert_eq!(c, xyz(0.0, 0.0, 0.0));
    }

    #[test]
    fn zero_denominator_is_finite() {
        let c = Luv::from(xyz(15.0, -1.0, 0.0));
        assert!(c.lightness().is_finite());
        assert!(c.u().is_finite());
        assert!(c.v().is_finite());
    }

    #[test]
    fn zero_v_prime_is_finite() {
        let c = luv(50.0, 0.0, -13.0 * 50.0 * V_PRIME_WHITE).to_xyz();
        assert_eq!(c.x(), 0.0);
        assert_eq!(c.z(), 0.0);
        assert_component_eq!(c.y(), 18.418652, epsilon = 1.0e-5);
    }

    #[test]
    fn dark_colors_use_the_linear_segment() {
        let c = Luv::from(xyz(0.5, 0.5, 0.5));
        assert_component_eq!(c.lightness(), KAPPA * 0.005);

        let back = c.to_xyz();
        assert_component_eq!(back.x(), 0.5);
        assert_component_eq!(back.y(), 0.5);
        assert_component_eq!(back.z(), 0.5);
    }

    #[test]
    fn converting_to_polar_should_set_hue_to_missing_for_small_u_v_values() {
        let polar = luv(50.0, 0.0, 0.0).to_polar();
        assert!(polar.hue().is_nan());
        assert_eq!(polar.to_rectangular(), luv(50.0, 0.0, 0.0));
    }

    #[test]
    fn polar_round_trip() {
        let polar = luv(55.990059, 86.285005, 47.751756).to_polar();
        assert_component_eq!(polar.chroma(), 98.617099, epsilon = 1.0e-4);
        assert_component_eq!(polar.hue(), 28.960973, epsilon = 1.0e-4);

        let back = polar.to_rectangular();
        assert_component_eq!(back.u(), 86.285005, epsilon = 1.0e-4);
        assert_component_eq!(back.v(), 47.751756, epsilon = 1.0e-4);
    }

    #[test]
    fn hue_is_normalized() {
        let polar = luv(50.0, 0.0, -10.0).to_polar();
        assert_component_eq!(polar.hue(), 270.0);
    }
}
