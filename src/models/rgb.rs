//! Model a color in the sRGB color space, gamma encoded and linear light.

use crate::{
    color::{Component, Components},
    convert::ToXyz,
    math::{clamp, transform, transform_3x3, Transform},
    models::xyz::Xyz,
};

mod gamma;

/// Converts linear light sRGB to CIE-XYZ with components in `0.0..=1.0`.
#[rustfmt::skip]
const TO_XYZ: Transform = transform_3x3(
    0.4124564, 0.3575761, 0.1804375,
    0.2126729, 0.7151522, 0.0721750,
    0.0193339, 0.1191920, 0.9503041,
);

/// The inverse of [`TO_XYZ`].
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const FROM_XYZ: Transform = transform_3x3(
     3.2404548360214083, -1.5371388501025751, -0.4985315468684809,
    -0.9692663898756537,  1.8760109288424913,  0.0415560823466735,
     0.0556434196042137, -0.2040258542676981,  1.0572251624579287,
);

/// XYZ components are scaled so that Y of the white point is 100.
const XYZ_SCALE: Component = 100.0;

/// A color in the sRGB color space with gamma encoded 8-bit components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Create a new color. Each component is clamped to `0..=255`.
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: red.clamp(0, 255) as u8,
            green: green.clamp(0, 255) as u8,
            blue: blue.clamp(0, 255) as u8,
        }
    }

    /// The red component of the color.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green component of the color.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue component of the color.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Convert this model into generic components on the `0..=255` scale.
    pub fn to_components(&self) -> Components {
        Components(
            self.red as Component,
            self.green as Component,
            self.blue as Component,
        )
    }

    /// Components normalized to `0.0..=1.0`.
    pub(crate) fn to_unit(&self) -> Components {
        self.to_components().map(|v| v / 255.0)
    }

    /// Quantize components in `0.0..=1.0` to the nearest 8-bit value.
    pub(crate) fn from_unit_rounded(unit: Components) -> Self {
        let Components(red, green, blue) = unit.map(|v| to_channel(v * 255.0));
        Self::from_channels(red, green, blue)
    }

    /// Quantize interpolated components on the `0.0..=255.0` scale. Fractions
    /// of a quarter or more round up, so an 8-bit value is never off by more
    /// than 0.75 and whole values are kept as is.
    pub(crate) fn from_blended(components: Components) -> Self {
        let Components(red, green, blue) =
            components.map(|v| clamp((v + 0.75).floor(), 0.0, 255.0));
        Self::from_channels(red, green, blue)
    }

    fn from_channels(red: Component, green: Component, blue: Component) -> Self {
        // Channels are already rounded and in range.
        Self {
            red: red as u8,
            green: green as u8,
            blue: blue as u8,
        }
    }

    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> LinearRgb {
        gamma::to_linear_light(&self.to_unit()).into()
    }
}

fn to_channel(value: Component) -> Component {
    clamp(value.round(), 0.0, 255.0)
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.red, value.green, value.blue]
    }
}

impl From<LinearRgb> for Rgb {
    fn from(value: LinearRgb) -> Self {
        value.to_gamma_encoded()
    }
}

tinct_macros::gen_model! {
    /// A color in the sRGB color space without gamma encoding.
    #[clamp(0.0, 1.0)]
    pub struct LinearRgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl LinearRgb {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Rgb {
        Rgb::from_unit_rounded(gamma::to_gamma_encoded(&self.to_components()))
    }
}

impl From<Rgb> for LinearRgb {
    fn from(value: Rgb) -> Self {
        value.to_linear_light()
    }
}

impl ToXyz for LinearRgb {
    fn to_xyz(&self) -> Xyz {
        transform(&TO_XYZ, self.to_components())
            .map(|v| v * XYZ_SCALE)
            .into()
    }
}

/// Convert XYZ to linear light sRGB without clipping to the gamut.
pub(crate) fn xyz_to_linear_light(value: &Xyz) -> Components {
    transform(&FROM_XYZ, value.to_components().map(|v| v / XYZ_SCALE))
}

impl From<Xyz> for LinearRgb {
    fn from(value: Xyz) -> Self {
        xyz_to_linear_light(&value).into()
    }
}
