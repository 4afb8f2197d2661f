//! A [`Color`] holds a color in any of the supported color spaces. Use it when
//! the space is only known at runtime; otherwise prefer the typed models in
//! [`crate::models`].

use std::fmt;

use crate::error::Error;
use crate::models::{LinearRgb, Luv, Rgb, Xyz};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// The color spaces supported by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Space {
    /// sRGB with gamma encoded 8-bit components.
    Rgb,
    /// sRGB without gamma encoding, components in `0.0..=1.0`.
    LinearRgb,
    /// CIE-XYZ referenced to the D65 white point, Y of white is 100.
    Xyz,
    /// CIE-L*u*v* referenced to the D65 white point.
    Luv,
}

impl Space {
    /// All supported spaces.
    pub const ALL: [Space; 4] = [Space::Rgb, Space::LinearRgb, Space::Xyz, Space::Luv];
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Space::Rgb => "rgb",
            Space::LinearRgb => "linear-rgb",
            Space::Xyz => "xyz",
            Space::Luv => "luv",
        })
    }
}

/// A color in any of the supported color spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// A gamma encoded sRGB color.
    Rgb(Rgb),
    /// A linear light sRGB color.
    LinearRgb(LinearRgb),
    /// A CIE-XYZ color.
    Xyz(Xyz),
    /// A CIE-LUV color.
    Luv(Luv),
}

impl Color {
    /// Return the space this color is specified in.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Space::Rgb,
            Color::LinearRgb(_) => Space::LinearRgb,
            Color::Xyz(_) => Space::Xyz,
            Color::Luv(_) => Space::Luv,
        }
    }

    /// Return the components of the color. Components of an [`Rgb`] color are
    /// on the `0..=255` scale.
    pub fn components(&self) -> Components {
        match self {
            Color::Rgb(model) => model.to_components(),
            Color::LinearRgb(model) => model.to_components(),
            Color::Xyz(model) => model.to_components(),
            Color::Luv(model) => model.to_components(),
        }
    }
}

macro_rules! impl_model {
    ($($model:ident),*) => {
        $(
            impl From<$model> for Color {
                fn from(value: $model) -> Self {
                    Color::$model(value)
                }
            }

            impl TryFrom<Color> for $model {
                type Error = Error;

                fn try_from(value: Color) -> Result<Self, Self::Error> {
                    match value {
                        Color::$model(model) => Ok(model),
                        other => Err(Error::SpaceMismatch {
                            expected: Space::$model,
                            actual: other.space(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_model!(Rgb, LinearRgb, Xyz, Luv);
