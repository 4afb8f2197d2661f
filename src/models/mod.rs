//! Models are structs that represent a color in one of the supported color
//! spaces. They represent a type safe way to convert between spaces: each
//! pairwise conversion is only implemented on the models it applies to, and
//! the universal conversions in [`crate::ToRgb`], [`crate::ToLinearRgb`],
//! [`crate::ToXyz`] and [`crate::ToLuv`] are implemented for all of them.
//!
//! ```rust
//! use tinct::models::{rgb, Luv};
//! use tinct::ToXyz;
//!
//! let luv = Luv::from(   // create a color in luv.
//!     rgb(210, 105, 30)
//!         .to_linear_light() // convert to linear rgb.
//!         .to_xyz(),         // convert to xyz.
//! );
//! assert!((luv.lightness() - 55.99).abs() < 0.01);
//! ```

use crate::color::Component;

mod luv;
mod rgb;
mod xyz;

pub use luv::{Lchuv, Luv};
pub use rgb::{LinearRgb, Rgb};
pub use xyz::{Xyz, D65};

pub(crate) use rgb::xyz_to_linear_light;

/// Create a gamma encoded sRGB color. Components are clamped to `0..=255`.
pub fn rgb(red: i32, green: i32, blue: i32) -> Rgb {
    Rgb::new(red, green, blue)
}

/// Create a linear light sRGB color. Components are clamped to `0.0..=1.0`.
pub fn linear_rgb(red: Component, green: Component, blue: Component) -> LinearRgb {
    LinearRgb::new(red, green, blue)
}

/// Create a CIE-XYZ color. Components are stored as given.
pub fn xyz(x: Component, y: Component, z: Component) -> Xyz {
    Xyz::new(x, y, z)
}

/// Create a CIE-LUV color. Components are stored as given.
pub fn luv(lightness: Component, u: Component, v: Component) -> Luv {
    Luv::new(lightness, u, v)
}
