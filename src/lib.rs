//! tinct converts and blends colors across gamma encoded sRGB, linear light
//! sRGB, CIE-XYZ and CIE-LUV.
//!
//! Each space has its own model in [`models`], and the conversion traits
//! ([`ToRgb`], [`ToLinearRgb`], [`ToXyz`], [`ToLuv`]) take any model to any
//! other. [`Color`] wraps a model when the space is only known at runtime.
//!
//! ```rust
//! use tinct::models::rgb;
//! use tinct::{blend, Color, Space, ToLuv};
//!
//! let luv = rgb(210, 105, 30).to_luv();
//! assert!((luv.lightness() - 55.99).abs() < 0.01);
//!
//! let purple = blend(&rgb(255, 0, 0), &rgb(0, 0, 255), 0.5);
//! assert_eq!(purple, rgb(128, 0, 128));
//!
//! let color = Color::from(purple).to_space(Space::Xyz);
//! assert_eq!(color.space(), Space::Xyz);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod gamut;
mod interpolate;
mod math;
pub mod models;


pub use color::{Color, Component, Components, Space};
pub use convert::{ToLinearRgb, ToLuv, ToRgb, ToXyz};
pub use error::Error;
pub use interpolate::{blend, Blend};
pub use models::{Lchuv, LinearRgb, Luv, Rgb, Xyz, D65};
