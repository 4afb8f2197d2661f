//! Linear interpolation between two colors in the same space.

use num_traits::Float;

use crate::{
    color::{Color, Component, Components},
    error::Error,
    math::clamp,
    models::{LinearRgb, Rgb},
};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

fn lerp_components(a: Components, b: Components, t: Component) -> Components {
    Components(lerp(a.0, b.0, t), lerp(a.1, b.1, t), lerp(a.2, b.2, t))
}

/// Models that can be blended with another color of the same model.
pub trait Blend {
    /// Linearly interpolate from this color to `other`. `mix` is the progress
    /// between them and is clamped to `0.0..=1.0`.
    fn blend(&self, other: &Self, mix: Component) -> Self;
}

impl Blend for Rgb {
    fn blend(&self, other: &Self, mix: Component) -> Self {
        let mix = clamp(mix, 0.0, 1.0);
        Rgb::from_blended(lerp_components(
            self.to_components(),
            other.to_components(),
            mix,
        ))
    }
}

impl Blend for LinearRgb {
    fn blend(&self, other: &Self, mix: Component) -> Self {
        let mix = clamp(mix, 0.0, 1.0);
        lerp_components(self.to_components(), other.to_components(), mix).into()
    }
}

/// Blend two colors of the same model. See [`Blend::blend`].
pub fn blend<T: Blend>(a: &T, b: &T, mix: Component) -> T {
    a.blend(b, mix)
}

impl Color {
    /// Blend this color with another color in the same space.
    ///
    /// Fails if the two colors are in different spaces or if the space does
    /// not support blending.
    pub fn blend(&self, other: &Color, mix: Component) -> Result<Color, Error> {
        let result = match (self, other) {
            (Color::Rgb(a), Color::Rgb(b)) => Ok(Color::Rgb(a.blend(b, mix))),
            (Color::LinearRgb(a), Color::LinearRgb(b)) => Ok(Color::LinearRgb(a.blend(b, mix))),
            (a, b) if a.space() != b.space() => Err(Error::SpaceMismatch {
                expected: a.space(),
                actual: b.space(),
            }),
            (a, _) => Err(Error::BlendUnsupported(a.space())),
        };

        if let Err(ref err) = result {
            tracing::debug!(%err, "rejected blend");
        }

        result
    }
}
