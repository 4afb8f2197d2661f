//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components},
    math::clamp,
};

/// The D65 white point reference, scaled so that Y is 100.
pub const D65: Components = Components(95.047, 100.0, 108.883);

tinct_macros::gen_model! {
    /// A color in the CIE-XYZ color space with a D65 white point reference.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl Xyz {
    /// Clamp each component to the range between black and the white point,
    /// which is where colors derived from linear sRGB end up.
    pub(crate) fn clamp_to_white_point(&self) -> Self {
        Self::new(
            clamp(self.x, 0.0, D65.0),
            clamp(self.y, 0.0, D65.1),
            clamp(self.z, 0.0, D65.2),
        )
    }
}
