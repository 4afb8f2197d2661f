//! The sRGB transfer function.

use crate::color::{Component, Components};

/// Gamma encoded values up to this threshold are on the linear segment.
const ENCODED_THRESHOLD: Component = 0.04045;

/// Linear light values up to this threshold are on the linear segment.
const LINEAR_THRESHOLD: Component = 0.0031308;

/// Convert the components from gamma encoded to linear light.
pub fn to_linear_light(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs <= ENCODED_THRESHOLD {
            value / 12.92
        } else {
            value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
        }
    })
}

/// Convert the components from linear light to gamma encoded.
pub fn to_gamma_encoded(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs <= LINEAR_THRESHOLD {
            value * 12.92
        } else {
            value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
        }
    })
}
