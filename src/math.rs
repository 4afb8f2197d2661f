//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

/// A 3x3 matrix, stored in the upper left corner of a 3D transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a [`Transform`] from a 3x3 matrix written in row-major order, so
/// that [`transform`] computes `matrix * [c0, c1, c2]`.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    // euclid multiplies row vectors, so the matrix is stored transposed.
    Transform::new(
        m11, m21, m31, 0.0,
        m12, m22, m32, 0.0,
        m13, m23, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

/// Clamp `value` to `min..=max`. NaN is mapped to `min`.
pub fn clamp(value: Component, min: Component, max: Component) -> Component {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Returns true if the value is close enough to zero to be considered zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < Component::EPSILON
}
