//! Errors reported by operations on the dynamic [`crate::Color`].

use thiserror::Error;

use crate::color::Space;

/// Error type for operations that require a color in a specific space.
///
/// The typed models make these errors impossible; they only surface when
/// working with [`crate::Color`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The color is not in the space the operation requires.
    #[error("expected a color in the {expected} space, found {actual}")]
    SpaceMismatch {
        /// The space the operation requires.
        expected: Space,
        /// The space of the color that was passed in.
        actual: Space,
    },

    /// Colors in this space can not be blended.
    #[error("blending colors in the {0} space is not supported")]
    BlendUnsupported(Space),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_spaces() {
        let err = Error::SpaceMismatch {
            expected: Space::Rgb,
            actual: Space::LinearRgb,
        };
        assert_eq!(
            err.to_string(),
            "expected a color in the rgb space, found linear-rgb"
        );

        let err = Error::BlendUnsupported(Space::Luv);
        assert_eq!(err.to_string(), "blending colors in the luv space is not supported");
    }
}
