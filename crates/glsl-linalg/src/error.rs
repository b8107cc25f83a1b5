use thiserror::Error;

/// Error returned when converting a slice of the wrong length into a [`Vector`][crate::Vector].
///
/// ```
/// # use glsl_linalg::*;
/// let err = Vec3f::try_from(&[1.0, 2.0][..]).unwrap_err();
/// assert_eq!(err.expected, 3);
/// assert_eq!(err.actual, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a slice of {expected} elements, got {actual}")]
pub struct SliceLengthError {
    pub expected: usize,
    pub actual: usize,
}
