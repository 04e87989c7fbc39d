//! Error types for structured error handling.
//!
//! All failures in this crate happen at construction time. Evaluating a
//! constructed path is total, so there is no runtime error variant.

use thiserror::Error;

/// Construction-time failures for keys, shapes and group elements.
///
/// # Examples
/// ```
/// use path_core::types::PathError;
///
/// let err = PathError::InvalidSeed("expected 64 hex characters, got 3".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid seed: expected 64 hex characters, got 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Shape contains a zero dimension or could not be parsed.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Key material is malformed.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Matrix is not an upper unitriangular 3x3 matrix.
    #[error("Not an element of the Heisenberg group: {0}")]
    NotInGroup(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PathError::InvalidShape("dimension 1 is zero in [3, 0]".to_string());
        assert_eq!(err.to_string(), "Invalid shape: dimension 1 is zero in [3, 0]");

        let err = PathError::NotInGroup("expected 3x3, got 2x2".to_string());
        assert!(err.to_string().contains("Heisenberg group"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<PathError>();
    }
}
