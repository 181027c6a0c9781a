//! Helper error types.

use thiserror::Error;

/// Top-level error type for the helper operations.
#[derive(Debug, Error)]
pub enum HelperError {
    /// A range was requested with `min > max`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The inclusive range `[min, max]` has more values than an `i32` can count.
    #[error("range overflow: [{min}, {max}] is wider than i32::MAX values")]
    RangeOverflow {
        /// The requested lower bound.
        min: i32,
        /// The requested upper bound.
        max: i32,
    },

    /// The shared generator could not be configured.
    #[error("configuration error: {0}")]
    Config(String),

    /// Writing to the output stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl HelperError {
    /// Returns `true` for errors caused by the caller's arguments rather than
    /// by the environment.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::RangeOverflow { .. })
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_invalid_argument_is_invalid_argument() {
        assert!(HelperError::InvalidArgument("min > max".into()).is_invalid_argument());
    }

    #[test]
    fn test_range_overflow_is_invalid_argument() {
        let err = HelperError::RangeOverflow {
            min: i32::MIN,
            max: i32::MAX,
        };
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_io_and_config_are_not_invalid_argument() {
        let io_err = HelperError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(!io_err.is_invalid_argument());
        assert!(!HelperError::Config("already set".into()).is_invalid_argument());
    }

    #[test]
    fn test_range_overflow_message_names_bounds() {
        let err = HelperError::RangeOverflow { min: -1, max: 7 };
        assert_eq!(
            err.to_string(),
            "range overflow: [-1, 7] is wider than i32::MAX values"
        );
    }
}
