//! Error type of operator construction and application
use thiserror::Error as ThisError;

/// Result alias used by all fallible builders
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported before any operator is built or applied
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Grid or matrix size below what the construction needs
    #[error("invalid size in {context}: need n >= {min}, got {n}")]
    InvalidSize {
        /// Builder that rejected the size
        context: &'static str,
        /// Requested size
        n: usize,
        /// Smallest admissible size
        min: usize,
    },

    /// Input length does not match the operator (or companion vectors)
    #[error("dimension mismatch: expected length {expected}, got {got}")]
    DimensionMismatch {
        /// Length the operator was built for
        expected: usize,
        /// Length that was passed
        got: usize,
    },

    /// Too few stencil nodes for the requested derivative order
    #[error("insufficient nodes for derivative order {order}: need at least {min} nodes, got {got}")]
    InsufficientNodes {
        /// Derivative order
        order: usize,
        /// Smallest admissible number of nodes
        min: usize,
        /// Number of nodes that was passed
        got: usize,
    },

    /// Parameter outside of its admissible range
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        /// Parameter name
        parameter: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl Error {
    pub(crate) fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }
}

/// Return `InvalidSize` if `n < min`
pub(crate) fn check_size(context: &'static str, n: usize, min: usize) -> Result<()> {
    if n < min {
        Err(Error::InvalidSize { context, n, min })
    } else {
        Ok(())
    }
}

/// Return `DimensionMismatch` if `got != expected`
pub(crate) fn check_len(expected: usize, got: usize) -> Result<()> {
    if got == expected {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, got })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size() {
        assert!(check_size("pts", 1, 1).is_ok());
        assert_eq!(
            check_size("pts", 0, 1),
            Err(Error::InvalidSize {
                context: "pts",
                n: 0,
                min: 1
            })
        );
    }

    #[test]
    fn test_error_message() {
        let e = Error::DimensionMismatch {
            expected: 4,
            got: 5,
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected length 4, got 5");
        let e = Error::invalid_parameter("dx", "must be positive");
        assert_eq!(e.to_string(), "invalid parameter 'dx': must be positive");
    }
}
