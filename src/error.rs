//! Error types for lanenoise operations.
//!
//! The noise kernels themselves cannot fail. These errors come from the layers that
//! accept caller-provided buffers, grids and settings.

use std::fmt;

/// Errors that can occur when sampling noise into buffers or grids.
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// Coordinate and output slices do not have the same length.
    LengthMismatch {
        /// Length every slice was expected to have.
        expected: usize,
        /// Length of the offending slice.
        actual: usize,
        /// Human-readable error message.
        message: String,
    },
    /// Map bounds are not finite or not ordered.
    InvalidBounds {
        /// Lower bound that was provided.
        lower: f64,
        /// Upper bound that was provided.
        upper: f64,
        /// Human-readable error message.
        message: String,
    },
    /// A map resolution has a zero dimension.
    InvalidResolution {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
        /// Human-readable error message.
        message: String,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseError::LengthMismatch {
                expected,
                actual,
                message,
            } => write!(
                f,
                "Length mismatch: {} (expected {} elements, got {})",
                message, expected, actual
            ),
            NoiseError::InvalidBounds {
                lower,
                upper,
                message,
            } => write!(
                f,
                "Invalid bounds: {} (lower: {}, upper: {})",
                message, lower, upper
            ),
            NoiseError::InvalidResolution {
                width,
                height,
                message,
            } => write!(
                f,
                "Invalid resolution: {} ({}x{})",
                message, width, height
            ),
            NoiseError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for NoiseError {}

/// Result type alias for lanenoise operations.
pub type Result<T> = std::result::Result<T, NoiseError>;

/// Creates a length mismatch error.
pub fn length_mismatch(expected: usize, actual: usize, message: impl Into<String>) -> NoiseError {
    NoiseError::LengthMismatch {
        expected,
        actual,
        message: message.into(),
    }
}

/// Creates an invalid bounds error.
pub fn invalid_bounds(lower: f64, upper: f64, message: impl Into<String>) -> NoiseError {
    NoiseError::InvalidBounds {
        lower,
        upper,
        message: message.into(),
    }
}

/// Creates an invalid resolution error.
pub fn invalid_resolution(width: usize, height: usize, message: impl Into<String>) -> NoiseError {
    NoiseError::InvalidResolution {
        width,
        height,
        message: message.into(),
    }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> NoiseError {
    NoiseError::ValidationError {
        message: message.into(),
    }
}
