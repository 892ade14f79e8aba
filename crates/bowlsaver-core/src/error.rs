//! Error handling for Bowlsaver
//!
//! The geometry solver itself is total: degenerate input collapses to empty
//! results instead of failing. These types are for the seams that choose to
//! validate their input up front (constructors fed from configuration, the
//! command-line front end, file I/O).
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised by checked constructors when a dimension cannot describe a real
/// jig or workpiece.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A length that must be strictly positive was not
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive {
        /// The name of the offending dimension.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A value that must be finite was NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// The name of the offending value.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// An arc span outside the supported range
    #[error("Arc span {span} is outside 0..=360 degrees")]
    InvalidSpan {
        /// The rejected span in degrees.
        span: f64,
    },
}

impl GeometryError {
    /// Check that `value` is finite and strictly positive.
    pub fn check_positive(name: &str, value: f64) -> Result<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(GeometryError::NonPositive {
                name: name.to_string(),
                value,
            }
            .into())
        }
    }

    /// Check that `value` is finite.
    pub fn check_finite(name: &str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeometryError::NonFinite {
                name: name.to_string(),
                value,
            }
            .into())
        }
    }
}

/// Main error type for Bowlsaver
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
