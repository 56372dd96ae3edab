//! Custom error types for coordinate transformation

use std::fmt;
use std::io;

/// Projection-specific error types
#[derive(Debug)]
pub enum ProjectionError {
    /// I/O error
    IoError(io::Error),
    /// CRS string that could not be parsed
    InvalidCrsFormat(String),
    /// EPSG code not present in the registry
    UnregisteredEpsg(u32),
    /// Input coordinate outside the valid domain of the projection
    OutsideProjectionDomain { axis: &'static str, value: f64, limit: f64 },
    /// No transformation implemented between the two systems
    UnsupportedTransform(String, String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::IoError(e) => write!(f, "I/O error: {}", e),
            ProjectionError::InvalidCrsFormat(s) => write!(f, "Unsupported CRS format: {}", s),
            ProjectionError::UnregisteredEpsg(code) => write!(f, "Unregistered EPSG code: {}", code),
            ProjectionError::OutsideProjectionDomain { axis, value, limit } =>
                write!(f, "{} {} outside projection domain (limit: ±{})", axis, value, limit),
            ProjectionError::UnsupportedTransform(from, to) =>
                write!(f, "Unsupported coordinate transformation from {} to {}", from, to),
            ProjectionError::GenericError(msg) => write!(f, "Projection error: {}", msg),
        }
    }
}

impl std::error::Error for ProjectionError {}

impl From<io::Error> for ProjectionError {
    fn from(error: io::Error) -> Self {
        ProjectionError::IoError(error)
    }
}

impl From<String> for ProjectionError {
    fn from(msg: String) -> Self {
        ProjectionError::GenericError(msg)
    }
}

/// Result type for projection operations
pub type ProjResult<T> = Result<T, ProjectionError>;
