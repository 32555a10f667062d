//! Error types for composition operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all composition operations
#[derive(Debug)]
pub enum CompositeError {
    /// Not exactly the expected number of source images
    InvalidInputCount {
        /// Number of images a composite needs
        expected: usize,
        /// Number of images supplied
        actual: usize,
    },

    /// Source path is missing or cannot be opened as a regular file
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Downscale factor outside (0, 1] or collapsing the image to nothing
    InvalidScaleFactor {
        /// Requested factor
        factor: f64,
        /// Explanation of why the factor is rejected
        reason: String,
    },

    /// Source file exists but cannot be decoded as an image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode the composite
    ImageExport {
        /// Path the composite was destined for
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInputCount { expected, actual } => {
                write!(
                    f,
                    "Exactly {expected} images are required, but {actual} were supplied"
                )
            }
            Self::FileNotFound { path } => {
                write!(f, "Image file not found: '{}'", path.display())
            }
            Self::InvalidScaleFactor { factor, reason } => {
                write!(f, "Invalid downscale factor {factor}: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CompositeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidInputCount { .. }
            | Self::FileNotFound { .. }
            | Self::InvalidScaleFactor { .. } => None,
        }
    }
}

/// Convenience type alias for composition results
pub type Result<T> = std::result::Result<T, CompositeError>;

/// Create an invalid scale factor error
pub fn invalid_scale(factor: f64, reason: &impl ToString) -> CompositeError {
    CompositeError::InvalidScaleFactor {
        factor,
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to the path it happened on
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> CompositeError {
    CompositeError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
