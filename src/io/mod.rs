//! Input/output, front ends and ambient concerns

/// Command-line argument parsing and processing
pub mod cli;
/// Constants and default values
pub mod configuration;
/// Error types
pub mod error;
/// Decoding, scaling and encoding
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Stage progress display
pub mod progress;
/// Upload handling for interactive front ends
pub mod session;
