//! Orientation-aware composition of four images into a single near-square mosaic
//!
//! Images are classified as portrait, landscape or square, paired along the axis
//! that counteracts their shape, and the competing final layouts are ranked by how
//! far their aspect ratio sits from 1:1.

#![forbid(unsafe_code)]

/// Layout construction: joins, strategy selection and the end-to-end pipeline
pub mod compose;
/// Orientation classification and aspect-ratio scoring
pub mod geometry;
/// Input/output operations, command-line front end and error handling
pub mod io;

pub use io::error::{CompositeError, Result};
