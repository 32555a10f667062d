//! Dimension-only reasoning about images
//!
//! Nothing in here touches pixel data; every function is a pure function of width and height.

/// Distance-from-square scoring and display buckets
pub mod aspect;
/// Portrait/landscape/square classification
pub mod orientation;

pub use aspect::{Squareness, aspect_ratio, square_distance};
pub use orientation::{Orientation, OrientationCounts, classify};
