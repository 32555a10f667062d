//! Aspect-ratio scoring used to rank candidate layouts

use crate::io::configuration::{REASONABLY_SQUARE_THRESHOLD, VERY_SQUARE_THRESHOLD};
use std::fmt;

/// Width divided by height
///
/// Height must be nonzero; joins and decodes never produce an empty image.
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    f64::from(width) / f64::from(height)
}

/// Absolute distance of the aspect ratio from 1:1, lower is closer to square
///
/// Only meaningful for ranking candidates against each other.
pub fn square_distance(width: u32, height: u32) -> f64 {
    (aspect_ratio(width, height) - 1.0).abs()
}

/// Coarse description of how square a finished image is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Squareness {
    /// Square distance below the tight threshold
    VeryClose,
    /// Square distance below the loose threshold
    Reasonable,
    /// Everything else
    Rectangular,
}

impl Squareness {
    /// Bucket an image by its square distance
    pub fn of(width: u32, height: u32) -> Self {
        let distance = square_distance(width, height);
        if distance < VERY_SQUARE_THRESHOLD {
            Self::VeryClose
        } else if distance < REASONABLY_SQUARE_THRESHOLD {
            Self::Reasonable
        } else {
            Self::Rectangular
        }
    }
}

impl fmt::Display for Squareness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VeryClose => "very close to square",
            Self::Reasonable => "reasonably square",
            Self::Rectangular => "more rectangular",
        };
        f.write_str(label)
    }
}
