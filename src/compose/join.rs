//! Pairwise joins that pad, never crop or resample

use crate::io::configuration::BACKGROUND;
use image::{RgbImage, imageops};
use std::fmt;

/// Direction along which two images are concatenated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Side by side, widths add up
    Horizontal,
    /// Stacked, heights add up
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        })
    }
}

/// Place `b` to the right of `a`
///
/// The canvas is `a.width + b.width` wide and as tall as the taller input;
/// uncovered area keeps the background color.
pub fn join_horizontal(a: &RgbImage, b: &RgbImage) -> RgbImage {
    let width = a.width() + b.width();
    let height = a.height().max(b.height());

    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);
    imageops::replace(&mut canvas, a, 0, 0);
    imageops::replace(&mut canvas, b, i64::from(a.width()), 0);
    canvas
}

/// Place `b` below `a`
///
/// The canvas is as wide as the wider input and `a.height + b.height` tall;
/// uncovered area keeps the background color.
pub fn join_vertical(a: &RgbImage, b: &RgbImage) -> RgbImage {
    let width = a.width().max(b.width());
    let height = a.height() + b.height();

    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);
    imageops::replace(&mut canvas, a, 0, 0);
    imageops::replace(&mut canvas, b, 0, i64::from(a.height()));
    canvas
}

/// Join along the given axis
pub fn join(axis: Axis, a: &RgbImage, b: &RgbImage) -> RgbImage {
    match axis {
        Axis::Horizontal => join_horizontal(a, b),
        Axis::Vertical => join_vertical(a, b),
    }
}
