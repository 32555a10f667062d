//! Composition constants and runtime configuration defaults

use image::Rgb;

/// Number of source images every composite is built from
pub const EXPECTED_IMAGE_COUNT: usize = 4;

/// Downscale factor applied when none is requested (keeps original size)
pub const DEFAULT_DOWNSCALE: f64 = 1.0;

// Padding for the cross axis when joined images differ in size
/// Fill color for canvas areas not covered by a source image
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

// Output encoding settings
/// JPEG quality on a 1-100 scale
pub const JPEG_QUALITY: u8 = 85;
/// Extension used when the requested output extension is not recognized
pub const FALLBACK_EXTENSION: &str = "png";

// Display thresholds on the square distance of a finished composite
/// Below this the composite reads as square
pub const VERY_SQUARE_THRESHOLD: f64 = 0.1;
/// Below this the composite reads as roughly square
pub const REASONABLY_SQUARE_THRESHOLD: f64 = 0.3;

// Upload session settings
/// File name of the composite written inside a session working directory
pub const SESSION_OUTPUT_NAME: &str = "composite_output.png";
/// Size ratio (output / inputs) under which the output counts as compact
pub const COMPACT_SIZE_RATIO: f64 = 1.2;

// Progress bar display settings
/// Width of the stage progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
