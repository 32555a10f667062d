//! Decoding, downscaling and format-aware encoding of composites

use crate::io::configuration::{FALLBACK_EXTENSION, JPEG_QUALITY};
use crate::io::error::{CompositeError, Result, file_system, invalid_scale};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ImageReader, ImageResult, RgbImage};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

// Decoder choice follows the file signature, the extension only breaks ties
fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| file_system(path, "open image", e))
}

/// Decode an image file into an RGB buffer
///
/// The format is detected from the file contents, so mislabeled or
/// extensionless files still decode.
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be opened, or `ImageLoad` if its
/// contents cannot be decoded
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = open_reader(path)?
        .decode()
        .map_err(|source| CompositeError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(image.to_rgb8())
}

/// Read width and height from an image header without decoding pixels
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be opened, or `ImageLoad` if the
/// header cannot be read or the format is unsupported
pub fn dimensions(path: &Path) -> Result<(u32, u32)> {
    open_reader(path)?
        .into_dimensions()
        .map_err(|source| CompositeError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
}

/// Check a downscale factor lies in (0, 1]
///
/// # Errors
///
/// Returns `InvalidScaleFactor` for zero, negative, NaN or greater-than-one factors
pub fn validate_scale_factor(factor: f64) -> Result<()> {
    if factor > 0.0 && factor <= 1.0 {
        Ok(())
    } else {
        Err(invalid_scale(
            factor,
            &"must be greater than 0 and at most 1",
        ))
    }
}

/// Shrink both axes by `factor`, rounding down, with Lanczos resampling
///
/// A factor of exactly 1 returns the image untouched.
///
/// # Errors
///
/// Returns `InvalidScaleFactor` if the factor is outside (0, 1] or if either
/// scaled dimension would round down to zero
pub fn scale(image: RgbImage, factor: f64) -> Result<RgbImage> {
    validate_scale_factor(factor)?;
    if factor >= 1.0 {
        return Ok(image);
    }

    let (width, height) = image.dimensions();
    let scaled_width = (f64::from(width) * factor).floor() as u32;
    let scaled_height = (f64::from(height) * factor).floor() as u32;

    if scaled_width == 0 || scaled_height == 0 {
        return Err(invalid_scale(
            factor,
            &format!("scaling {width}x{height} would produce an empty image"),
        ));
    }

    debug!(
        from = %format!("{width}x{height}"),
        to = %format!("{scaled_width}x{scaled_height}"),
        factor,
        "Downscaling composite"
    );
    Ok(imageops::resize(
        &image,
        scaled_width,
        scaled_height,
        FilterType::Lanczos3,
    ))
}

/// Encoded file format of a composite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless, default compression effort with adaptive filtering
    Png,
    /// Lossy at a fixed quality
    Jpeg,
}

impl OutputFormat {
    /// Recognize a file extension, case-insensitively
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Pick the format for an output path
    ///
    /// Unrecognized or missing extensions fall back to PNG and the returned
    /// path has its extension replaced accordingly.
    pub fn resolve(path: &Path) -> (Self, PathBuf) {
        match path
            .extension()
            .and_then(OsStr::to_str)
            .and_then(Self::from_extension)
        {
            Some(format) => (format, path.to_path_buf()),
            None => (Self::Png, path.with_extension(FALLBACK_EXTENSION)),
        }
    }

    /// MIME type served for downloads
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// Encode an image in memory
///
/// # Errors
///
/// Returns the encoder error if the image cannot be encoded
pub fn encode_to_vec(image: &RgbImage, format: OutputFormat) -> ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    match format {
        OutputFormat::Png => {
            let encoder = PngEncoder::new_with_quality(
                &mut bytes,
                CompressionType::Default,
                PngFilter::Adaptive,
            );
            image.write_with_encoder(encoder)?;
        }
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
            image.write_with_encoder(encoder)?;
        }
    }
    Ok(bytes)
}

/// Where and how a composite was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Path actually written, possibly with a corrected extension
    pub path: PathBuf,
    /// Format chosen from the extension
    pub format: OutputFormat,
    /// Size of the written file in bytes
    pub size_bytes: u64,
}

/// Encode an image and write it to `requested`, choosing the codec from its extension
///
/// # Errors
///
/// Returns an error if:
/// - The encoder rejects the image
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn encode(image: &RgbImage, requested: &Path) -> Result<EncodedImage> {
    let (format, path) = OutputFormat::resolve(requested);
    let bytes = encode_to_vec(image, format).map_err(|source| CompositeError::ImageExport {
        path: path.clone(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| file_system(parent, "create directory", e))?;
    }
    fs::write(&path, &bytes).map_err(|e| file_system(&path, "write", e))?;

    Ok(EncodedImage {
        path,
        format,
        size_bytes: bytes.len() as u64,
    })
}
