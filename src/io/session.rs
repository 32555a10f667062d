//! Upload handling for interactive front ends
//!
//! A session owns a scoped working directory holding the four uploaded files and
//! the composite produced from them. Dropping the session removes the directory,
//! on success and on every error path alike.

use crate::compose::pipeline::{CompositeRequest, create_composite};
use crate::compose::strategy::Strategy;
use crate::geometry::{Orientation, OrientationCounts, Squareness, aspect_ratio, classify};
use crate::io::configuration::{COMPACT_SIZE_RATIO, EXPECTED_IMAGE_COUNT, SESSION_OUTPUT_NAME};
use crate::io::error::{CompositeError, Result, file_system};
use crate::io::image::{OutputFormat, dimensions};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// One uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Client-supplied file name
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Bundle a name with file contents
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

#[derive(Debug)]
struct StoredUpload {
    name: String,
    path: PathBuf,
    size_bytes: u64,
}

/// Per-image information shown before composing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    /// Client-supplied file name
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Shape class
    pub orientation: Orientation,
    /// Uploaded size in bytes
    pub size_bytes: u64,
}

impl ImageSummary {
    /// Width over height
    pub fn aspect_ratio(&self) -> f64 {
        aspect_ratio(self.width, self.height)
    }
}

/// Everything a front end displays after composing
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    /// Rule used to arrange the uploads
    pub strategy: Strategy,
    /// Final width in pixels
    pub width: u32,
    /// Final height in pixels
    pub height: u32,
    /// Encoded composite, ready to offer as a download
    pub encoded: Vec<u8>,
    /// Encoding of `encoded`
    pub format: OutputFormat,
    /// Downscale factor that was applied
    pub downscale: f64,
    /// Combined size of the uploads in bytes
    pub input_bytes: u64,
}

impl SessionReport {
    /// Width over height
    pub fn aspect_ratio(&self) -> f64 {
        aspect_ratio(self.width, self.height)
    }

    /// Display bucket for how square the composite is
    pub fn squareness(&self) -> Squareness {
        Squareness::of(self.width, self.height)
    }

    /// Size of the encoded composite in bytes
    pub fn encoded_size(&self) -> u64 {
        self.encoded.len() as u64
    }

    /// Encoded size relative to the combined upload size
    pub fn size_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            1.0
        } else {
            self.encoded_size() as f64 / self.input_bytes as f64
        }
    }

    /// Whether the composite stays close to the combined upload size
    pub fn is_compact(&self) -> bool {
        self.size_ratio() < COMPACT_SIZE_RATIO
    }

    /// Approximate percentage of file size saved by downscaling
    ///
    /// `None` when the composite kept its original dimensions.
    pub fn estimated_size_reduction(&self) -> Option<f64> {
        (self.downscale < 1.0).then(|| (1.0 - self.downscale * self.downscale) * 100.0)
    }

    /// Content type to attach when offering `encoded` as a download
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Step-by-step explanation of the arrangement
    pub const fn strategy_details(&self) -> &'static [&'static str] {
        self.strategy.describe()
    }
}

// Index prefix keeps identically named uploads apart; only the final path component is kept
fn stored_name(index: usize, name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(OsStr::to_str)
        .filter(|base| !base.is_empty())
        .unwrap_or("upload");
    format!("{}_{base}", index + 1)
}

/// Four uploads stored in a working directory that lives as long as the session
#[derive(Debug)]
pub struct UploadSession {
    workdir: TempDir,
    uploads: Vec<StoredUpload>,
}

impl UploadSession {
    /// Store uploads in a fresh directory under the system temp location
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputCount` unless exactly four uploads are given, without
    /// touching the filesystem, or a file system error if storing fails
    pub fn new(uploads: Vec<Upload>) -> Result<Self> {
        Self::new_in(&std::env::temp_dir(), uploads)
    }

    /// Store uploads in a fresh directory under `parent`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputCount` unless exactly four uploads are given, without
    /// touching the filesystem, or a file system error if storing fails
    pub fn new_in(parent: &Path, uploads: Vec<Upload>) -> Result<Self> {
        if uploads.len() != EXPECTED_IMAGE_COUNT {
            return Err(CompositeError::InvalidInputCount {
                expected: EXPECTED_IMAGE_COUNT,
                actual: uploads.len(),
            });
        }

        let workdir = tempfile::Builder::new()
            .prefix("quadmosaic-")
            .tempdir_in(parent)
            .map_err(|e| file_system(parent, "create working directory", e))?;

        let mut stored = Vec::with_capacity(uploads.len());
        for (index, upload) in uploads.into_iter().enumerate() {
            let path = workdir.path().join(stored_name(index, &upload.name));
            fs::write(&path, &upload.bytes).map_err(|e| file_system(&path, "write upload", e))?;
            stored.push(StoredUpload {
                name: upload.name,
                path,
                size_bytes: upload.bytes.len() as u64,
            });
        }
        debug!(workdir = %workdir.path().display(), "Stored uploads");

        Ok(Self {
            workdir,
            uploads: stored,
        })
    }

    /// Working directory holding the uploads and the composite
    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }

    /// Stored upload paths in upload order
    pub fn image_paths(&self) -> Vec<PathBuf> {
        self.uploads.iter().map(|upload| upload.path.clone()).collect()
    }

    /// Combined size of the uploads in bytes
    pub fn total_input_bytes(&self) -> u64 {
        self.uploads.iter().map(|upload| upload.size_bytes).sum()
    }

    /// Dimensions, orientation and size of every upload
    ///
    /// # Errors
    ///
    /// Returns `ImageLoad` if an upload is not a readable image
    pub fn summaries(&self) -> Result<Vec<ImageSummary>> {
        self.uploads
            .iter()
            .map(|upload| {
                let (width, height) = dimensions(&upload.path)?;
                Ok(ImageSummary {
                    name: upload.name.clone(),
                    width,
                    height,
                    orientation: classify(width, height),
                    size_bytes: upload.size_bytes,
                })
            })
            .collect()
    }

    /// Orientation tally of the uploads
    ///
    /// # Errors
    ///
    /// Returns `ImageLoad` if an upload is not a readable image
    pub fn orientation_counts(&self) -> Result<OrientationCounts> {
        let orientations = self
            .summaries()?
            .into_iter()
            .map(|summary| summary.orientation)
            .collect::<Vec<_>>();
        Ok(OrientationCounts::tally(&orientations))
    }

    /// Compose the uploads into a PNG inside the working directory
    ///
    /// # Errors
    ///
    /// Returns any composition error, or a file system error if the written
    /// composite cannot be read back
    pub fn compose(&self, downscale: f64) -> Result<SessionReport> {
        let request =
            CompositeRequest::new(self.image_paths(), self.workdir().join(SESSION_OUTPUT_NAME))
                .with_downscale(downscale);
        let outcome = create_composite(&request, None)?;

        let encoded = fs::read(&outcome.output_path)
            .map_err(|e| file_system(&outcome.output_path, "read composite", e))?;

        Ok(SessionReport {
            strategy: outcome.strategy,
            width: outcome.width,
            height: outcome.height,
            encoded,
            format: outcome.format,
            downscale,
            input_bytes: self.total_input_bytes(),
        })
    }
}
