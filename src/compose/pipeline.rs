//! End-to-end composition from file paths to an encoded file

use crate::compose::executor::{Arrangement, InputSet, arrange};
use crate::compose::join::Axis;
use crate::compose::strategy::Strategy;
use crate::geometry::{OrientationCounts, Squareness, aspect_ratio};
use crate::io::configuration::{DEFAULT_DOWNSCALE, EXPECTED_IMAGE_COUNT};
use crate::io::error::{CompositeError, Result};
use crate::io::image::{OutputFormat, encode, load_rgb, scale, validate_scale_factor};
use crate::io::progress::{ProgressManager, Stage};
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, info};

/// Source paths, destination and downscale factor for one composite
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeRequest {
    /// Source images in the order they were given
    pub image_paths: Vec<PathBuf>,
    /// Requested output path; the extension selects the format
    pub output_path: PathBuf,
    /// Factor in (0, 1] applied to the finished composite
    pub downscale: f64,
}

impl CompositeRequest {
    /// Request at original size
    pub fn new(image_paths: Vec<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            image_paths,
            output_path: output_path.into(),
            downscale: DEFAULT_DOWNSCALE,
        }
    }

    /// Replace the downscale factor
    #[must_use]
    pub fn with_downscale(mut self, downscale: f64) -> Self {
        self.downscale = downscale;
        self
    }

    /// Check everything that can be checked before decoding
    ///
    /// Order: image count, downscale factor, then that each path opens as a
    /// regular file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputCount`, `InvalidScaleFactor` or `FileNotFound`
    pub fn validate(&self) -> Result<()> {
        if self.image_paths.len() != EXPECTED_IMAGE_COUNT {
            return Err(CompositeError::InvalidInputCount {
                expected: EXPECTED_IMAGE_COUNT,
                actual: self.image_paths.len(),
            });
        }

        validate_scale_factor(self.downscale)?;

        if let Some(missing) = self
            .image_paths
            .iter()
            .find(|path| !path.is_file() || File::open(path).is_err())
        {
            return Err(CompositeError::FileNotFound {
                path: missing.clone(),
            });
        }

        Ok(())
    }
}

/// What was produced for a request
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeOutcome {
    /// Path actually written
    pub output_path: PathBuf,
    /// Encoding used
    pub format: OutputFormat,
    /// Final width in pixels
    pub width: u32,
    /// Final height in pixels
    pub height: u32,
    /// Size of the written file in bytes
    pub size_bytes: u64,
    /// Rule used to arrange the inputs
    pub strategy: Strategy,
    /// Axis picked by each candidate comparison
    pub decisions: Vec<Axis>,
    /// Orientation tally of the inputs
    pub orientations: OrientationCounts,
}

impl CompositeOutcome {
    /// Width over height of the written image
    pub fn aspect_ratio(&self) -> f64 {
        aspect_ratio(self.width, self.height)
    }

    /// Display bucket for how square the written image is
    pub fn squareness(&self) -> Squareness {
        Squareness::of(self.width, self.height)
    }
}

fn announce(progress: Option<&ProgressManager>, stage: Stage) {
    if let Some(pm) = progress {
        pm.start_stage(stage);
    }
}

fn load_inputs(paths: &[PathBuf]) -> Result<InputSet> {
    let images = paths
        .iter()
        .map(|path| load_rgb(path))
        .collect::<Result<Vec<_>>>()?;
    InputSet::new(images)
}

/// Validate, load, arrange, scale and encode four images
///
/// All cheap checks run before any decode or join.
///
/// # Errors
///
/// Returns an error if:
/// - The request fails validation (count, downscale factor, missing file)
/// - A source file cannot be decoded
/// - The downscaled composite would be empty
/// - The output cannot be encoded or written
pub fn create_composite(
    request: &CompositeRequest,
    progress: Option<&ProgressManager>,
) -> Result<CompositeOutcome> {
    request.validate()?;

    announce(progress, Stage::Loading);
    let inputs = load_inputs(&request.image_paths)?;
    let orientations = OrientationCounts::tally(&inputs.orientations());
    debug!(
        images = orientations.total(),
        portrait = orientations.portrait,
        landscape = orientations.landscape,
        square = orientations.square,
        "Classified inputs"
    );

    announce(progress, Stage::Arranging);
    let Arrangement {
        image,
        strategy,
        decisions,
    } = arrange(&inputs);
    drop(inputs);

    announce(progress, Stage::Scaling);
    let image = scale(image, request.downscale)?;

    announce(progress, Stage::Encoding);
    let encoded = encode(&image, &request.output_path)?;

    let outcome = CompositeOutcome {
        output_path: encoded.path,
        format: encoded.format,
        width: image.width(),
        height: image.height(),
        size_bytes: encoded.size_bytes,
        strategy,
        decisions,
        orientations,
    };
    info!(
        path = %outcome.output_path.display(),
        strategy = outcome.strategy.name(),
        "Composite saved"
    );

    Ok(outcome)
}
