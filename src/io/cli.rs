//! Command-line interface composing four images into one output file

use crate::compose::pipeline::{CompositeOutcome, CompositeRequest, create_composite};
use crate::io::configuration::{DEFAULT_DOWNSCALE, EXPECTED_IMAGE_COUNT};
use crate::io::error::{CompositeError, Result};
use crate::io::logging;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "quadmosaic")]
#[command(version, about = "Compose four images into a near-square mosaic")]
/// Command-line arguments for the composition tool
pub struct Cli {
    /// Four input images (PNG or JPEG) followed by the output path
    #[arg(value_name = "IMAGES... OUTPUT", required = true, num_args = 2..)]
    pub paths: Vec<PathBuf>,

    /// Downscale factor for the final image, greater than 0 and at most 1
    #[arg(short, long, default_value_t = DEFAULT_DOWNSCALE, allow_negative_numbers = true)]
    pub downscale: f64,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log candidate scores and intermediate sizes
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Source image paths, everything but the last positional path
    pub fn image_paths(&self) -> &[PathBuf] {
        self.paths
            .split_last()
            .map(|(_, images)| images)
            .unwrap_or_default()
    }

    /// Output path, the last positional path
    pub fn output_path(&self) -> Option<&Path> {
        self.paths.last().map(PathBuf::as_path)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for the chosen flags
    pub const fn log_level(&self) -> &'static str {
        logging::default_level(self.quiet, self.verbose)
    }

    /// Build the composition request described by the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputCount` if no output path was given
    pub fn request(&self) -> Result<CompositeRequest> {
        let output = self
            .output_path()
            .ok_or(CompositeError::InvalidInputCount {
                expected: EXPECTED_IMAGE_COUNT,
                actual: 0,
            })?;
        Ok(
            CompositeRequest::new(self.image_paths().to_vec(), output)
                .with_downscale(self.downscale),
        )
    }
}

/// Runs one composition with optional progress display
pub struct CompositeProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CompositeProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Compose the images named on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if validation, decoding, scaling or encoding fails
    pub fn process(&self) -> Result<CompositeOutcome> {
        let request = self.cli.request()?;
        let result = create_composite(&request, self.progress_manager.as_ref());

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let outcome = result?;
        Self::log_summary(&outcome);
        Ok(outcome)
    }

    fn log_summary(outcome: &CompositeOutcome) {
        info!(
            "Orientations: {} portrait, {} landscape, {} square",
            outcome.orientations.portrait, outcome.orientations.landscape, outcome.orientations.square
        );
        info!("Arrangement: {}", outcome.strategy);
        info!(
            "Final dimensions: {}x{} (aspect ratio {:.3}, {})",
            outcome.width,
            outcome.height,
            outcome.aspect_ratio(),
            outcome.squareness()
        );
        info!(
            "Saved {} ({:.2} MB)",
            outcome.output_path.display(),
            outcome.size_bytes as f64 / (1024.0 * 1024.0)
        );
    }
}
