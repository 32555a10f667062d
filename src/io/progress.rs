//! Stage progress display for a single composite

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Step of the composition pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Decoding the source images
    Loading,
    /// Classifying and joining
    Arranging,
    /// Applying the downscale factor
    Scaling,
    /// Writing the output file
    Encoding,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Self; 4] = [Self::Loading, Self::Arranging, Self::Scaling, Self::Encoding];

    /// Zero-based position in the pipeline
    pub const fn index(self) -> usize {
        match self {
            Self::Loading => 0,
            Self::Arranging => 1,
            Self::Scaling => 2,
            Self::Encoding => 3,
        }
    }

    /// Label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::Arranging => "Arranging",
            Self::Scaling => "Scaling",
            Self::Encoding => "Encoding",
        }
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advancing once per pipeline stage
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress bar drawn to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(Stage::ALL.len() as u64);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(Stage::ALL.len() as u64);
        Self { bar }
    }

    /// Announce the stage now running
    pub fn start_stage(&self, stage: Stage) {
        self.bar.set_position(stage.index() as u64);
        self.bar.set_message(stage.label());
    }

    /// Number of stages completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Complete and clear the bar
    pub fn finish(&self) {
        self.bar.set_position(Stage::ALL.len() as u64);
        self.bar.finish_and_clear();
    }
}
