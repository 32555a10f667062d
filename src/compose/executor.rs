//! Strategy execution and candidate comparison over decoded images

use crate::compose::join::{Axis, join, join_horizontal, join_vertical};
use crate::compose::strategy::{Slot, Strategy, select_strategy};
use crate::geometry::{Orientation, classify, square_distance};
use crate::io::configuration::EXPECTED_IMAGE_COUNT;
use crate::io::error::{CompositeError, Result};
use image::RgbImage;
use tracing::debug;

/// Exactly four decoded source images in input order
#[derive(Debug, Clone)]
pub struct InputSet {
    images: [RgbImage; 4],
}

impl InputSet {
    /// Wrap four images
    pub const fn from_array(images: [RgbImage; 4]) -> Self {
        Self { images }
    }

    /// Wrap a list of images, checking there are exactly four
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputCount` if the list does not hold exactly four images
    pub fn new(images: Vec<RgbImage>) -> Result<Self> {
        let images: [RgbImage; 4] =
            images
                .try_into()
                .map_err(|rejected: Vec<RgbImage>| CompositeError::InvalidInputCount {
                    expected: EXPECTED_IMAGE_COUNT,
                    actual: rejected.len(),
                })?;
        Ok(Self::from_array(images))
    }

    /// Image at the given position
    pub const fn image(&self, slot: Slot) -> &RgbImage {
        let [first, second, third, fourth] = &self.images;
        match slot {
            Slot::First => first,
            Slot::Second => second,
            Slot::Third => third,
            Slot::Fourth => fourth,
        }
    }

    /// Orientation of every image in input order
    pub fn orientations(&self) -> [Orientation; 4] {
        self.images
            .each_ref()
            .map(|image| classify(image.width(), image.height()))
    }
}

/// One possible layout together with its square distance
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Joined image
    pub image: RgbImage,
    /// Axis the final join used
    pub axis: Axis,
    /// Distance of the aspect ratio from 1:1
    pub distance: f64,
}

impl Candidate {
    /// Build the candidate produced by joining `a` and `b` along `axis`
    pub fn join(axis: Axis, a: &RgbImage, b: &RgbImage) -> Self {
        let image = join(axis, a, b);
        let distance = square_distance(image.width(), image.height());
        Self {
            image,
            axis,
            distance,
        }
    }
}

/// Keep whichever candidate is closer to square; `first` wins ties
pub fn closer_to_square(first: Candidate, second: Candidate) -> Candidate {
    if first.distance <= second.distance {
        first
    } else {
        second
    }
}

/// Result of arranging four images
#[derive(Debug, Clone)]
pub struct Arrangement {
    /// Final composite
    pub image: RgbImage,
    /// Rule that produced it
    pub strategy: Strategy,
    /// Axis picked by each candidate comparison, in the order they were made
    pub decisions: Vec<Axis>,
}

/// Compare the vertical and horizontal join of `a` and `b`, vertical listed first
fn best_join(a: &RgbImage, b: &RgbImage, decisions: &mut Vec<Axis>) -> RgbImage {
    let vertical = Candidate::join(Axis::Vertical, a, b);
    let horizontal = Candidate::join(Axis::Horizontal, a, b);
    debug!(
        vertical = vertical.distance,
        horizontal = horizontal.distance,
        "Compared candidate layouts"
    );

    let winner = closer_to_square(vertical, horizontal);
    decisions.push(winner.axis);
    winner.image
}

/// Classify the inputs, select a strategy and build it
pub fn arrange(inputs: &InputSet) -> Arrangement {
    let strategy = select_strategy(&inputs.orientations());
    arrange_with(inputs, strategy)
}

/// Build the composite for an already chosen strategy
pub fn arrange_with(inputs: &InputSet, strategy: Strategy) -> Arrangement {
    let at = move |slot: Slot| inputs.image(slot);
    let mut decisions = Vec::new();

    let image = match strategy {
        Strategy::AllLandscape => {
            let left = join_vertical(at(Slot::First), at(Slot::Second));
            let right = join_vertical(at(Slot::Third), at(Slot::Fourth));
            join_horizontal(&left, &right)
        }
        Strategy::AllPortrait | Strategy::Grid => {
            let top = join_horizontal(at(Slot::First), at(Slot::Second));
            let bottom = join_horizontal(at(Slot::Third), at(Slot::Fourth));
            join_vertical(&top, &bottom)
        }
        Strategy::Mixed {
            portraits: [p0, p1],
            landscapes: [l0, l1],
        } => {
            let portrait_block = join_horizontal(at(p0), at(p1));
            let landscape_block = join_vertical(at(l0), at(l1));
            best_join(&portrait_block, &landscape_block, &mut decisions)
        }
        Strategy::PortraitMajority {
            portraits: [p0, p1, p2],
            fourth,
        } => {
            let pair = join_horizontal(at(p0), at(p1));
            let combined = best_join(&pair, at(p2), &mut decisions);
            best_join(&combined, at(fourth), &mut decisions)
        }
        Strategy::LandscapeMajority {
            landscapes: [l0, l1, l2],
            fourth,
        } => {
            let pair = join_vertical(at(l0), at(l1));
            let combined = best_join(&pair, at(l2), &mut decisions);
            best_join(&combined, at(fourth), &mut decisions)
        }
    };

    debug!(
        strategy = strategy.name(),
        width = image.width(),
        height = image.height(),
        "Arrangement completed"
    );

    Arrangement {
        image,
        strategy,
        decisions,
    }
}
