//! Portrait/landscape/square classification from pixel dimensions

use std::fmt;

/// Shape class of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Taller than wide
    Portrait,
    /// Wider than tall
    Landscape,
    /// Equal width and height
    Square,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
            Self::Square => "square",
        };
        f.write_str(label)
    }
}

/// Classify an image by comparing its width and height
pub const fn classify(width: u32, height: u32) -> Orientation {
    if height > width {
        Orientation::Portrait
    } else if width > height {
        Orientation::Landscape
    } else {
        Orientation::Square
    }
}

/// Number of images in each orientation class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrientationCounts {
    /// Images taller than wide
    pub portrait: usize,
    /// Images wider than tall
    pub landscape: usize,
    /// Images with equal sides
    pub square: usize,
}

impl OrientationCounts {
    /// Tally a sequence of orientations
    pub fn tally<'a, I>(orientations: I) -> Self
    where
        I: IntoIterator<Item = &'a Orientation>,
    {
        orientations
            .into_iter()
            .fold(Self::default(), |mut counts, orientation| {
                match orientation {
                    Orientation::Portrait => counts.portrait += 1,
                    Orientation::Landscape => counts.landscape += 1,
                    Orientation::Square => counts.square += 1,
                }
                counts
            })
    }

    /// Total number of images counted
    pub const fn total(&self) -> usize {
        self.portrait + self.landscape + self.square
    }
}
