//! Strategy selection from the orientations of the four inputs
//!
//! Rules are tried in a fixed order and the first match wins:
//! four landscapes, four portraits, two-and-two mixed, three or more portraits,
//! three or more landscapes, and finally a plain 2x2 grid.

use crate::geometry::Orientation;
use std::fmt;

/// Position of one of the four inputs, in the order they were supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Image 1
    First,
    /// Image 2
    Second,
    /// Image 3
    Third,
    /// Image 4
    Fourth,
}

impl Slot {
    /// All slots in input order
    pub const ALL: [Self; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    /// Zero-based position in the input
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image {}", self.index() + 1)
    }
}

/// Arrangement rule chosen for a set of four inputs, with the inputs it uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Images 1&2 and 3&4 stacked, the two columns placed side by side
    AllLandscape,
    /// Images 1&2 and 3&4 side by side, the two rows stacked
    AllPortrait,
    /// Two portraits side by side and two landscapes stacked, blocks combined
    /// along whichever axis lands closer to square
    Mixed {
        /// First two portraits in input order
        portraits: [Slot; 2],
        /// First two landscapes in input order
        landscapes: [Slot; 2],
    },
    /// Two portraits side by side, then the third and the fourth input are
    /// each added along whichever axis lands closer to square
    PortraitMajority {
        /// First three portraits in input order
        portraits: [Slot; 3],
        /// Input added last, taken by position rather than orientation
        fourth: Slot,
    },
    /// Two landscapes stacked, then the third and the fourth input are each
    /// added along whichever axis lands closer to square
    LandscapeMajority {
        /// First three landscapes in input order
        landscapes: [Slot; 3],
        /// Input added last, taken by position rather than orientation
        fourth: Slot,
    },
    /// Images 1&2 and 3&4 side by side, the two rows stacked
    Grid,
}

impl Strategy {
    /// Short name for logs and reports
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AllLandscape => "four landscapes",
            Self::AllPortrait => "four portraits",
            Self::Mixed { .. } => "mixed orientation",
            Self::PortraitMajority { .. } => "multiple portraits",
            Self::LandscapeMajority { .. } => "multiple landscapes",
            Self::Grid => "2x2 grid",
        }
    }

    /// Step-by-step explanation of how the strategy builds the composite
    pub const fn describe(&self) -> &'static [&'static str] {
        match self {
            Self::AllLandscape => &[
                "Images 1&2 joined vertically (left pair)",
                "Images 3&4 joined vertically (right pair)",
                "Two pairs joined horizontally",
            ],
            Self::AllPortrait => &[
                "Images 1&2 joined horizontally (top pair)",
                "Images 3&4 joined horizontally (bottom pair)",
                "Two pairs joined vertically",
            ],
            Self::Mixed { .. } => &[
                "Portrait images joined horizontally",
                "Landscape images joined vertically",
                "Blocks combined along the axis closest to square",
            ],
            Self::PortraitMajority { .. } => &[
                "Two portrait images joined horizontally",
                "Third portrait added along the axis closest to square",
                "Image 4 added along the axis closest to square",
            ],
            Self::LandscapeMajority { .. } => &[
                "Two landscape images joined vertically",
                "Third landscape added along the axis closest to square",
                "Image 4 added along the axis closest to square",
            ],
            Self::Grid => &[
                "Images 1&2 joined horizontally (top row)",
                "Images 3&4 joined horizontally (bottom row)",
                "Two rows joined vertically",
            ],
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the arrangement rule for four inputs given their orientations
///
/// Depends only on the orientation labels and their positions, never on pixel content.
pub fn select_strategy(orientations: &[Orientation; 4]) -> Strategy {
    let slots_with = |wanted: Orientation| -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .zip(orientations)
            .filter(|(_, orientation)| **orientation == wanted)
            .map(|(slot, _)| slot)
            .collect()
    };
    let portraits = slots_with(Orientation::Portrait);
    let landscapes = slots_with(Orientation::Landscape);

    match (portraits.as_slice(), landscapes.as_slice()) {
        (_, [_, _, _, _]) => Strategy::AllLandscape,
        ([_, _, _, _], _) => Strategy::AllPortrait,
        ([p0, p1, ..], [l0, l1, ..]) => Strategy::Mixed {
            portraits: [*p0, *p1],
            landscapes: [*l0, *l1],
        },
        ([p0, p1, p2, ..], _) => Strategy::PortraitMajority {
            portraits: [*p0, *p1, *p2],
            fourth: Slot::Fourth,
        },
        (_, [l0, l1, l2, ..]) => Strategy::LandscapeMajority {
            landscapes: [*l0, *l1, *l2],
            fourth: Slot::Fourth,
        },
        _ => Strategy::Grid,
    }
}
