//! Layout construction
//!
//! Selection of a strategy ([`strategy`]) is kept apart from building it
//! ([`executor`]), so the choice can be tested from orientations alone.

/// Candidate comparison and strategy execution over decoded images
pub mod executor;
/// Side-by-side and stacked concatenation of two images
pub mod join;
/// Load, arrange, scale and encode from file paths
pub mod pipeline;
/// Precedence-ordered strategy selection from orientations
pub mod strategy;

pub use executor::{Arrangement, Candidate, InputSet, arrange, closer_to_square};
pub use join::{Axis, join, join_horizontal, join_vertical};
pub use pipeline::{CompositeOutcome, CompositeRequest, create_composite};
pub use strategy::{Slot, Strategy, select_strategy};
