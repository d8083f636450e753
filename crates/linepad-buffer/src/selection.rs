//! Line range selection.
//!
//! ## Learning: Range Types
//!
//! A shift-click selects every line between two indices, both ends
//! included, so we hand out a `RangeInclusive<usize>` rather than the
//! half-open `Range<usize>` used for slices.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// An inclusive range of line indices.
///
/// The start is always before or equal to the end (normalized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Creates a range between two indices in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}
