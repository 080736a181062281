//! Outcome summary of a placement batch.

use crate::error::PlacementError;
use smallvec::SmallVec;

/// What a placement batch did.
///
/// Only batches run under
/// [`BatchPolicy::IgnoreInvalid`](crate::BatchPolicy::IgnoreInvalid) can
/// finish with skipped entries; an aborting batch returns the error instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementReport {
    /// Entries written to the space (inserted or overwritten).
    pub applied: usize,
    /// Entries rejected by validation, in input order.
    pub skipped: SmallVec<[PlacementError; 4]>,
}

impl PlacementReport {
    /// Whether every entry of the batch was applied.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Total entries seen by the batch.
    pub fn total(&self) -> usize {
        self.applied + self.skipped.len()
    }
}
