//! The matching contract shared by every implementation.

use crate::base::GeneSequence;
use crate::types::{GeneMatchError, MatchSet};

/// Which start positions are tried as candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidateBounds {
    /// Starts in `[0, len - min)`. Runs starting in the last `min` positions
    /// of either sequence are never reported. This is the reference behavior.
    #[default]
    Baseline,
    /// Starts in `[0, len - min]`, so every run of at least `min` bases is
    /// reported.
    Inclusive,
}

impl CandidateBounds {
    /// Exclusive upper bound on candidate starts for a sequence of `len`
    /// bases. Zero when no start qualifies.
    pub fn limit(self, len: usize, min_length: usize) -> usize {
        let min_length = effective_min(min_length);
        match self {
            CandidateBounds::Baseline => len.saturating_sub(min_length),
            CandidateBounds::Inclusive => {
                if len >= min_length {
                    len - min_length + 1
                } else {
                    0
                }
            }
        }
    }
}

/// A minimum of zero would report empty runs; it behaves as one.
pub fn effective_min(min_length: usize) -> usize {
    min_length.max(1)
}

/// Finds every maximal common run of at least `min_length` bases between two
/// sequences.
///
/// Implementations must agree with each other as sets for every input. The
/// inputs are borrowed and never mutated.
pub trait SequenceMatcher {
    /// Short label used in reports.
    fn name(&self) -> &str;

    fn find_matches(
        &self,
        a: &GeneSequence,
        b: &GeneSequence,
        min_length: usize,
    ) -> Result<MatchSet, GeneMatchError>;
}
