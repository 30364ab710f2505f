use crate::base::GeneSequence;
use crate::matcher::{effective_min, CandidateBounds, SequenceMatcher};
use crate::types::{GeneMatchError, Match, MatchSet};

/// Sequential all-pairs matcher.
///
/// Walks every candidate `(start1, start2)` pair in row-major order and
/// extends it forward until the bases differ or either sequence ends.
#[derive(Debug, Clone, Default)]
pub struct CpuMatcher {
    bounds: CandidateBounds,
}

impl CpuMatcher {
    pub fn new(bounds: CandidateBounds) -> Self {
        Self { bounds }
    }
}

impl SequenceMatcher for CpuMatcher {
    fn name(&self) -> &str {
        "CPU"
    }

    fn find_matches(
        &self,
        a: &GeneSequence,
        b: &GeneSequence,
        min_length: usize,
    ) -> Result<MatchSet, GeneMatchError> {
        let min_length = effective_min(min_length);
        let genes1 = a.as_slice();
        let genes2 = b.as_slice();
        let max1 = self.bounds.limit(genes1.len(), min_length);
        let max2 = self.bounds.limit(genes2.len(), min_length);

        let mut result = MatchSet::new();
        for start1 in 0..max1 {
            for start2 in 0..max2 {
                let mut i1 = start1;
                let mut i2 = start2;
                while i1 < genes1.len() && i2 < genes2.len() && genes1[i1] == genes2[i2] {
                    i1 += 1;
                    i2 += 1;
                }

                let length = i1 - start1;
                if length >= min_length {
                    result.try_push(Match::new(start1, start2, length))?;
                }
            }
        }
        Ok(result)
    }
}
