use crate::base::GeneSequence;
use crate::config::Config;
use crate::matcher::{CandidateBounds, SequenceMatcher};
use crate::parallel::ParallelMatcher;
use crate::types::{GeneMatchError, MatchSet};

/// Accelerated matcher for builds without the `gpu` feature.
///
/// The kernel's lanes run as row tiles on the CPU worker pool.
pub struct GpuMatcher {
    lanes: ParallelMatcher,
}

impl GpuMatcher {
    pub fn new(bounds: CandidateBounds, tile_rows: usize) -> Result<Self, GeneMatchError> {
        Ok(Self { lanes: ParallelMatcher::new(bounds, tile_rows)? })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, GeneMatchError> {
        Ok(Self { lanes: ParallelMatcher::from_config(cfg)? })
    }

    /// Whether matching runs on an OpenCL device.
    pub fn is_accelerated(&self) -> bool {
        false
    }
}

impl SequenceMatcher for GpuMatcher {
    fn name(&self) -> &str {
        self.lanes.name()
    }

    fn find_matches(
        &self,
        a: &GeneSequence,
        b: &GeneSequence,
        min_length: usize,
    ) -> Result<MatchSet, GeneMatchError> {
        self.lanes.find_matches(a, b, min_length)
    }
}
