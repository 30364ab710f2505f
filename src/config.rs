use crate::matcher::CandidateBounds;
use crate::GeneMatchError;

/// Runtime configuration for a comparison run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of bases in each generated sequence.
    pub sequence_length: usize,
    /// Shortest run reported as a match.
    pub min_length: usize,
    /// Candidate rows handled by one parallel lane or kernel launch.
    pub tile_rows: usize,
    /// Worker threads for the parallel matcher. `None` uses the global pool.
    pub threads: Option<usize>,
    /// Candidate start range shared by every matcher.
    pub bounds: CandidateBounds,
    /// Generator seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequence_length: 10_000,
            min_length: 9,
            tile_rows: 64,
            threads: None,
            bounds: CandidateBounds::Baseline,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), GeneMatchError> {
        if self.min_length == 0 {
            return Err(GeneMatchError::Config("min_length must be at least 1".into()));
        }
        if self.tile_rows == 0 {
            return Err(GeneMatchError::Config("tile_rows must be at least 1".into()));
        }
        if self.threads == Some(0) {
            return Err(GeneMatchError::Config("threads must be at least 1".into()));
        }
        Ok(())
    }
}
