//! Timed side-by-side run of two matchers over the same inputs.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::base::GeneSequence;
use crate::matcher::SequenceMatcher;
use crate::types::{GeneMatchError, MatchSet};

/// Output and wall-clock time of one `find_matches` call.
#[derive(Debug, Clone)]
pub struct MatcherRun {
    pub name: String,
    pub elapsed: Duration,
    pub matches: MatchSet,
}

/// Both runs of a comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub sequence1_length: usize,
    pub sequence2_length: usize,
    pub min_length: usize,
    pub baseline: MatcherRun,
    pub accelerated: MatcherRun,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub name: String,
    pub matches: usize,
    pub elapsed_secs: f64,
}

/// Serializable digest of a [`Comparison`], without the match lists.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub sequence1_length: usize,
    pub sequence2_length: usize,
    pub min_length: usize,
    pub baseline: RunSummary,
    pub accelerated: RunSummary,
    pub speedup: Option<f64>,
    pub outputs_agree: bool,
}

impl MatcherRun {
    fn summary(&self) -> RunSummary {
        RunSummary {
            name: self.name.clone(),
            matches: self.matches.len(),
            elapsed_secs: self.elapsed.as_secs_f64(),
        }
    }
}

impl Comparison {
    /// Baseline time over accelerated time. `None` when the accelerated run
    /// was too fast to measure.
    pub fn speedup(&self) -> Option<f64> {
        let accelerated = self.accelerated.elapsed.as_secs_f64();
        if accelerated > 0.0 {
            Some(self.baseline.elapsed.as_secs_f64() / accelerated)
        } else {
            None
        }
    }

    /// Whether both matchers found the same matches.
    pub fn outputs_agree(&self) -> bool {
        self.baseline.matches.same_matches(&self.accelerated.matches)
    }

    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            sequence1_length: self.sequence1_length,
            sequence2_length: self.sequence2_length,
            min_length: self.min_length,
            baseline: self.baseline.summary(),
            accelerated: self.accelerated.summary(),
            speedup: self.speedup(),
            outputs_agree: self.outputs_agree(),
        }
    }
}

/// Run `matcher` once and time it.
pub fn timed(
    matcher: &dyn SequenceMatcher,
    a: &GeneSequence,
    b: &GeneSequence,
    min_length: usize,
) -> Result<MatcherRun, GeneMatchError> {
    let start = Instant::now();
    let matches = matcher.find_matches(a, b, min_length)?;
    let elapsed = start.elapsed();
    debug!(matcher = matcher.name(), matches = matches.len(), ?elapsed, "matcher finished");
    Ok(MatcherRun {
        name: matcher.name().to_string(),
        elapsed,
        matches,
    })
}

/// Run `baseline`, then `accelerated`, on the same borrowed sequences.
pub fn compare(
    a: &GeneSequence,
    b: &GeneSequence,
    min_length: usize,
    baseline: &dyn SequenceMatcher,
    accelerated: &dyn SequenceMatcher,
) -> Result<Comparison, GeneMatchError> {
    let baseline = timed(baseline, a, b, min_length)?;
    let accelerated = timed(accelerated, a, b, min_length)?;
    Ok(Comparison {
        sequence1_length: a.len(),
        sequence2_length: b.len(),
        min_length,
        baseline,
        accelerated,
    })
}
