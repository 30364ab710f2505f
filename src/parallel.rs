//! Data-parallel matcher running one lane per row tile on a rayon pool.

use std::any::Any;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::base::{Base, GeneSequence};
use crate::config::Config;
use crate::matcher::{effective_min, CandidateBounds, SequenceMatcher};
use crate::tile::{RowTile, TileMap};
use crate::types::{GeneMatchError, Match, MatchSet};

/// Parallel all-pairs matcher.
///
/// Candidate rows are split into [`RowTile`]s. Each lane reads the two
/// borrowed sequences and writes only its own buffer; buffers are joined in
/// tile order once every lane has finished, so the output keeps the same
/// row-major order as [`CpuMatcher`](crate::CpuMatcher).
pub struct ParallelMatcher {
    bounds: CandidateBounds,
    tile_rows: usize,
    pool: Option<ThreadPool>,
}

impl ParallelMatcher {
    /// Matcher on the global rayon pool.
    pub fn new(bounds: CandidateBounds, tile_rows: usize) -> Result<Self, GeneMatchError> {
        if tile_rows == 0 {
            return Err(GeneMatchError::Config("tile_rows must be at least 1".into()));
        }
        Ok(Self { bounds, tile_rows, pool: None })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, GeneMatchError> {
        cfg.validate()?;
        let matcher = Self::new(cfg.bounds, cfg.tile_rows)?;
        match cfg.threads {
            Some(n) => matcher.with_threads(n),
            None => Ok(matcher),
        }
    }

    /// Run lanes on a dedicated pool of `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Result<Self, GeneMatchError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| GeneMatchError::Pool(format!("{e}")))?;
        self.pool = Some(pool);
        Ok(self)
    }

    pub fn bounds(&self) -> CandidateBounds {
        self.bounds
    }

    pub fn tile_rows(&self) -> usize {
        self.tile_rows
    }

    /// Worker count lanes will be spread over.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(p) => p.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl SequenceMatcher for ParallelMatcher {
    fn name(&self) -> &str {
        "Parallel"
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

        let tiles = TileMap::new(max1, self.tile_rows)?.tiles();
        debug!(tiles = tiles.len(), rows = max1, cols = max2, threads = self.threads(), "launching lanes");

        let result = run_lanes(&tiles, self.pool.as_ref(), |tile| {
            match_rows(genes1, genes2, tile.rows.clone(), max2, min_length)
        })?;
        debug!(matches = result.len(), "lanes joined");
        Ok(result)
    }
}

/// Extend every candidate pair whose first start lies in `rows`.
pub(crate) fn match_rows(
    genes1: &[Base],
    genes2: &[Base],
    rows: Range<usize>,
    max2: usize,
    min_length: usize,
) -> Result<Vec<Match>, GeneMatchError> {
    let mut out = Vec::new();
    for start1 in rows {
        for start2 in 0..max2 {
            let length = genes1[start1..]
                .iter()
                .zip(&genes2[start2..])
                .take_while(|(x, y)| x == y)
                .count();
            if length >= min_length {
                out.try_reserve(1)?;
                out.push(Match::new(start1, start2, length));
            }
        }
    }
    Ok(out)
}

/// Run `lane` for every tile and join the buffers in tile order.
///
/// The first failing lane, whether it returned an error or panicked, fails
/// the whole call.
pub(crate) fn run_lanes<F>(
    tiles: &[RowTile],
    pool: Option<&ThreadPool>,
    lane: F,
) -> Result<MatchSet, GeneMatchError>
where
    F: Fn(&RowTile) -> Result<Vec<Match>, GeneMatchError> + Sync,
{
    let run = || {
        tiles
            .par_iter()
            .map(|tile| match panic::catch_unwind(AssertUnwindSafe(|| lane(tile))) {
                Ok(result) => result,
                Err(payload) => Err(GeneMatchError::LaneFailed {
                    tile: tile.index,
                    reason: panic_message(payload.as_ref()),
                }),
            })
            .collect::<Result<Vec<Vec<Match>>, GeneMatchError>>()
    };
    let per_lane = match pool {
        Some(p) => p.install(run),
        None => run(),
    }?;

    let total: usize = per_lane.iter().map(Vec::len).sum();
    let mut merged = Vec::new();
    merged.try_reserve_exact(total)?;
    for matches in per_lane {
        merged.extend(matches);
    }
    Ok(MatchSet::from_vec(merged))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "lane panicked".to_string()
    }
}
