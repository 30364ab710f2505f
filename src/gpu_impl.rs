use ocl::{Buffer, ProQue};
use tracing::{debug, warn};

use crate::base::GeneSequence;
use crate::config::Config;
use crate::matcher::{effective_min, CandidateBounds, SequenceMatcher};
use crate::parallel::ParallelMatcher;
use crate::tile::{RowTile, TileMap};
use crate::types::{GeneMatchError, Match, MatchSet};

/// Records reserved per tile row before the first launch.
const INITIAL_RECORDS_PER_ROW: usize = 8;

/// GPU accelerated matcher backed by OpenCL.
///
/// If OpenCL initialization fails at runtime the matcher still gets created
/// and runs the parallel CPU lanes instead, so callers do not need to handle
/// a missing device.
pub struct GpuMatcher {
    pro_que: Option<ProQue>,
    lanes: ParallelMatcher,
    bounds: CandidateBounds,
    tile_rows: usize,
}

struct DeviceInputs {
    genes1: Buffer<u8>,
    genes2: Buffer<u8>,
    len1: u32,
    len2: u32,
    cols: u32,
    min_len: u32,
}

impl GpuMatcher {
    pub fn new(bounds: CandidateBounds, tile_rows: usize) -> Result<Self, GeneMatchError> {
        Self::with_lanes(ParallelMatcher::new(bounds, tile_rows)?)
    }

    pub fn from_config(cfg: &Config) -> Result<Self, GeneMatchError> {
        Self::with_lanes(ParallelMatcher::from_config(cfg)?)
    }

    fn with_lanes(lanes: ParallelMatcher) -> Result<Self, GeneMatchError> {
        let src = include_str!("kernels/find_matches.cl");
        let pro_que = match ProQue::builder().src(src).build() {
            Ok(pq) => Some(pq),
            Err(e) => {
                warn!(error = %e, "OpenCL unavailable, matching on CPU lanes");
                None
            }
        };
        Ok(Self {
            pro_que,
            bounds: lanes.bounds(),
            tile_rows: lanes.tile_rows(),
            lanes,
        })
    }

    /// Whether matching runs on an OpenCL device.
    pub fn is_accelerated(&self) -> bool {
        self.pro_que.is_some()
    }

    fn device_matches(
        &self,
        pq: &ProQue,
        a: &GeneSequence,
        b: &GeneSequence,
        min_length: usize,
    ) -> Result<MatchSet, GeneMatchError> {
        let max1 = self.bounds.limit(a.len(), min_length);
        let max2 = self.bounds.limit(b.len(), min_length);
        if max1 == 0 || max2 == 0 {
            return Ok(MatchSet::new());
        }

        let codes1 = a.codes();
        let codes2 = b.codes();
        let inputs = DeviceInputs {
            genes1: upload(pq, &codes1)?,
            genes2: upload(pq, &codes2)?,
            len1: to_u32(codes1.len(), "first sequence length")?,
            len2: to_u32(codes2.len(), "second sequence length")?,
            cols: to_u32(max2, "candidate columns")?,
            min_len: to_u32(min_length, "minimum length")?,
        };

        let mut result = MatchSet::new();
        for tile in TileMap::new(max1, self.tile_rows)?.tiles() {
            let mut capacity = (tile.len() * INITIAL_RECORDS_PER_ROW).min(tile.len() * max2);
            let records = loop {
                let (records, count) = launch_tile(pq, &inputs, &tile, capacity)?;
                if count <= capacity {
                    break records;
                }
                debug!(tile = tile.index, count, capacity, "output buffer overflowed, relaunching");
                capacity = count;
            };
            for m in records {
                result.try_push(m)?;
            }
        }
        Ok(result)
    }
}

impl SequenceMatcher for GpuMatcher {
    fn name(&self) -> &str {
        if self.is_accelerated() {
            "GPU"
        } else {
            self.lanes.name()
        }
    }

    fn find_matches(
        &self,
        a: &GeneSequence,
        b: &GeneSequence,
        min_length: usize,
    ) -> Result<MatchSet, GeneMatchError> {
        match &self.pro_que {
            Some(pq) => self.device_matches(pq, a, b, effective_min(min_length)),
            None => self.lanes.find_matches(a, b, min_length),
        }
    }
}

/// Run one tile and return its records in row-major order together with the
/// number of records the kernel tried to write.
fn launch_tile(
    pq: &ProQue,
    inputs: &DeviceInputs,
    tile: &RowTile,
    capacity: usize,
) -> Result<(Vec<Match>, usize), GeneMatchError> {
    let work_items = tile.len() * inputs.cols as usize;
    let out = Buffer::<u32>::builder()
        .queue(pq.queue().clone())
        .len(capacity * 3)
        .build()
        .map_err(kernel_error)?;
    let out_count = Buffer::<u32>::builder()
        .queue(pq.queue().clone())
        .len(1)
        .fill_val(0u32)
        .build()
        .map_err(kernel_error)?;

    let kernel = pq
        .kernel_builder("find_matches")
        .arg(&inputs.genes1)
        .arg(inputs.len1)
        .arg(&inputs.genes2)
        .arg(inputs.len2)
        .arg(inputs.min_len)
        .arg(to_u32(tile.rows.start, "tile start")?)
        .arg(to_u32(tile.len(), "tile rows")?)
        .arg(inputs.cols)
        .arg(&out)
        .arg(to_u32(capacity, "output capacity")?)
        .arg(&out_count)
        .build()
        .map_err(kernel_error)?;

    unsafe {
        kernel
            .cmd()
            .global_work_size(work_items)
            .enq()
            .map_err(kernel_error)?;
    }

    let mut count = vec![0u32];
    out_count.read(&mut count).enq().map_err(kernel_error)?;
    let count = count[0] as usize;
    if count == 0 || count > capacity {
        return Ok((Vec::new(), count));
    }

    let mut flat = vec![0u32; capacity * 3];
    out.read(&mut flat).enq().map_err(kernel_error)?;
    let mut records: Vec<Match> = flat[..count * 3]
        .chunks_exact(3)
        .map(|r| Match::new(r[0] as usize, r[1] as usize, r[2] as usize))
        .collect();
    records.sort_unstable();
    Ok((records, count))
}

fn upload(pq: &ProQue, codes: &[u8]) -> Result<Buffer<u8>, GeneMatchError> {
    Buffer::<u8>::builder()
        .queue(pq.queue().clone())
        .len(codes.len())
        .copy_host_slice(codes)
        .build()
        .map_err(kernel_error)
}

fn to_u32(value: usize, what: &str) -> Result<u32, GeneMatchError> {
    u32::try_from(value)
        .map_err(|_| GeneMatchError::Kernel(format!("{what} {value} exceeds the device index range")))
}

fn kernel_error(e: ocl::Error) -> GeneMatchError {
    GeneMatchError::Kernel(format!("{e}"))
}
