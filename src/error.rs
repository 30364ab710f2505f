use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneMatchError {
    /// A character outside the C/T/G/A alphabet.
    #[error("invalid base: {0:?}")]
    InvalidBase(char),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// The match output could not grow.
    #[error("allocation failed while collecting matches: {0}")]
    Alloc(#[from] TryReserveError),

    /// A parallel lane failed, taking the whole comparison down with it.
    #[error("lane for tile {tile} failed: {reason}")]
    LaneFailed { tile: usize, reason: String },

    /// Worker pool construction failure.
    #[error("worker pool error: {0}")]
    Pool(String),

    /// OpenCL program, buffer or launch failure.
    #[error("kernel error: {0}")]
    Kernel(String),

    /// CSV or JSON report failure.
    #[error("report error: {0}")]
    Report(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for GeneMatchError {
    fn from(e: csv::Error) -> Self {
        GeneMatchError::Report(format!("{e}"))
    }
}

impl From<serde_json::Error> for GeneMatchError {
    fn from(e: serde_json::Error) -> Self {
        GeneMatchError::Report(format!("{e}"))
    }
}
