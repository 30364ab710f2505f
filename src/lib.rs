//! Core logic for the genematch sequence comparison tool.
//!
//! Finds every maximal common run of at least a minimum length between two
//! C/T/G/A sequences, with a sequential CPU matcher and a data-parallel
//! matcher that must agree with it exactly.

pub mod base;
pub mod config;
pub mod cpu;
mod error;
pub mod generator;
mod gpu;
pub mod harness;
pub mod io_utils;
pub mod matcher;
pub mod parallel;
pub mod report;
pub mod tile;
pub mod types;

pub use base::{Base, GeneSequence, BASES};
pub use config::Config;
pub use cpu::CpuMatcher;
pub use generator::SequenceGenerator;
pub use gpu::GpuMatcher;
pub use harness::{compare, timed, Comparison, ComparisonSummary, MatcherRun};
pub use matcher::{CandidateBounds, SequenceMatcher};
pub use parallel::ParallelMatcher;
pub use report::{summary_json, write_csv, write_matches, write_summary};
pub use tile::{RowTile, TileMap};
pub use types::{GeneMatchError, Match, MatchSet};
