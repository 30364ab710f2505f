use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use genematch::io_utils::{genematch_cli_error, io_cli_error, simple_cli_error};
use genematch::{
    compare, summary_json, write_csv, write_matches, write_summary, CandidateBounds, Config,
    CpuMatcher, GpuMatcher, SequenceGenerator,
};

/// Generate two random gene sequences and compare CPU and accelerated matching.
#[derive(Parser)]
struct Args {
    /// Bases per generated sequence
    #[arg(long, default_value_t = 10_000)]
    length: usize,
    /// Shortest common run to report
    #[arg(long, default_value_t = 9)]
    min_length: usize,
    /// Generator seed; omit for a fresh random seed
    #[arg(long)]
    seed: Option<u64>,
    /// Worker threads for the parallel lanes
    #[arg(long)]
    threads: Option<usize>,
    /// Candidate rows per lane
    #[arg(long, default_value_t = 64)]
    tile_rows: usize,
    /// Also try starts in the last `min-length` positions of each sequence
    #[arg(long)]
    inclusive_bounds: bool,
    /// Print every match
    #[arg(long)]
    show: bool,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// Optional CSV output path for the matches
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("genematch=debug")
    } else {
        EnvFilter::new("genematch=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let cfg = Config {
        sequence_length: args.length,
        min_length: args.min_length,
        tile_rows: args.tile_rows,
        threads: args.threads,
        bounds: if args.inclusive_bounds {
            CandidateBounds::Inclusive
        } else {
            CandidateBounds::Baseline
        },
        seed: args.seed,
    };
    cfg.validate()
        .map_err(|e| genematch_cli_error("invalid arguments", e))?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    info!(seed, length = cfg.sequence_length, "generating sequences");
    let mut generator = SequenceGenerator::from_seed(seed);
    let genes1 = generator.random_sequence(cfg.sequence_length);
    let genes2 = generator.random_sequence(cfg.sequence_length);

    let cpu = CpuMatcher::new(cfg.bounds);
    let accelerated = GpuMatcher::from_config(&cfg)
        .map_err(|e| genematch_cli_error("building accelerated matcher", e))?;

    let comparison = compare(&genes1, &genes2, cfg.min_length, &cpu, &accelerated)
        .map_err(|e| genematch_cli_error("matching", e))?;

    if let Some(path) = &args.csv {
        let f = File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
        write_csv(BufWriter::new(f), &comparison.baseline.matches)
            .map_err(|e| genematch_cli_error("writing csv", e))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writeln!(out, "{}", summary_json(&comparison)?)?;
    } else {
        if args.show {
            write_matches(&mut out, &genes1, &genes2, &comparison.baseline.matches)?;
            write_matches(&mut out, &genes1, &genes2, &comparison.accelerated.matches)?;
        }
        write_summary(&mut out, &comparison)?;
    }

    if !comparison.outputs_agree() {
        return Err(simple_cli_error(&format!(
            "{} and {} matchers disagree: {} vs {} matches",
            comparison.baseline.name,
            comparison.accelerated.name,
            comparison.baseline.matches.len(),
            comparison.accelerated.matches.len()
        ))
        .into());
    }
    Ok(())
}
