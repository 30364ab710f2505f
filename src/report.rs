//! Text, CSV and JSON output for comparison results.

use std::io::{self, Write};

use crate::base::GeneSequence;
use crate::harness::{Comparison, MatcherRun};
use crate::types::{GeneMatchError, MatchSet};

/// One line per match: positions, length, then the matched bases of each
/// sequence.
///
/// ```text
/// g1: 0 g2: 4 l: 4 CTGA CTGA
/// ```
pub fn write_matches<W: Write>(
    w: &mut W,
    a: &GeneSequence,
    b: &GeneSequence,
    matches: &MatchSet,
) -> io::Result<()> {
    for m in matches {
        writeln!(
            w,
            "g1: {} g2: {} l: {} {} {}",
            m.start1,
            m.start2,
            m.length,
            a.render(m.start1, m.length),
            b.render(m.start2, m.length)
        )?;
    }
    Ok(())
}

fn write_run<W: Write>(w: &mut W, run: &MatcherRun) -> io::Result<()> {
    writeln!(w, "Total sequences found: {}", run.matches.len())?;
    writeln!(w, "{} time: {:.3} s.", run.name, run.elapsed.as_secs_f64())
}

/// Match counts and timings for both runs, then the speedup.
pub fn write_summary<W: Write>(w: &mut W, comparison: &Comparison) -> io::Result<()> {
    write_run(w, &comparison.baseline)?;
    write_run(w, &comparison.accelerated)?;
    match comparison.speedup() {
        Some(x) => writeln!(w, "{} speedup: {:.2}X", comparison.accelerated.name, x),
        None => writeln!(w, "{} speedup: n/a", comparison.accelerated.name),
    }
}

/// Matches as CSV with a `start1,start2,length` header.
pub fn write_csv<W: Write>(w: W, matches: &MatchSet) -> Result<(), GeneMatchError> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["start1", "start2", "length"])?;
    for m in matches {
        wtr.write_record(&[m.start1.to_string(), m.start2.to_string(), m.length.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn summary_json(comparison: &Comparison) -> Result<String, GeneMatchError> {
    Ok(serde_json::to_string_pretty(&comparison.summary())?)
}
