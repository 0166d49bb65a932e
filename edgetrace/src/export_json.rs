// JSON export module
// Writes the path, its deltas and the classified motion plan for external replay

use anyhow::Result;
use edgetrace_core::{Coordinate, Delta, Motion, PlanSummary, TraversalStats};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::tracing::TracedPath;

#[derive(Serialize)]
struct PlanDocument<'a> {
    width: u32,
    height: u32,
    stats: TraversalStats,
    summary: PlanSummary,
    path: &'a [Coordinate],
    deltas: &'a [Delta],
    motions: &'a [Motion],
}

impl<'a> From<&'a TracedPath> for PlanDocument<'a> {
    fn from(traced: &'a TracedPath) -> Self {
        Self {
            width: traced.width,
            height: traced.height,
            stats: traced.stats,
            summary: traced.plan.summary(),
            path: &traced.path,
            deltas: &traced.deltas,
            motions: &traced.plan.motions,
        }
    }
}

/// Export the motion plan as pretty-printed JSON
pub fn export_json(traced: &TracedPath, output_path: &str) -> Result<()> {
    let mut file = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut file, &PlanDocument::from(traced))?;
    writeln!(file)?;
    file.flush()?;

    info!("Exported {} motion(s) to JSON: {}", traced.plan.len(), output_path);

    Ok(())
}
