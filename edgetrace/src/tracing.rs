// Contour tracing module
// Converts a thinned edge image into an ordered path and a replay plan

use anyhow::{Context, Result};
use edgetrace_core::emitter::{deltas, strokes};
use edgetrace_core::{trace, Coordinate, Delta, Mask, MotionPlan, Stroke, TraversalStats};
use image::GrayImage;
use log::info;

/// Everything derived from one traced edge image
#[derive(Debug, Clone)]
pub struct TracedPath {
    pub width: u32,
    pub height: u32,
    pub path: Vec<Coordinate>,
    pub deltas: Vec<Delta>,
    pub plan: MotionPlan,
    pub strokes: Vec<Stroke>,
    pub stats: TraversalStats,
}

/// Non-zero pixels become on cells; rows follow image y, columns image x
pub fn mask_from_edges(edges: &GrayImage) -> Mask {
    Mask::from_fn(edges.height() as usize, edges.width() as usize, |row, col| {
        edges.get_pixel(col as u32, row as u32)[0] != 0
    })
}

/// Trace a thinned edge image end to end
pub fn trace_edges(edges: &GrayImage) -> Result<TracedPath> {
    let mask = mask_from_edges(edges);
    info!("Mask has {} edge pixel(s)", mask.count_on());

    let traversal = trace(mask).context("Edge image holds nothing to trace")?;
    let deltas = deltas(&traversal.path);
    let plan = MotionPlan::from_deltas(&deltas);
    let strokes = strokes(&traversal.path);

    let summary = plan.summary();
    info!(
        "Plan: {} step(s), {} jump(s) ({} unit move(s) pen-up), {} stroke(s)",
        summary.steps,
        summary.jumps,
        summary.jump_moves,
        strokes.len()
    );

    Ok(TracedPath {
        width: edges.width(),
        height: edges.height(),
        path: traversal.path,
        deltas,
        plan,
        strokes,
        stats: traversal.stats,
    })
}
