// Traversal control loop
// Alternates the local walker and the gap bridger until the mask is exhausted

use log::{debug, info};
use serde::Serialize;

use crate::bridge;
use crate::error::TraceError;
use crate::mask::Mask;
use crate::types::Coordinate;
use crate::walker;

/// Counters collected while tracing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Cells on the path, seed included
    pub cells: usize,
    /// Cells reached by the local walker
    pub walk_steps: usize,
    /// Pen-up hops made by the bridger
    pub bridges: usize,
    /// Sum of the 8-connected lengths of those hops
    pub bridge_distance: usize,
}

/// Ordered visit of every on cell of a mask
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    pub path: Vec<Coordinate>,
    pub stats: TraversalStats,
}

/// Trace an owned mask; it is fully consumed by the walk
pub fn trace(mut mask: Mask) -> Result<Traversal, TraceError> {
    trace_in_place(&mut mask)
}

/// Trace a caller-owned mask, clearing every cell that ends up on the path
/// Fails with [`TraceError::NoContour`] when the mask has no on cell
pub fn trace_in_place(mask: &mut Mask) -> Result<Traversal, TraceError> {
    let seed = mask.first_on().ok_or(TraceError::NoContour {
        height: mask.height(),
        width: mask.width(),
    })?;
    mask.clear_at(seed);
    debug!("Seeding traversal at {}", seed);

    let mut path = vec![seed];
    let mut stats = TraversalStats::default();
    let mut tail = seed;

    loop {
        let before = path.len();
        tail = walker::walk(mask, tail, &mut path);
        stats.walk_steps += path.len() - before;

        let Some(hop) = bridge::bridge(mask, tail) else {
            break;
        };
        debug!("  Bridging {} -> {} (distance {})", hop.from, hop.target, hop.distance);
        path.push(hop.target);
        stats.bridges += 1;
        stats.bridge_distance += hop.distance;
        tail = hop.target;
    }

    stats.cells = path.len();
    info!(
        "Traced {} cell(s): {} walk step(s), {} bridge(s) covering {} cell(s)",
        stats.cells, stats.walk_steps, stats.bridges, stats.bridge_distance
    );

    Ok(Traversal { path, stats })
}
