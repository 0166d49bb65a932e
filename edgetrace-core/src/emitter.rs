// Path emitter
// Turns an absolute cell path into relative deltas and pen-down strokes

use crate::types::{Coordinate, Delta, Stroke};

/// Successive displacements `path[i] - path[i-1]` for i in 1..len, in path order
pub fn deltas(path: &[Coordinate]) -> Vec<Delta> {
    path.windows(2)
        .map(|pair| Delta::between(pair[0], pair[1]))
        .collect()
}

/// Split a path into strokes at every non-unit move
/// An empty path yields no strokes; every cell lands in exactly one stroke
pub fn strokes(path: &[Coordinate]) -> Vec<Stroke> {
    let mut result = Vec::new();
    let mut current: Vec<Coordinate> = Vec::new();

    for &cell in path {
        if let Some(&prev) = current.last() {
            if !Delta::between(prev, cell).is_unit() {
                result.push(Stroke {
                    points: std::mem::take(&mut current),
                });
            }
        }
        current.push(cell);
    }

    if !current.is_empty() {
        result.push(Stroke { points: current });
    }

    result
}

/// Rebuild absolute cells from a start cell and its deltas
/// Returns None if a delta would step to a negative index
pub fn replay_deltas(start: Coordinate, deltas: &[Delta]) -> Option<Vec<Coordinate>> {
    let mut cells = Vec::with_capacity(deltas.len() + 1);
    cells.push(start);

    let mut at = start;
    for d in deltas {
        at = at.offset(isize::try_from(d.dy).ok()?, isize::try_from(d.dx).ok()?)?;
        cells.push(at);
    }

    Some(cells)
}
