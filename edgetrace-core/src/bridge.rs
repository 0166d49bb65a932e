// Gap bridger
// Breadth-first search from a stalled walk to the nearest remaining on cell

use std::collections::VecDeque;

use log::trace;

use crate::mask::Mask;
use crate::types::Coordinate;

/// Frontier expansion order as (d_row, d_col), counter-clockwise from the right
/// With FIFO dequeue this fixes which of several equidistant cells is landed on
pub const SEARCH_ORDER: [(isize, isize); 8] = [
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A pen-up hop found by [`bridge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bridge {
    pub from: Coordinate,
    pub target: Coordinate,
    /// BFS depth of the target, i.e. the 8-connected distance from `from`
    pub distance: usize,
}

/// Cells already queued during one search
/// Anything outside the grid counts as visited so the search never leaves it
struct VisitedSet {
    height: usize,
    width: usize,
    seen: Vec<bool>,
}

impl VisitedSet {
    fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            seen: vec![false; height * width],
        }
    }

    /// Marks `at` visited; false when it already was or lies on the boundary
    fn insert(&mut self, at: Coordinate) -> bool {
        if at.row >= self.height || at.col >= self.width {
            return false;
        }
        let slot = &mut self.seen[at.row * self.width + at.col];
        !std::mem::replace(slot, true)
    }
}

/// Search outward from `from` over the whole grid, off cells included,
/// for the nearest on cell. The target alone is cleared; frontier cells are
/// left untouched. `None` means the mask holds no more work
pub fn bridge(mask: &mut Mask, from: Coordinate) -> Option<Bridge> {
    let mut visited = VisitedSet::new(mask.height(), mask.width());
    if !visited.insert(from) {
        return None;
    }

    let mut queue = VecDeque::from([(from, 0usize)]);
    while let Some((cell, depth)) = queue.pop_front() {
        if mask.is_on_at(cell) {
            mask.clear_at(cell);
            trace!("bridge {} -> {} after {} ring(s)", from, cell, depth);
            return Some(Bridge {
                from,
                target: cell,
                distance: depth,
            });
        }

        for &(dr, dc) in &SEARCH_ORDER {
            let Some(next) = cell.offset(dr, dc) else {
                continue;
            };
            if visited.insert(next) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    None
}
