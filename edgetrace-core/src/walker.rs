// Local walker
// Follows a single stroke through 8-connected on cells until it dead-ends

use crate::mask::Mask;
use crate::types::Coordinate;

/// Neighbour probe order as (d_row, d_col): cardinals first, then diagonals
/// Branches are always resolved by this order, so side branches may be left for the bridger
pub const WALK_ORDER: [(isize, isize); 8] = [
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 0),
    (-1, 1),
    (-1, -1),
    (1, -1),
    (1, 1),
];

/// First on neighbour of `from` in walk order, if any
pub fn next_step(mask: &Mask, from: Coordinate) -> Option<Coordinate> {
    WALK_ORDER
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .find(|&cell| mask.is_on_at(cell))
}

/// Extend `path` from `from` as far as the stroke goes, clearing every cell taken
/// Returns the new tail; equals `from` when no neighbour was on
pub fn walk(mask: &mut Mask, from: Coordinate, path: &mut Vec<Coordinate>) -> Coordinate {
    let mut tail = from;
    while let Some(next) = next_step(mask, tail) {
        mask.clear_at(next);
        path.push(next);
        tail = next;
    }
    tail
}
