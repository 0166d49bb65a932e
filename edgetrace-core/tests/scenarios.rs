use std::collections::HashSet;

use edgetrace_core::bridge::bridge;
use edgetrace_core::emitter::{deltas, strokes};
use edgetrace_core::walker::next_step;
use edgetrace_core::{trace, trace_in_place, Coordinate, Delta, Mask, Motion, MotionPlan};
use pretty_assertions::assert_eq;

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn diagonal_line_is_one_stroke() {
    let mut mask: Mask = "
        #....
        .#...
        ..#..
        ...#.
        .....
    "
    .parse()
    .unwrap();

    let traversal = trace_in_place(&mut mask).unwrap();
    assert_eq!(traversal.path, vec![c(0, 0), c(1, 1), c(2, 2), c(3, 3)]);

    let d = deltas(&traversal.path);
    assert_eq!(d, vec![Delta::new(1, 1); 3]);

    let plan = MotionPlan::from_deltas(&d);
    assert!(plan.iter().all(|m| matches!(m, Motion::Step(_))));
    assert!(mask.is_blank());
}

#[test]
fn two_segments_need_one_jump() {
    let mask: Mask = "
        ##......
        ........
        ........
        ........
        ......#.
        ......#.
    "
    .parse()
    .unwrap();

    let traversal = trace(mask).unwrap();
    let path = &traversal.path;
    assert_eq!(path.len(), 4);
    assert_eq!(&path[..2], &[c(0, 0), c(0, 1)]);

    let landing = path[2];
    assert!(landing == c(4, 6) || landing == c(5, 6));
    assert_eq!(c(0, 1).chebyshev(landing), 5);

    let plan = MotionPlan::from_path(path);
    let jumps: Vec<_> = plan.iter().filter(|m| m.is_jump()).collect();
    assert_eq!(jumps.len(), 1);
    assert_eq!(jumps[0].delta(), Delta::between(c(0, 1), landing));
    assert_eq!(traversal.stats.bridges, 1);
    assert_eq!(traversal.stats.bridge_distance, 5);
    assert_eq!(strokes(path).len(), 2);
}

#[test]
fn priority_with_two_live_neighbours() {
    // Left and down-right are both on around (1,1); the cardinal wins
    let mask: Mask = "...\n#..\n..#".parse().unwrap();
    assert_eq!(next_step(&mask, c(1, 1)), Some(c(1, 0)));

    // Up and right: right wins
    let mask: Mask = ".#.\n..#\n...".parse().unwrap();
    assert_eq!(next_step(&mask, c(1, 1)), Some(c(1, 2)));
}

#[test]
fn bridging_between_single_pixels() {
    let mut mask = Mask::from_fn(10, 12, |r, col| (r, col) == (7, 3));
    let hop = bridge(&mut mask, c(2, 9)).unwrap();
    assert_eq!(hop.target, c(7, 3));
    assert_eq!(hop.distance, 6);
    assert!(mask.is_blank());
    assert_eq!(bridge(&mut mask, c(7, 3)), None);
}

#[test]
fn closed_loop_returns_near_start() {
    let mask: Mask = "
        .###.
        #...#
        #...#
        .###.
    "
    .parse()
    .unwrap();
    let traversal = trace(mask).unwrap();
    assert_eq!(traversal.path.len(), 10);
    assert_eq!(traversal.stats.bridges, 0);
    assert_eq!(traversal.path[0], c(0, 1));
}

#[test]
fn deltas_sum_to_end_point() {
    let mask: Mask = "
        #..#...#
        .#..#...
        ......##
        ##......
    "
    .parse()
    .unwrap();
    let traversal = trace(mask).unwrap();
    let path = &traversal.path;
    let net = deltas(path).into_iter().fold(Delta::default(), |acc, d| acc + d);
    let first = path[0];
    let last = path[path.len() - 1];
    assert_eq!(first.col as i64 + net.dx, last.col as i64);
    assert_eq!(first.row as i64 + net.dy, last.row as i64);

    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len());
}

mod props {
    use super::*;
    use edgetrace_core::emitter::replay_deltas;
    use proptest::prelude::*;

    fn masks() -> impl Strategy<Value = Mask> {
        (1usize..12, 1usize..12)
            .prop_flat_map(|(h, w)| (Just(h), Just(w), prop::collection::vec(prop::bool::weighted(0.3), h * w)))
            .prop_map(|(h, w, cells)| Mask::from_fn(h, w, |r, col| cells[r * w + col]))
    }

    proptest! {
        #[test]
        fn every_on_cell_is_visited_exactly_once(mut mask in masks()) {
            let expected: HashSet<Coordinate> = mask.on_cells().collect();
            prop_assume!(!expected.is_empty());

            let traversal = trace_in_place(&mut mask).unwrap();
            prop_assert!(mask.is_blank());

            let visited: HashSet<Coordinate> = traversal.path.iter().copied().collect();
            prop_assert_eq!(visited.len(), traversal.path.len());
            prop_assert_eq!(visited, expected);
        }

        #[test]
        fn jumps_are_exactly_the_bridges(mask in masks()) {
            prop_assume!(!mask.is_blank());
            let traversal = trace(mask).unwrap();
            let summary = MotionPlan::from_path(&traversal.path).summary();

            prop_assert_eq!(summary.jumps, traversal.stats.bridges);
            prop_assert_eq!(summary.steps, traversal.stats.walk_steps);

            let jump_span: usize = traversal
                .path
                .windows(2)
                .filter(|p| !Delta::between(p[0], p[1]).is_unit())
                .map(|p| p[0].chebyshev(p[1]))
                .sum();
            prop_assert_eq!(jump_span, traversal.stats.bridge_distance);
        }

        #[test]
        fn deltas_rebuild_the_path(mask in masks()) {
            prop_assume!(!mask.is_blank());
            let path = trace(mask).unwrap().path;
            prop_assert_eq!(replay_deltas(path[0], &deltas(&path)), Some(path.clone()));
        }

        #[test]
        fn bridge_distance_is_chebyshev(
            (h, w) in (1usize..16, 1usize..16),
            seed in any::<(usize, usize, usize, usize)>(),
        ) {
            let from = c(seed.0 % h, seed.1 % w);
            let target = c(seed.2 % h, seed.3 % w);
            prop_assume!(from != target);

            let mut mask = Mask::from_fn(h, w, |r, col| c(r, col) == target);
            let hop = bridge(&mut mask, from).unwrap();
            prop_assert_eq!(hop.target, target);
            prop_assert_eq!(hop.distance, from.chebyshev(target));
        }
    }
}
