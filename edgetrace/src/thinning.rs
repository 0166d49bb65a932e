// Thinning module
// Zhang-Suen skeletonization of a binary edge image down to 1-pixel strokes

use image::{GrayImage, Luma};
use log::debug;

use crate::detection::EDGE;

/// 8-neighbourhood as (dx, dy)
const NEIGHBOURS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Reduce every stroke of a binary image to a 1-pixel-wide skeleton
/// Non-zero pixels are foreground; the result uses 0 / 255
pub fn thin(edges: &GrayImage) -> GrayImage {
    let (width, height) = edges.dimensions();
    let (w, h) = (width as usize, height as usize);
    let mut grid: Vec<bool> = edges.pixels().map(|p| p[0] != 0).collect();

    let on = |grid: &[bool], x: isize, y: isize| -> bool {
        x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h && grid[y as usize * w + x as usize]
    };

    let mut passes = 0;
    loop {
        let mut changed = false;

        for sub_iteration in 0..2 {
            let mut doomed = Vec::new();

            for y in 0..h as isize {
                for x in 0..w as isize {
                    if !on(&grid, x, y) {
                        continue;
                    }

                    // P2..P9 clockwise from north
                    let n = NEIGHBOURS.map(|(dx, dy)| on(&grid, x + dx, y + dy));

                    let neighbours = n.iter().filter(|&&v| v).count();
                    if !(2..=6).contains(&neighbours) {
                        continue;
                    }

                    let transitions = (0..8).filter(|&i| !n[i] && n[(i + 1) % 8]).count();
                    if transitions != 1 {
                        continue;
                    }

                    let (p2, p4, p6, p8) = (n[0], n[2], n[4], n[6]);
                    let removable = if sub_iteration == 0 {
                        !(p2 && p4 && p6) && !(p4 && p6 && p8)
                    } else {
                        !(p2 && p4 && p8) && !(p2 && p6 && p8)
                    };

                    if removable {
                        doomed.push(y as usize * w + x as usize);
                    }
                }
            }

            // Never delete the last pixel of a component
            for i in doomed {
                let (x, y) = ((i % w) as isize, (i / w) as isize);
                let isolated = NEIGHBOURS
                    .iter()
                    .all(|&(dx, dy)| !on(&grid, x + dx, y + dy));
                if !isolated {
                    grid[i] = false;
                    changed = true;
                }
            }
        }

        passes += 1;
        if !changed {
            break;
        }
    }

    debug!("Thinning converged after {} pass(es)", passes);

    GrayImage::from_fn(width, height, |x, y| {
        Luma([if grid[y as usize * w + x as usize] { EDGE } else { 0 }])
    })
}
