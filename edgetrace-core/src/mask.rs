// Binary edge mask
// Row-major boolean grid; visiting a cell clears it

use std::fmt;
use std::str::FromStr;

use crate::error::TraceError;
use crate::types::Coordinate;

/// Thinned edge mask, `true` marks a stroke pixel that has not been traced yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Mask {
    /// All-off mask
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    /// Build a mask by evaluating `f(row, col)` for every cell
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }

        Self { height, width, cells }
    }

    /// Build a mask from nested rows
    /// Every row must have the same length as the first one
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, TraceError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(TraceError::RaggedMask {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self { height, width, cells })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether `at` lies inside the grid
    pub fn contains(&self, at: Coordinate) -> bool {
        at.row < self.height && at.col < self.width
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Edge flag at (row, col); anything outside the grid reads as off
    pub fn is_on(&self, row: isize, col: isize) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i])
    }

    pub fn is_on_at(&self, at: Coordinate) -> bool {
        self.contains(at) && self.cells[at.row * self.width + at.col]
    }

    /// Mark (row, col) as consumed; no-op when already off or out of range
    pub fn clear(&mut self, row: isize, col: isize) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = false;
        }
    }

    pub fn clear_at(&mut self, at: Coordinate) {
        if self.contains(at) {
            self.cells[at.row * self.width + at.col] = false;
        }
    }

    /// Number of cells still on
    pub fn count_on(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// True when no cell is on
    pub fn is_blank(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// First on cell in row-major order
    pub fn first_on(&self) -> Option<Coordinate> {
        let i = self.cells.iter().position(|&on| on)?;
        Some(Coordinate::new(i / self.width, i % self.width))
    }

    /// Iterate over the on cells in row-major order
    pub fn on_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(i, _)| Coordinate::new(i / self.width, i % self.width))
    }
}

/// Text form: one line per row, `#` or `1` for on, `.` or `0` for off
/// Blank lines and surrounding whitespace are ignored
impl FromStr for Mask {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let cells = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '#' | '1' => Ok(true),
                    '.' | '0' => Ok(false),
                    _ => Err(TraceError::InvalidCell { row, col, ch }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }

        Mask::from_rows(rows)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)).take(self.height) {
            for &on in row {
                write!(f, "{}", if on { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_as_off() {
        let mask: Mask = "##\n##".parse().unwrap();
        assert!(mask.is_on(0, 0));
        assert!(mask.is_on(1, 1));
        assert!(!mask.is_on(-1, 0));
        assert!(!mask.is_on(0, -1));
        assert!(!mask.is_on(2, 0));
        assert!(!mask.is_on(0, 2));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut mask: Mask = ".#.".parse().unwrap();
        mask.clear(0, 1);
        mask.clear(0, 1);
        mask.clear(-3, 7);
        assert!(mask.is_blank());
        assert_eq!(mask.width(), 3);
    }

    #[test]
    fn ragged_rows_fail_at_ingestion() {
        let err = Mask::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();
        assert_eq!(
            err,
            TraceError::RaggedMask {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn invalid_character_is_reported() {
        let err = "#.\n.x".parse::<Mask>().unwrap_err();
        assert_eq!(err, TraceError::InvalidCell { row: 1, col: 1, ch: 'x' });
    }

    #[test]
    fn first_on_scans_row_major() {
        let mask: Mask = "....\n..#.\n#...".parse().unwrap();
        assert_eq!(mask.first_on(), Some(Coordinate::new(1, 2)));
        assert_eq!(mask.count_on(), 2);
        assert_eq!(Mask::new(3, 3).first_on(), None);
    }

    #[test]
    fn display_round_trips_text_form() {
        let text = "#..\n.#.\n..#\n";
        let mask: Mask = text.parse().unwrap();
        assert_eq!(mask.to_string(), text);
    }

    #[test]
    fn from_fn_matches_text_form() {
        let diagonal = Mask::from_fn(3, 3, |r, c| r == c);
        assert_eq!(diagonal, "#..\n.#.\n..#".parse::<Mask>().unwrap());
    }
}
