use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid cell address, (row, col) with the origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring cell at (row + dr, col + dc)
    /// Returns None when either index would go negative; the upper bound is the mask's concern
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// 8-connected (king move) distance between two cells
    pub fn chebyshev(self, other: Self) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Relative displacement between consecutive path cells
/// `dx` is the column change, `dy` the row change (screen axes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Delta {
    pub dx: i64,
    pub dy: i64,
}

impl Delta {
    pub fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    /// Displacement that takes `from` onto `to`
    pub fn between(from: Coordinate, to: Coordinate) -> Self {
        Self {
            dx: to.col as i64 - from.col as i64,
            dy: to.row as i64 - from.row as i64,
        }
    }

    /// True when both components lie in [-1, 1]
    pub fn is_unit(&self) -> bool {
        (-1..=1).contains(&self.dx) && (-1..=1).contains(&self.dy)
    }

    /// Number of unit moves the axis-by-axis walk needs to cover this delta
    pub fn manhattan(&self) -> u64 {
        self.dx.unsigned_abs() + self.dy.unsigned_abs()
    }

    /// Axis-independent unit walk: the whole x component first, then y
    pub fn unit_steps(&self) -> impl Iterator<Item = Delta> {
        let x_step = Delta::new(self.dx.signum(), 0);
        let y_step = Delta::new(0, self.dy.signum());
        std::iter::repeat(x_step)
            .take(self.dx.unsigned_abs() as usize)
            .chain(std::iter::repeat(y_step).take(self.dy.unsigned_abs() as usize))
    }
}

impl std::ops::Add for Delta {
    type Output = Delta;

    fn add(self, rhs: Delta) -> Delta {
        Delta::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

/// Run of path cells drawn with the button held, i.e. between two jumps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Coordinate>,
}

impl Stroke {
    pub fn first(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }
}

/// Edge detection sensitivity presets (Canny low/high thresholds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePreset {
    /// 30 / 100
    Sensitive,
    /// 50 / 150
    #[default]
    Medium,
    /// 100 / 200
    Strict,
}

impl EdgePreset {
    /// Every preset, loosest first
    pub const ALL: [EdgePreset; 3] = [EdgePreset::Sensitive, EdgePreset::Medium, EdgePreset::Strict];

    pub fn name(&self) -> &'static str {
        match self {
            EdgePreset::Sensitive => "sensitive",
            EdgePreset::Medium => "medium",
            EdgePreset::Strict => "strict",
        }
    }

    /// Returns (low, high) gradient thresholds
    pub fn thresholds(&self) -> (f32, f32) {
        match self {
            EdgePreset::Sensitive => (30.0, 100.0),
            EdgePreset::Medium => (50.0, 150.0),
            EdgePreset::Strict => (100.0, 200.0),
        }
    }
}

impl fmt::Display for EdgePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = self.thresholds();
        write!(f, "{} ({}/{})", self.name(), low, high)
    }
}

/// Output format for traced paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Dxf,
    Json,
    All,
}

impl OutputFormat {
    pub fn includes_svg(&self) -> bool {
        matches!(self, OutputFormat::Svg | OutputFormat::All)
    }

    pub fn includes_dxf(&self) -> bool {
        matches!(self, OutputFormat::Dxf | OutputFormat::All)
    }

    pub fn includes_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::All)
    }
}
