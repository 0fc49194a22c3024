use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for total-cell counts and run lengths.
pub type CellCount = u16;

/// Zero-indexed grid coordinates, compared by value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: Coord,
    pub col: Coord,
}

impl Position {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    /// Whether both positions share a row or a column.
    pub const fn is_colinear_with(self, other: Position) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((row, col): (Coord, Coord)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), self.col.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Axis a run is laid out along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    const fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }
}

/// Applies `delta` to `pos`, returning a value only when it remains inside `bounds` (height, width).
fn apply_delta(pos: Position, delta: (isize, isize), bounds: (Coord, Coord)) -> Option<Position> {
    let (dr, dc) = delta;
    let (height, width) = bounds;

    let row = pos.row.checked_add_signed(dr.try_into().ok()?)?;
    if row >= height {
        return None;
    }

    let col = pos.col.checked_add_signed(dc.try_into().ok()?)?;
    if col >= width {
        return None;
    }

    Some(Position { row, col })
}

/// Walks away from `start` along an axis, one cell at a time, until the board edge.
///
/// The start cell itself is not yielded.
#[derive(Debug)]
pub struct LineIter {
    current: Position,
    delta: (isize, isize),
    bounds: (Coord, Coord),
}

impl LineIter {
    pub(crate) fn forward(start: Position, axis: Axis, bounds: (Coord, Coord)) -> Self {
        Self {
            current: start,
            delta: axis.step(),
            bounds,
        }
    }

    pub(crate) fn backward(start: Position, axis: Axis, bounds: (Coord, Coord)) -> Self {
        let (dr, dc) = axis.step();
        Self {
            current: start,
            delta: (-dr, -dc),
            bounds,
        }
    }
}

impl Iterator for LineIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let next = apply_delta(self.current, self.delta, self.bounds)?;
        self.current = next;
        Some(next)
    }
}
