use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Positions making up one run. Runs are rarely longer than five tiles.
pub type RunPositions = SmallVec<[Position; 5]>;

/// One run of equal tiles along a single row or column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match<T> {
    pub matched: T,
    pub axis: Axis,
    /// In increasing column (horizontal) or row (vertical) order.
    pub positions: RunPositions,
}

// a match always holds at least `MIN_RUN` positions
#[allow(clippy::len_without_is_empty)]
impl<T> Match<T> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Maximal run of tiles equal to the one at `pos` along `axis`, as `(first cell, length)`.
fn run_extent<T: Tile>(grid: &Array2<T>, pos: Position, axis: Axis) -> (Position, CellCount) {
    let bounds = grid_bounds(grid);
    let center = &grid[pos.to_nd_index()];
    let same = |p: &Position| grid[p.to_nd_index()] == *center;

    let mut start = pos;
    let mut len: CellCount = 1;
    for p in LineIter::backward(pos, axis, bounds).take_while(same) {
        start = p;
        len += 1;
    }
    len += LineIter::forward(pos, axis, bounds).take_while(same).count() as CellCount;

    (start, len)
}

fn grid_bounds<T>(grid: &Array2<T>) -> (Coord, Coord) {
    let (height, width) = grid.dim();
    (height as Coord, width as Coord)
}

/// Whether `pos` sits inside a run of at least `min_run` tiles on either axis.
pub(crate) fn has_run_at<T: Tile>(grid: &Array2<T>, pos: Position, min_run: Coord) -> bool {
    [Axis::Horizontal, Axis::Vertical]
        .into_iter()
        .any(|axis| run_extent(grid, pos, axis).1 >= CellCount::from(min_run))
}

/// Runs through `pos`, horizontal first. Intersecting runs are reported once per axis.
pub(crate) fn runs_at<T: Tile>(
    grid: &Array2<T>,
    pos: Position,
    min_run: Coord,
) -> impl Iterator<Item = Match<T>> {
    let bounds = grid_bounds(grid);
    [Axis::Horizontal, Axis::Vertical]
        .into_iter()
        .filter_map(move |axis| {
            let (start, len) = run_extent(grid, pos, axis);
            if len < CellCount::from(min_run) {
                return None;
            }
            let positions = core::iter::once(start)
                .chain(LineIter::forward(start, axis, bounds))
                .take(len.into())
                .collect();
            Some(Match {
                matched: grid[pos.to_nd_index()].clone(),
                axis,
                positions,
            })
        })
}

/// Every distinct run on the grid, in row-major discovery order.
///
/// Each member of a run rediscovers the same run; it is kept only when seen from its first
/// cell, which is also where a row-major scan meets it first. This is the same as deduplicating
/// by tile value and exact position list.
pub(crate) fn find_runs<T: Tile>(grid: &Array2<T>, min_run: Coord) -> Vec<Match<T>> {
    let (height, width) = grid_bounds(grid);
    let mut found = Vec::new();
    for row in 0..height {
        for col in 0..width {
            let pos = Position { row, col };
            found.extend(runs_at(grid, pos, min_run).filter(|run| run.positions[0] == pos));
        }
    }
    found
}
