use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::matching::{find_runs, has_run_at};
use crate::*;

/// Stateless match-3 rules. Holds only configuration; boards are passed in and new ones
/// handed back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    config: RuleConfig,
}

impl Rules {
    pub const fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> RuleConfig {
        self.config
    }

    const fn min_run(&self) -> Coord {
        self.config.effective_min_run()
    }

    /// Whether swapping `first` and `second` would form a run through either of them.
    ///
    /// Both positions must be on the board and share a row or column; they need not be adjacent.
    pub fn can_move<T: Tile>(&self, board: &Board<T>, first: Position, second: Position) -> bool {
        if !board.contains(first) || !board.contains(second) {
            return false;
        }
        if !first.is_colinear_with(second) {
            return false;
        }

        let mut scratch = board.tiles().clone();
        scratch.swap(first.to_nd_index(), second.to_nd_index());
        has_run_at(&scratch, first, self.min_run())
            || has_run_at(&scratch, second, self.min_run())
    }

    /// Swaps two tiles and resolves every resulting cascade.
    ///
    /// A move rejected by [`Rules::can_move`] leaves the board as it is and reports no effects.
    pub fn apply_move<T, S>(
        &self,
        source: &mut S,
        board: &Board<T>,
        first: Position,
        second: Position,
    ) -> MoveResult<T>
    where
        T: Tile,
        S: TileSource<T> + ?Sized,
    {
        if !self.can_move(board, first, second) {
            log::debug!("Rejected move {} <-> {}", first, second);
            return MoveResult::unchanged(board.clone());
        }

        let mut grid = board.tiles().clone();
        grid.swap(first.to_nd_index(), second.to_nd_index());
        self.cascade(source, grid)
    }

    /// Resolves runs already present on `board` without swapping anything first.
    ///
    /// Freshly created boards may contain runs; this is the opt-in step that clears them.
    pub fn settle<T, S>(&self, source: &mut S, board: &Board<T>) -> MoveResult<T>
    where
        T: Tile,
        S: TileSource<T> + ?Sized,
    {
        self.cascade(source, board.tiles().clone())
    }

    pub fn find_matches<T: Tile>(&self, board: &Board<T>) -> Vec<Match<T>> {
        find_runs(board.tiles(), self.min_run())
    }

    fn cascade<T, S>(&self, source: &mut S, mut grid: Array2<T>) -> MoveResult<T>
    where
        T: Tile,
        S: TileSource<T> + ?Sized,
    {
        let mut effects = Vec::new();
        let long_cascade = grid.len();
        let mut pass = 0usize;

        loop {
            let runs = find_runs(&grid, self.min_run());
            if runs.is_empty() {
                break;
            }
            pass += 1;
            log::debug!("Cascade pass {}: {} runs", pass, runs.len());
            if pass == long_cascade + 1 {
                log::warn!(
                    "Cascade still going after {} passes, check the tile source variety",
                    long_cascade
                );
            }

            let mut vacant = Array2::from_elem(grid.dim(), false);
            for run in runs {
                log::trace!("Clearing {} tiles from {}", run.len(), run.positions[0]);
                for &pos in &run.positions {
                    vacant[pos.to_nd_index()] = true;
                }
                effects.push(Effect::Match(run));
            }

            apply_gravity(&mut grid, &mut vacant);
            refill(&mut grid, &vacant, source);

            let board = self
                .config
                .refill_snapshots
                .then(|| Board::from_grid_unchecked(grid.clone()));
            effects.push(Effect::Refill { board });
        }

        MoveResult {
            board: Board::from_grid_unchecked(grid),
            effects,
        }
    }
}

/// Compacts the non-vacant tiles of every column towards the bottom, keeping their order.
///
/// Afterwards the vacant cells of each column are exactly its top rows. Their tile values are
/// stale and must be overwritten by [`refill`].
fn apply_gravity<T>(grid: &mut Array2<T>, vacant: &mut Array2<bool>) {
    let (height, width) = grid.dim();
    for col in 0..width {
        let mut write = height;
        for read in (0..height).rev() {
            if vacant[[read, col]] {
                continue;
            }
            write -= 1;
            if write != read {
                grid.swap([read, col], [write, col]);
                vacant.swap([read, col], [write, col]);
            }
        }
    }
}

/// Draws one tile per vacant cell: columns left to right, each top to bottom.
fn refill<T, S>(grid: &mut Array2<T>, vacant: &Array2<bool>, source: &mut S)
where
    S: TileSource<T> + ?Sized,
{
    let (height, width) = grid.dim();
    for col in 0..width {
        for row in 0..height {
            if vacant[[row, col]] {
                grid[[row, col]] = source.next_tile();
            }
        }
    }
}
