//! Rule engine for a match-3 tile puzzle.
//!
//! Swaps are validated, performed and then resolved as a cascade: runs of equal tiles are
//! cleared, the survivors fall, the gaps are refilled from a [`TileSource`], and the whole thing
//! repeats until the board has no runs left. Every operation is a pure function of its inputs
//! and reports what happened as an ordered list of [`Effect`]s.
#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use matching::{Match, RunPositions};
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod matching;
mod tile;
mod types;

/// Shortest run the engine will ever accept as a match.
pub const MIN_RUN: Coord = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Tiles needed in a row or column for a match.
    pub min_run: Coord,
    /// Attach a snapshot of the board to every [`Effect::Refill`].
    pub refill_snapshots: bool,
}

impl RuleConfig {
    pub const fn new_unchecked(min_run: Coord, refill_snapshots: bool) -> Self {
        Self {
            min_run,
            refill_snapshots,
        }
    }

    pub fn new(min_run: Coord) -> Self {
        Self::new_unchecked(min_run.clamp(MIN_RUN, Coord::MAX), false)
    }

    pub const fn with_refill_snapshots(self, refill_snapshots: bool) -> Self {
        Self::new_unchecked(self.min_run, refill_snapshots)
    }

    /// Run length the rules actually apply. Never below [`MIN_RUN`], however the config was built.
    pub const fn effective_min_run(&self) -> Coord {
        if self.min_run < MIN_RUN {
            MIN_RUN
        } else {
            self.min_run
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::new_unchecked(MIN_RUN, false)
    }
}

/// Something observable that happened while resolving a move, in the order it happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect<T> {
    /// A run was found and cleared.
    Match(Match<T>),
    /// A gravity and regeneration pass completed. Carries the resulting board when
    /// [`RuleConfig::refill_snapshots`] is set.
    Refill { board: Option<Board<T>> },
}

impl<T> Effect<T> {
    pub const fn is_refill(&self) -> bool {
        matches!(self, Self::Refill { .. })
    }

    pub const fn as_match(&self) -> Option<&Match<T>> {
        match self {
            Self::Match(m) => Some(m),
            Self::Refill { .. } => None,
        }
    }
}

/// Final board of one move plus the full effect trace, every cascade included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveResult<T> {
    pub board: Board<T>,
    pub effects: Vec<Effect<T>>,
}

impl<T> MoveResult<T> {
    pub(crate) fn unchanged(board: Board<T>) -> Self {
        Self {
            board,
            effects: Vec::new(),
        }
    }

    /// Whether anything happened. Rejected moves have no effects.
    pub fn has_update(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn matches(&self) -> impl Iterator<Item = &Match<T>> {
        self.effects.iter().filter_map(Effect::as_match)
    }

    /// Number of clear, fall and refill passes the move went through.
    pub fn cascade_passes(&self) -> usize {
        self.effects.iter().filter(|effect| effect.is_refill()).count()
    }
}

/// Fills a `width × height` board row-major from `source`.
pub fn create<T, S>(source: &mut S, width: Coord, height: Coord) -> Result<Board<T>>
where
    S: TileSource<T> + ?Sized,
{
    Board::create(source, width, height)
}

pub fn piece<T>(board: &Board<T>, pos: Position) -> Option<&T> {
    board.piece(pos)
}

pub fn positions<T>(board: &Board<T>) -> impl Iterator<Item = Position> + use<T> {
    board.positions()
}

/// [`Rules::can_move`] with the default rules.
pub fn can_move<T: Tile>(board: &Board<T>, first: Position, second: Position) -> bool {
    Rules::default().can_move(board, first, second)
}

/// [`Rules::apply_move`] with the default rules.
pub fn make_move<T, S>(
    source: &mut S,
    board: &Board<T>,
    first: Position,
    second: Position,
) -> MoveResult<T>
where
    T: Tile,
    S: TileSource<T> + ?Sized,
{
    Rules::default().apply_move(source, board, first, second)
}

/// [`Rules::settle`] with the default rules.
pub fn settle<T, S>(source: &mut S, board: &Board<T>) -> MoveResult<T>
where
    T: Tile,
    S: TileSource<T> + ?Sized,
{
    Rules::default().settle(source, board)
}

/// [`Rules::find_matches`] with the default rules.
pub fn find_matches<T: Tile>(board: &Board<T>) -> Vec<Match<T>> {
    Rules::default().find_matches(board)
}
