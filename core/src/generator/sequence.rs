use alloc::vec::Vec;

use super::*;

/// Scripted source that replays a fixed list of tiles, wrapping around at the end.
///
/// Mostly useful for tests and replays, where the exact refill order has to be known upfront.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceTileSource<T> {
    tiles: Vec<T>,
    cursor: usize,
    drawn: usize,
}

impl<T> SequenceTileSource<T> {
    pub fn new(tiles: Vec<T>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(BoardError::EmptyPalette);
        }
        Ok(Self {
            tiles,
            cursor: 0,
            drawn: 0,
        })
    }

    /// Number of tiles handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl<T: Clone> TileSource<T> for SequenceTileSource<T> {
    fn next_tile(&mut self) -> T {
        let tile = self.tiles[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.tiles.len();
        self.drawn += 1;
        tile
    }
}
