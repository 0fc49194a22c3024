use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Dense `width × height` grid of tiles, indexed by `[row, col]`.
///
/// Every slot is populated. Boards are only ever built through validating constructors, so the
/// grid is never empty and both dimensions fit in [`Coord`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Board<T> {
    tiles: Array2<T>,
}

#[derive(Deserialize)]
struct RawBoard<T> {
    tiles: Array2<T>,
}

impl<T> TryFrom<RawBoard<T>> for Board<T> {
    type Error = BoardError;

    fn try_from(raw: RawBoard<T>) -> Result<Self> {
        Self::from_array(raw.tiles)
    }
}

impl<T> Board<T> {
    /// Fills a new board row-major, drawing exactly `width * height` tiles from `source`.
    ///
    /// Runs already present in the generated tiles are left in place; see [`Rules::settle`].
    pub fn create<S>(source: &mut S, width: Coord, height: Coord) -> Result<Self>
    where
        S: TileSource<T> + ?Sized,
    {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions);
        }

        let mut tiles = Vec::with_capacity(mult(width, height).into());
        for _row in 0..height {
            for _col in 0..width {
                tiles.push(source.next_tile());
            }
        }

        let tiles = Array2::from_shape_vec((usize::from(height), usize::from(width)), tiles)
            .map_err(|_| BoardError::InvalidBoardShape)?;
        Ok(Self { tiles })
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if !dimensions_fit(height, width) {
            return Err(BoardError::InvalidDimensions);
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(BoardError::InvalidBoardShape);
        }

        let tiles = Array2::from_shape_vec((height, width), rows.into_iter().flatten().collect())
            .map_err(|_| BoardError::InvalidBoardShape)?;
        Ok(Self { tiles })
    }

    pub fn from_array(tiles: Array2<T>) -> Result<Self> {
        let (height, width) = tiles.dim();
        if dimensions_fit(height, width) {
            Ok(Self { tiles })
        } else {
            Err(BoardError::InvalidDimensions)
        }
    }

    /// Wraps a grid derived from an existing board, whose shape is already known to be valid.
    pub(crate) fn from_grid_unchecked(tiles: Array2<T>) -> Self {
        debug_assert!(dimensions_fit(tiles.nrows(), tiles.ncols()));
        Self { tiles }
    }

    pub fn width(&self) -> Coord {
        self.tiles.ncols() as Coord
    }

    pub fn height(&self) -> Coord {
        self.tiles.nrows() as Coord
    }

    /// `(height, width)`, the order positions are bounded in.
    pub(crate) fn bounds(&self) -> (Coord, Coord) {
        (self.height(), self.width())
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height() && pos.col < self.width()
    }

    /// Tile at `pos`, or `None` when `pos` lies outside the board.
    pub fn piece(&self, pos: Position) -> Option<&T> {
        self.tiles.get(pos.to_nd_index())
    }

    /// Every coordinate of the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let (height, width) = self.bounds();
        (0..height).flat_map(move |row| (0..width).map(move |col| Position { row, col }))
    }

    pub fn tiles(&self) -> &Array2<T> {
        &self.tiles
    }

    pub fn into_tiles(self) -> Array2<T> {
        self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &T>> {
        self.tiles.rows().into_iter().map(|row| row.into_iter())
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        let (height, width) = self.tiles.dim();
        let mut rows = Vec::with_capacity(height);
        let mut cells = self.tiles.into_iter();
        for _ in 0..height {
            rows.push(cells.by_ref().take(width).collect());
        }
        rows
    }
}

impl<T> Index<Position> for Board<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[pos.to_nd_index()]
    }
}

fn dimensions_fit(height: usize, width: usize) -> bool {
    let max = usize::from(Coord::MAX);
    (1..=max).contains(&height) && (1..=max).contains(&width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{vec, vec::Vec};

    fn counting_source() -> impl FnMut() -> u32 {
        let mut next = 0;
        move || {
            next += 1;
            next
        }
    }

    #[test]
    fn create_fills_row_major() {
        let mut source = counting_source();
        let board = Board::create(&mut source, 3, 2).unwrap();

        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.into_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(source(), 7);
    }

    #[test]
    fn create_rejects_zero_dimensions_without_drawing() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            'a'
        };

        assert_eq!(
            Board::create(&mut source, 0, 4).unwrap_err(),
            BoardError::InvalidDimensions
        );
        assert_eq!(
            Board::create(&mut source, 4, 0).unwrap_err(),
            BoardError::InvalidDimensions
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn piece_is_absent_outside_bounds() {
        let board = Board::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();

        assert_eq!(board.piece(Position::new(1, 0)), Some(&'c'));
        assert_eq!(board.piece(Position::new(2, 0)), None);
        assert_eq!(board.piece(Position::new(0, 2)), None);
        assert_eq!(board.piece(Position::new(Coord::MAX, Coord::MAX)), None);
        assert!(!board.contains(Position::new(0, 2)));
    }

    #[test]
    fn positions_are_row_major_and_ignore_contents() {
        let board = Board::from_rows(vec![vec![0; 3]; 2]).unwrap();
        let positions: Vec<_> = board.positions().collect();

        let expected = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
            .map(|(row, col)| Position::new(row, col));
        assert_eq!(positions, expected);
    }

    #[test]
    fn from_rows_validates_shape() {
        assert_eq!(
            Board::<u8>::from_rows(vec![]).unwrap_err(),
            BoardError::InvalidDimensions
        );
        assert_eq!(
            Board::<u8>::from_rows(vec![vec![]]).unwrap_err(),
            BoardError::InvalidDimensions
        );
        assert_eq!(
            Board::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err(),
            BoardError::InvalidBoardShape
        );
        assert_eq!(
            Board::from_rows(vec![vec![0u8; 256]]).unwrap_err(),
            BoardError::InvalidDimensions
        );
    }

    #[test]
    fn from_array_rejects_empty_grid() {
        let empty: Array2<u8> = Array2::default((0, 3));
        assert_eq!(
            Board::from_array(empty).unwrap_err(),
            BoardError::InvalidDimensions
        );
    }

    #[test]
    fn rows_view_matches_layout() {
        let board = Board::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let rows: Vec<Vec<i32>> = board.rows().map(|row| row.copied().collect()).collect();

        assert_eq!(rows, vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(board[Position::new(1, 1)], 4);
        assert_eq!(board.total_cells(), 4);
    }

    #[test]
    fn serde_round_trip_validates_grid() {
        let board = Board::from_rows(vec![vec!['a', 'b', 'c']]).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);

        let empty = r#"{"tiles":{"v":1,"dim":[0,0],"data":[]}}"#;
        assert!(serde_json::from_str::<Board<char>>(empty).is_err());
    }
}
