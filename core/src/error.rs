use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board width and height must both be non-zero and fit the coordinate range")]
    InvalidDimensions,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Tile source needs at least one tile to draw from")]
    EmptyPalette,
}

pub type Result<T> = core::result::Result<T, BoardError>;
