//! Error types returned by the session and configuration loading.

use derive_more::{Display, Error};

use crate::types::{Coord, Letter, TileId};

/// Rejected `move_tile` request. The session is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The tile was never dealt, or has already been scored
    #[display("tile {tile} is not in play")]
    TileNotInPlay { tile: TileId },
    /// The target is outside the tile's legal destinations
    #[display("{target} is not a legal destination for tile {tile}")]
    NotLegalDestination { tile: TileId, target: Coord },
}

impl MoveError {
    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            MoveError::TileNotInPlay { .. } => "tile_not_in_play",
            MoveError::NotLegalDestination { .. } => "not_legal_destination",
        }
    }
}

/// Rejected `commit_word` request. No score is applied and no tile is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CommitError {
    #[display("the current selection does not form a word")]
    NoCurrentWord,
}

/// Fatal configuration problem; no session can be built from it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("letter table is empty")]
    EmptyLetterTable,
    #[display("letter {letter} has zero frequency")]
    ZeroFrequency { letter: Letter },
    #[display("letter table contains a whitespace character; use the blank entry instead")]
    WhitespaceLetter,
    #[display("letter {letter} appears more than once")]
    DuplicateLetter { letter: Letter },
    #[display("grid size {size} must be even and at least {min}")]
    InvalidGridSize { size: usize, min: usize },
    #[display("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },
    #[display("bag holds {actual} tiles but the grid has {expected} occupiable cells")]
    BagSizeMismatch { expected: usize, actual: usize },
    #[display("failed to parse config: {message}")]
    Parse { message: String },
    #[display("failed to read config file: {message}")]
    Io { message: String },
}
