//! Core types module - shared data structures and constants
//!
//! This module defines the plain data shared by the rules engine and any
//! presentation layer built on top of it. Nothing here owns game state; the
//! session in `wordsearch-core` resolves ids and coordinates into tiles.
//!
//! # Grid Geometry
//!
//! - **Size**: `N x N`, `N = 10` by default (rows and columns indexed `0..N`)
//! - **Coordinates**: `(r, c)`, row first, origin at the top-left corner
//! - **Hole**: the central 2x2 block, rows and columns `N/2 - 1` and `N/2`
//!
//! # Directions
//!
//! Tiles slide along the 8 compass directions. [`Direction::ALL`] fixes the
//! enumeration order used everywhere a deterministic ordering matters:
//!
//! | Direction | (dr, dc) |
//! |-----------|----------|
//! | `North` | (-1, 0) |
//! | `NorthEast` | (-1, 1) |
//! | `East` | (0, 1) |
//! | `SouthEast` | (1, 1) |
//! | `South` | (1, 0) |
//! | `SouthWest` | (1, -1) |
//! | `West` | (0, -1) |
//! | `NorthWest` | (-1, -1) |
//!
//! # Examples
//!
//! ```
//! use wordsearch_types::{Coord, Direction, Letter, DEFAULT_GRID_SIZE};
//!
//! let origin = Coord::new(3, 3);
//! assert_eq!(origin.step(Direction::SouthEast, 2), Coord::new(5, 5));
//!
//! assert_eq!(Letter::parse("q"), Some(Letter::Char('Q')));
//! assert_eq!(Letter::parse("blank"), Some(Letter::Blank));
//! assert_eq!(Letter::parse(" "), None);
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 10);
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Default grid dimension (10 x 10)
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Smallest grid that still leaves a ring of cells around the hole
pub const MIN_GRID_SIZE: usize = 4;

/// Largest grid whose tiles all fit in a [`TileId`]
pub const MAX_GRID_SIZE: usize = 256;

/// Side length of the central hole
pub const HOLE_SIZE: usize = 2;

/// Number of cells excluded from dealing
pub const HOLE_CELLS: usize = HOLE_SIZE * HOLE_SIZE;

/// Character used when a blank tile is rendered inside a word
pub const BLANK_SYMBOL: char = '_';

/// A grid position, row first.
///
/// Coordinates are signed so that ray stepping and cross products never
/// underflow; bounds are checked by the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("({r}, {c})")]
pub struct Coord {
    pub r: i32,
    pub c: i32,
}

impl Coord {
    pub const fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }

    /// The cell `distance` steps away in `direction`
    pub fn step(self, direction: Direction, distance: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            r: self.r + dr * distance,
            c: self.c + dc * distance,
        }
    }

    /// Component-wise offset from `self` to `other`
    pub fn delta_to(self, other: Coord) -> (i32, i32) {
        (other.r - self.r, other.c - self.c)
    }

    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

/// The eight compass directions a tile may slide in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in scan order (clockwise from north)
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit step as `(dr, dc)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Inverse of [`Direction::delta`]
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_types::Direction;
    ///
    /// assert_eq!(Direction::from_delta(1, -1), Some(Direction::SouthWest));
    /// assert_eq!(Direction::from_delta(0, 2), None);
    /// assert_eq!(Direction::from_delta(0, 0), None);
    /// ```
    pub fn from_delta(dr: i32, dc: i32) -> Option<Self> {
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.delta() == (dr, dc))
    }
}

/// Face of a tile: a letter, or the blank sentinel.
///
/// The blank is its own variant and never the space character. Serialized as
/// a one-character string, or `"blank"` for the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Letter {
    Char(char),
    Blank,
}

impl Letter {
    /// Parse a letter from a table entry (case-insensitive)
    ///
    /// Accepts a single non-whitespace character, or `"blank"` / `"_"` for
    /// the blank tile. Letters are normalized to uppercase.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("blank") {
            return Some(Letter::Blank);
        }
        let mut chars = s.chars();
        let ch = chars.next()?;
        if chars.next().is_some() || ch.is_whitespace() {
            return None;
        }
        if ch == BLANK_SYMBOL {
            return Some(Letter::Blank);
        }
        let mut upper = ch.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => Some(Letter::Char(u)),
            _ => Some(Letter::Char(ch)),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Letter::Blank)
    }

    /// Character used when the letter is rendered in a word
    pub fn symbol(&self) -> char {
        match self {
            Letter::Char(ch) => *ch,
            Letter::Blank => BLANK_SYMBOL,
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<String> for Letter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Letter::parse(&value).ok_or_else(|| format!("invalid letter {value:?}"))
    }
}

impl From<Letter> for String {
    fn from(value: Letter) -> Self {
        match value {
            Letter::Char(ch) => ch.to_string(),
            Letter::Blank => "blank".to_string(),
        }
    }
}

/// Stable identifier of a dealt tile (its index in deal order)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("#{_0}")]
#[serde(transparent)]
pub struct TileId(pub u16);

impl TileId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A cell on the grid
///
/// - `None`: empty cell
/// - `Some(TileId)`: cell holding the given tile
pub type Cell = Option<TileId>;

/// Word currently formed by the selection, with its score
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPreview {
    pub word: String,
    pub score: u32,
}

/// Notification returned by every mutating session call.
///
/// The presentation layer decides how to render each change; the engine
/// never calls back into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A tile changed cells
    TileMoved { tile: TileId, from: Coord, to: Coord },
    /// Selection membership or order changed; carries the full new selection
    SelectionChanged { selection: Vec<TileId> },
    /// The word preview differs from the previous one
    PreviewChanged { preview: Option<WordPreview> },
    /// The running total increased
    TotalChanged { total: u32 },
    /// Tiles were scored and left play permanently
    TilesRemoved { tiles: Vec<TileId> },
}
