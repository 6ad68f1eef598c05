//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the sliding-tile word game: dealing,
//! legal moves, word detection, scoring, and turn commitment. It has **no
//! dependencies** on rendering or input handling, making it:
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Testable**: Unit tests for every rule, property tests for invariants
//! - **Portable**: Any front end can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: N x N playfield, the central hole, and the segment containment test
//! - [`bag`]: Letter table expansion and shuffling
//! - [`tile`]: Tiles and the live tile set
//! - [`selection`]: Ordered set of displaced tiles
//! - [`moves`]: Legal destination computation, including the interference rule
//! - [`word`]: Line detection and word scoring
//! - [`session`]: The game session that owns all state and applies moves
//! - [`config`]: Grid size and letter table, with TOML loading
//! - [`snapshot`]: Serializable point-in-time view
//!
//! # Game Rules
//!
//! - **Deal**: The shuffled bag fills every cell except the central 2x2 hole
//! - **Moves**: A tile slides from its origin along any of 8 directions,
//!   stopping before the first other tile; it may return to its origin unless
//!   another displaced tile's path runs through it
//! - **Selection**: A tile is selected exactly while it is off its origin
//! - **Words**: Two or more selected tiles on one unit-step line, read in
//!   row-major order
//! - **Scoring**: Sum of letter values times word length
//!
//! # Example
//!
//! ```
//! use wordsearch_core::{GameConfig, GameSession};
//! use wordsearch_core::types::Coord;
//!
//! let mut game = GameSession::deal(&GameConfig::default(), 12345).unwrap();
//!
//! // The tile north-west of the hole can dive into it.
//! let tile = game.tile_at(Coord::new(3, 3)).unwrap().id();
//! assert!(game.legal_spaces(tile).contains(&Coord::new(4, 4)));
//!
//! game.move_tile(tile, Coord::new(4, 4)).unwrap();
//! assert_eq!(game.selection().ids(), &[tile]);
//!
//! // One tile is not a word.
//! assert!(game.evaluate_selection().is_none());
//! assert!(game.commit_word().is_err());
//!
//! game.reset_selection();
//! assert!(game.selection().is_empty());
//! ```

pub mod bag;
pub mod config;
pub mod error;
pub mod grid;
pub mod moves;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod snapshot;
pub mod tile;
pub mod word;

pub use wordsearch_types as types;

// Re-export commonly used types for convenience
pub use bag::{TileBag, TileFace};
pub use config::{GameConfig, LetterEntry, STANDARD_LETTERS};
pub use error::{CommitError, ConfigError, MoveError};
pub use grid::{space_between, Grid};
pub use scoring::calculate_word_score;
pub use selection::Selection;
pub use session::{Commit, GameSession};
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use tile::{Tile, TileSet};
pub use word::{evaluate, Word};
