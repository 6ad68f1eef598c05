//! Game configuration - grid size and letter table
//!
//! Loaded before a session starts and validated once. A malformed config is a
//! fatal error: no session is ever built from it.
//!
//! TOML layout:
//!
//! ```toml
//! grid_size = 10
//!
//! [[letters]]
//! letter = "A"
//! value = 1
//! frequency = 8
//!
//! [[letters]]
//! letter = "blank"
//! value = 0
//! frequency = 2
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::ConfigError;
use crate::types::{Letter, DEFAULT_GRID_SIZE, HOLE_CELLS, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Environment variable naming a TOML config file for [`GameConfig::from_env`]
pub const CONFIG_ENV_VAR: &str = "WORDSEARCH_CONFIG";

/// One row of the letter table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterEntry {
    pub letter: Letter,
    pub value: u32,
    pub frequency: u32,
}

impl LetterEntry {
    pub const fn new(letter: Letter, value: u32, frequency: u32) -> Self {
        Self {
            letter,
            value,
            frequency,
        }
    }
}

const fn l(ch: char, value: u32, frequency: u32) -> LetterEntry {
    LetterEntry::new(Letter::Char(ch), value, frequency)
}

/// Default English table: 96 tiles, filling a 10 x 10 grid around its hole
pub const STANDARD_LETTERS: [LetterEntry; 27] = [
    l('A', 1, 8),
    l('B', 3, 2),
    l('C', 3, 2),
    l('D', 2, 4),
    l('E', 1, 11),
    l('F', 4, 2),
    l('G', 2, 3),
    l('H', 4, 2),
    l('I', 1, 8),
    l('J', 8, 1),
    l('K', 5, 1),
    l('L', 1, 4),
    l('M', 3, 2),
    l('N', 1, 6),
    l('O', 1, 7),
    l('P', 3, 2),
    l('Q', 10, 1),
    l('R', 1, 6),
    l('S', 1, 4),
    l('T', 1, 6),
    l('U', 1, 4),
    l('V', 4, 2),
    l('W', 4, 2),
    l('X', 8, 1),
    l('Y', 4, 2),
    l('Z', 10, 1),
    LetterEntry::new(Letter::Blank, 0, 2),
];

/// Static configuration for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    #[serde(default = "default_letters")]
    pub letters: Vec<LetterEntry>,
}

fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

fn default_letters() -> Vec<LetterEntry> {
    STANDARD_LETTERS.to_vec()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            letters: default_letters(),
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: usize, letters: Vec<LetterEntry>) -> Self {
        Self { grid_size, letters }
    }

    /// Number of tiles the letter table produces
    pub fn bag_size(&self) -> usize {
        self.letters.iter().map(|e| e.frequency as usize).sum()
    }

    /// Number of cells tiles are dealt onto
    pub fn occupiable_cells(&self) -> usize {
        self.grid_size
            .saturating_mul(self.grid_size)
            .saturating_sub(HOLE_CELLS)
    }

    /// Check every structural rule; the first violation wins
    #[instrument(skip(self), fields(grid_size = self.grid_size, entries = self.letters.len()))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(%err, "invalid game config");
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE || self.grid_size % 2 != 0 {
            return Err(ConfigError::InvalidGridSize {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.letters.is_empty() {
            return Err(ConfigError::EmptyLetterTable);
        }

        let mut seen = HashSet::new();
        for entry in &self.letters {
            if let Letter::Char(ch) = entry.letter {
                if ch.is_whitespace() {
                    return Err(ConfigError::WhitespaceLetter);
                }
            }
            if entry.frequency == 0 {
                return Err(ConfigError::ZeroFrequency {
                    letter: entry.letter,
                });
            }
            if !seen.insert(entry.letter) {
                return Err(ConfigError::DuplicateLetter {
                    letter: entry.letter,
                });
            }
        }

        let expected = self.occupiable_cells();
        let actual = self.bag_size();
        if actual != expected {
            return Err(ConfigError::BagSizeMismatch { expected, actual });
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(grid_size = config.grid_size, tiles = config.bag_size(), "Config loaded");
        Ok(config)
    }

    /// Config from the file named by `WORDSEARCH_CONFIG`, or the default
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}
