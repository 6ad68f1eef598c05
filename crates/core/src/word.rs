//! Word engine - does the selection form a line, and what is it worth?
//!
//! Selected tiles are read in row-major order of their current cells. They
//! form a word only if that order walks a single unit-step grid line
//! (horizontal, vertical or diagonal) with no gaps and no turns.

use serde::Serialize;

use crate::scoring::{calculate_word_score, MIN_WORD_TILES};
use crate::tile::Tile;
use crate::types::{Coord, Direction, TileId, WordPreview};

/// A valid line of selected tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    text: String,
    score: u32,
    direction: Direction,
    tiles: Vec<TileId>,
}

impl Word {
    /// Letters in line order; blanks render as `_`
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Reading direction of the line
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Tile ids in line order
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn preview(&self) -> WordPreview {
        WordPreview {
            word: self.text.clone(),
            score: self.score,
        }
    }
}

/// Evaluate a set of selected tiles; `None` means "no word"
pub fn evaluate<'a>(selected: impl IntoIterator<Item = &'a Tile>) -> Option<Word> {
    let mut line: Vec<(Coord, &Tile)> = Vec::new();
    for tile in selected {
        line.push((tile.current()?, tile));
    }
    if line.len() < MIN_WORD_TILES {
        return None;
    }

    line.sort_by_key(|&(at, tile)| (at, tile.id()));

    let (dr, dc) = line[0].0.delta_to(line[1].0);
    let direction = Direction::from_delta(dr, dc)?;

    let contiguous = line
        .windows(2)
        .all(|pair| pair[0].0.offset(dr, dc) == pair[1].0);
    if !contiguous {
        return None;
    }

    let text = line.iter().map(|(_, t)| t.letter().symbol()).collect();
    let values: Vec<u32> = line.iter().map(|(_, t)| t.value()).collect();
    Some(Word {
        text,
        score: calculate_word_score(&values),
        direction,
        tiles: line.iter().map(|(_, t)| t.id()).collect(),
    })
}
