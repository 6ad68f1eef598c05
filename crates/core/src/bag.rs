//! Tile bag - expands the letter table into the full multiset of tiles
//!
//! Each table entry contributes `frequency` identical faces. The bag is
//! shuffled once, in full, before dealing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::LetterEntry;
use crate::types::Letter;

/// Face of an undealt tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileFace {
    pub letter: Letter,
    pub value: u32,
}

impl TileFace {
    pub const fn new(letter: Letter, value: u32) -> Self {
        Self { letter, value }
    }
}

/// The multiset of tile faces built from a letter table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBag {
    faces: Vec<TileFace>,
}

impl TileBag {
    /// Expand the table in entry order
    pub fn from_table(table: &[LetterEntry]) -> Self {
        let faces = table
            .iter()
            .flat_map(|entry| {
                std::iter::repeat(TileFace::new(entry.letter, entry.value))
                    .take(entry.frequency as usize)
            })
            .collect();
        Self { faces }
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Unshuffled faces, grouped by table entry
    pub fn tiles(&self) -> &[TileFace] {
        &self.faces
    }

    /// Consume the bag and return a uniformly shuffled sequence
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Vec<TileFace> {
        self.faces.shuffle(rng);
        self.faces
    }
}
