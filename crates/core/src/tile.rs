//! Tiles and the live tile set.
//!
//! Tiles refer to cells by coordinate and the grid refers to tiles by id; the
//! session resolves one into the other.

use serde::Serialize;

use crate::bag::TileFace;
use crate::types::{Coord, Letter, TileId};

/// A dealt tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    id: TileId,
    letter: Letter,
    value: u32,
    origin: Coord,
    current: Option<Coord>,
    selected: bool,
}

impl Tile {
    /// Deal a tile onto its origin
    pub fn new(id: TileId, face: TileFace, origin: Coord) -> Self {
        Self {
            id,
            letter: face.letter,
            value: face.value,
            origin,
            current: Some(origin),
            selected: false,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Cell the tile was dealt onto; never changes
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Cell the tile sits on, `None` once scored
    pub fn current(&self) -> Option<Coord> {
        self.current
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Whether the tile has left its origin
    pub fn is_displaced(&self) -> bool {
        self.current.is_some_and(|at| at != self.origin)
    }

    pub(crate) fn set_current(&mut self, at: Option<Coord>) {
        self.current = at;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Tiles still in play, addressable by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSet {
    slots: Vec<Option<Tile>>,
}

impl TileSet {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Append a tile; ids must be handed out in deal order
    pub(crate) fn push(&mut self, tile: Tile) {
        debug_assert_eq!(tile.id().index(), self.slots.len());
        self.slots.push(Some(tile));
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Take a tile out of play for good
    pub(crate) fn remove(&mut self, id: TileId) -> Option<Tile> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }

    /// Live tiles in id order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.slots.iter().flatten()
    }

    /// Number of live tiles
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
