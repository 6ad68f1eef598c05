//! Selection - tiles currently displaced from their origin, in the order they
//! were picked up.

use crate::types::TileId;

/// Insertion-ordered set of tile ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<TileId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile; returns false if it was already selected
    pub(crate) fn insert(&mut self, id: TileId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Drop a tile; returns false if it was not selected
    pub(crate) fn remove(&mut self, id: TileId) -> bool {
        match self.ids.iter().position(|&x| x == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[TileId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.ids.iter().copied()
    }
}
