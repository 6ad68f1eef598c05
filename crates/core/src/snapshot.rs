//! Snapshot module - serializable point-in-time view of a session

use serde::Serialize;

use crate::tile::Tile;
use crate::types::{Coord, Letter, TileId, WordPreview};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileSnapshot {
    pub id: TileId,
    pub letter: Letter,
    pub value: u32,
    pub origin: Coord,
    pub current: Coord,
    pub selected: bool,
}

impl TileSnapshot {
    /// `None` for tiles that are no longer on the grid
    pub fn from_tile(tile: &Tile) -> Option<Self> {
        Some(Self {
            id: tile.id(),
            letter: tile.letter(),
            value: tile.value(),
            origin: tile.origin(),
            current: tile.current()?,
            selected: tile.selected(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub grid_size: usize,
    /// One string per row; empty cells are `.`, blanks `_`
    pub board: Vec<String>,
    pub tiles: Vec<TileSnapshot>,
    pub selection: Vec<TileId>,
    pub total: u32,
    pub remaining: usize,
    pub preview: Option<WordPreview>,
}

impl GameSnapshot {
    pub const EMPTY_CELL: char = '.';

    /// Selected tiles in selection order
    pub fn selected_tiles(&self) -> impl Iterator<Item = &TileSnapshot> + '_ {
        self.selection
            .iter()
            .filter_map(|id| self.tiles.iter().find(|t| t.id == *id))
    }
}

impl std::fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.board {
            writeln!(f, "{row}")?;
        }
        match &self.preview {
            Some(p) => write!(f, "total {} | {} ({})", self.total, p.word, p.score),
            None => write!(f, "total {}", self.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::TileFace;

    #[test]
    fn scored_tiles_have_no_snapshot() {
        let mut tile = Tile::new(TileId(3), TileFace::new(Letter::Blank, 0), Coord::new(0, 2));
        let snap = TileSnapshot::from_tile(&tile).unwrap();
        assert_eq!(snap.current, Coord::new(0, 2));
        assert!(!snap.selected);

        tile.set_current(None);
        assert_eq!(TileSnapshot::from_tile(&tile), None);
    }

    #[test]
    fn tile_snapshot_json_shape() {
        let tile = Tile::new(TileId(3), TileFace::new(Letter::Blank, 0), Coord::new(0, 2));
        let snap = TileSnapshot::from_tile(&tile).unwrap();
        let v = serde_json::to_value(snap).unwrap();
        assert_eq!(v["id"], 3);
        assert_eq!(v["letter"], "blank");
        assert_eq!(v["origin"]["c"], 2);
        assert_eq!(v["selected"], false);
    }

    #[test]
    fn display_includes_preview() {
        let snap = GameSnapshot {
            grid_size: 4,
            board: vec!["AB..".into()],
            total: 9,
            preview: Some(WordPreview {
                word: "AB".into(),
                score: 4,
            }),
            ..GameSnapshot::default()
        };
        assert_eq!(snap.to_string(), "AB..\ntotal 9 | AB (4)");
    }
}
