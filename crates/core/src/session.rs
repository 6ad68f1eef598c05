//! Game session module - owns one game from deal to last word
//!
//! The session ties together the grid, the live tiles, the selection and the
//! running total. It is the only place state changes: every mutating call
//! either succeeds and returns the [`GameEvent`]s describing what changed, or
//! fails and leaves the session exactly as it was.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument, warn};

use crate::bag::{TileBag, TileFace};
use crate::config::{GameConfig, LetterEntry};
use crate::error::{CommitError, ConfigError, MoveError};
use crate::grid::Grid;
use crate::moves;
use crate::selection::Selection;
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::tile::{Tile, TileSet};
use crate::types::{Coord, GameEvent, TileId, WordPreview};
use crate::word::{self, Word};

/// Result of a successful [`GameSession::commit_word`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub word: Word,
    /// Running total after the word was added
    pub total: u32,
    pub events: Vec<GameEvent>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    tiles: TileSet,
    selection: Selection,
    total: u32,
    /// Seed used to shuffle the bag (`None` for explicit layouts)
    seed: Option<u64>,
    /// Last preview reported to the caller, for change detection
    preview: Option<WordPreview>,
}

impl GameSession {
    /// Deal a new game with a freshly drawn seed
    pub fn deal_new_game(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::deal(config, rand::random())
    }

    /// Deal a new game; the same seed always yields the same layout
    #[instrument(skip(config), fields(grid_size = config.grid_size))]
    pub fn deal(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let faces = TileBag::from_table(&config.letters).shuffled(&mut rng);
        let mut session = Self::place(config, faces);
        session.seed = Some(seed);
        info!(seed, tiles = session.tiles.len(), "dealt new game");
        Ok(session)
    }

    /// Deal an explicit tile sequence onto the grid in scan order
    ///
    /// The grid rules of `config` apply; its letter table is not consulted.
    /// The sequence itself must pass the table rules (no whitespace letters,
    /// one value per letter) and fill every occupiable cell exactly.
    #[instrument(skip(config, faces), fields(grid_size = config.grid_size, tiles = faces.len()))]
    pub fn from_tiles(config: &GameConfig, faces: Vec<TileFace>) -> Result<Self, ConfigError> {
        let layout_config = GameConfig::new(config.grid_size, layout_table(&faces));
        layout_config.validate()?;
        Ok(Self::place(config, faces))
    }

    fn place(config: &GameConfig, faces: Vec<TileFace>) -> Self {
        let mut grid = Grid::new(config.grid_size);
        let mut tiles = TileSet::with_capacity(faces.len());
        let cells: Vec<Coord> = grid.deal_order().collect();

        // Validated grids hold at most `u16::MAX + 1` tiles.
        for (index, (face, at)) in faces.into_iter().zip(cells).enumerate() {
            let id = TileId(index as u16);
            grid.set(at, Some(id));
            tiles.push(Tile::new(id, face, at));
        }

        Self {
            config: config.clone(),
            grid,
            tiles,
            selection: Selection::new(),
            total: 0,
            seed: None,
            preview: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// A live tile by id; `None` once scored
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// The tile sitting on a cell, if any
    pub fn tile_at(&self, at: Coord) -> Option<&Tile> {
        self.grid.occupant(at).and_then(|id| self.tiles.get(id))
    }

    /// Live tiles in id order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of tiles still in play
    pub fn remaining_tiles(&self) -> usize {
        self.tiles.len()
    }

    /// Cells `id` may move to; empty for tiles not in play
    pub fn legal_spaces(&self, id: TileId) -> Vec<Coord> {
        match self.tiles.get(id) {
            Some(tile) => moves::legal_spaces(&self.grid, &self.tiles, &self.selection, tile),
            None => Vec::new(),
        }
    }

    pub fn is_legal_move(&self, id: TileId, target: Coord) -> bool {
        self.legal_spaces(id).contains(&target)
    }

    /// Word formed by the current selection, if any
    pub fn evaluate_selection(&self) -> Option<Word> {
        word::evaluate(self.selection.iter().filter_map(|id| self.tiles.get(id)))
    }

    /// Last word preview reported by a mutating call
    pub fn preview(&self) -> Option<&WordPreview> {
        self.preview.as_ref()
    }

    /// Move a tile to one of its legal destinations
    ///
    /// Moving a tile onto the cell it already occupies succeeds with no events.
    #[instrument(skip_all, fields(tile = %id, target = %target))]
    pub fn move_tile(&mut self, id: TileId, target: Coord) -> Result<Vec<GameEvent>, MoveError> {
        let Some(tile) = self.tiles.get(id) else {
            warn!("move rejected: tile not in play");
            return Err(MoveError::TileNotInPlay { tile: id });
        };
        let from = tile.current();

        if !self.is_legal_move(id, target) {
            warn!("move rejected: not a legal destination");
            return Err(MoveError::NotLegalDestination { tile: id, target });
        }
        if from == Some(target) {
            return Ok(Vec::new());
        }

        let mut events = Vec::with_capacity(3);
        let selection_changed = self.relocate(id, target);
        if let Some(from) = from {
            events.push(GameEvent::TileMoved {
                tile: id,
                from,
                to: target,
            });
        }
        debug!(selected = self.selection.len(), "tile moved");
        self.push_state_events(selection_changed, &mut events);
        Ok(events)
    }

    /// Cash in the current word
    ///
    /// Adds its score to the total and removes its tiles from play for good.
    #[instrument(skip(self))]
    pub fn commit_word(&mut self) -> Result<Commit, CommitError> {
        let Some(word) = self.evaluate_selection() else {
            warn!(selected = self.selection.len(), "commit rejected: no current word");
            return Err(CommitError::NoCurrentWord);
        };

        let mut events = Vec::with_capacity(4);
        if word.score() > 0 {
            self.total = self.total.saturating_add(word.score());
            events.push(GameEvent::TotalChanged { total: self.total });
        }

        // Snapshot first: detaching tiles shrinks the selection.
        let scored: Vec<TileId> = self.selection.ids().to_vec();
        for &id in &scored {
            if let Some(tile) = self.tiles.remove(id) {
                if let Some(at) = tile.current() {
                    self.grid.set(at, None);
                }
            }
            self.selection.remove(id);
        }
        events.push(GameEvent::TilesRemoved {
            tiles: scored.clone(),
        });
        self.push_state_events(true, &mut events);

        info!(word = word.text(), score = word.score(), total = self.total, "word committed");
        Ok(Commit {
            word,
            total: self.total,
            events,
        })
    }

    /// Send every selected tile back to its origin
    #[instrument(skip(self))]
    pub fn reset_selection(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.selection.is_empty() {
            return events;
        }

        // Lift every displaced tile before dropping any back, so a tile parked
        // on another tile's origin never blocks the return.
        let displaced: Vec<(TileId, Coord, Coord)> = self
            .selection
            .iter()
            .filter_map(|id| self.tiles.get(id))
            .filter_map(|t| t.current().map(|at| (t.id(), at, t.origin())))
            .collect();
        for &(_, at, _) in &displaced {
            self.grid.set(at, None);
        }
        for &(id, from, origin) in &displaced {
            self.grid.set(origin, Some(id));
            if let Some(tile) = self.tiles.get_mut(id) {
                tile.set_current(Some(origin));
            }
            self.unselect(id);
            events.push(GameEvent::TileMoved {
                tile: id,
                from,
                to: origin,
            });
        }

        debug!(returned = displaced.len(), "selection reset");
        self.push_state_events(true, &mut events);
        events
    }

    /// Point-in-time view for presentation layers that poll
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let n = self.grid.size() as i32;
        out.grid_size = self.grid.size();
        out.board.clear();
        for r in 0..n {
            let row = (0..n)
                .map(|c| match self.tile_at(Coord::new(r, c)) {
                    Some(tile) => tile.letter().symbol(),
                    None => GameSnapshot::EMPTY_CELL,
                })
                .collect();
            out.board.push(row);
        }
        out.tiles.clear();
        out.tiles.extend(self.tiles.iter().filter_map(TileSnapshot::from_tile));
        out.selection.clear();
        out.selection.extend(self.selection.iter());
        out.total = self.total;
        out.remaining = self.tiles.len();
        out.preview = self.evaluate_selection().map(|w| w.preview());
    }

    /// Move a tile and apply the selection rule; returns whether the
    /// selection membership changed
    fn relocate(&mut self, id: TileId, to: Coord) -> bool {
        let Some(tile) = self.tiles.get_mut(id) else {
            return false;
        };
        if let Some(from) = tile.current() {
            self.grid.set(from, None);
        }
        tile.set_current(Some(to));
        let home = tile.origin() == to;
        self.grid.set(to, Some(id));

        if home {
            self.unselect(id)
        } else {
            self.select(id)
        }
    }

    fn select(&mut self, id: TileId) -> bool {
        if let Some(tile) = self.tiles.get_mut(id) {
            tile.set_selected(true);
        }
        self.selection.insert(id)
    }

    fn unselect(&mut self, id: TileId) -> bool {
        if let Some(tile) = self.tiles.get_mut(id) {
            tile.set_selected(false);
        }
        self.selection.remove(id)
    }

    /// Append selection and preview notifications after a mutation
    fn push_state_events(&mut self, selection_changed: bool, events: &mut Vec<GameEvent>) {
        if selection_changed {
            events.push(GameEvent::SelectionChanged {
                selection: self.selection.ids().to_vec(),
            });
        }
        let preview = self.evaluate_selection().map(|w| w.preview());
        if preview != self.preview {
            debug!(?preview, "preview changed");
            self.preview = preview.clone();
            events.push(GameEvent::PreviewChanged { preview });
        }
    }
}

/// Letter table equivalent to an explicit tile sequence, in first-seen order
fn layout_table(faces: &[TileFace]) -> Vec<LetterEntry> {
    let mut table: Vec<LetterEntry> = Vec::new();
    for face in faces {
        match table
            .iter_mut()
            .find(|e| e.letter == face.letter && e.value == face.value)
        {
            Some(entry) => entry.frequency += 1,
            None => table.push(LetterEntry::new(face.letter, face.value, 1)),
        }
    }
    table
}
