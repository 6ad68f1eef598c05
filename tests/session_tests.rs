//! Integration tests for full turns: move, preview, commit, reset

use wordsearch::core::{CommitError, ConfigError, GameConfig, GameSession, LetterEntry, MoveError, TileFace};
use wordsearch::types::{Coord, GameEvent, Letter, TileId, WordPreview};

/// 10x10 layout of `E`s with `C T A` at (3,3), (3,4), (3,5)
fn cat_game() -> GameSession {
    init_tracing();
    let mut faces = vec![TileFace::new(Letter::Char('E'), 1); 96];
    faces[33] = TileFace::new(Letter::Char('C'), 3);
    faces[34] = TileFace::new(Letter::Char('T'), 1);
    faces[35] = TileFace::new(Letter::Char('A'), 1);
    GameSession::from_tiles(&GameConfig::default(), faces).expect("layout fills the grid")
}

/// Route engine logs to the test harness; `RUST_LOG=debug` shows them
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn id_at(game: &GameSession, r: i32, c: i32) -> TileId {
    game.tile_at(Coord::new(r, c)).unwrap().id()
}

#[test]
fn test_layout_places_letters_in_scan_order() {
    let game = cat_game();
    let letter = |r, c| game.tile_at(Coord::new(r, c)).unwrap().letter();
    assert_eq!(letter(3, 3), Letter::Char('C'));
    assert_eq!(letter(3, 4), Letter::Char('T'));
    assert_eq!(letter(3, 5), Letter::Char('A'));
    assert_eq!(letter(4, 6), Letter::Char('E'));
}

#[test]
fn test_vertical_word_commit() {
    let mut game = cat_game();
    let t = id_at(&game, 3, 4);
    let c = id_at(&game, 3, 3);
    let a = id_at(&game, 3, 5);

    // T drops to the bottom of the hole, C slides into T's origin, A dives
    // diagonally into the top of the hole: a column C, A, T.
    game.move_tile(t, Coord::new(5, 4)).unwrap();
    game.move_tile(c, Coord::new(3, 4)).unwrap();
    let events = game.move_tile(a, Coord::new(4, 4)).unwrap();

    let preview = WordPreview {
        word: "CAT".into(),
        score: 15,
    };
    assert_eq!(events.last(), Some(&GameEvent::PreviewChanged {
        preview: Some(preview.clone())
    }));
    assert_eq!(game.preview(), Some(&preview));

    let word = game.evaluate_selection().unwrap();
    assert_eq!(word.text(), "CAT");
    assert_eq!(word.tiles(), &[c, a, t]);

    let commit = game.commit_word().unwrap();
    assert_eq!(commit.total, 15);
    assert_eq!(game.total(), 15);
    assert_eq!(game.remaining_tiles(), 93);
    assert!(game.selection().is_empty());
    for at in [(3, 3), (3, 4), (3, 5), (4, 4), (5, 4)] {
        assert!(game.tile_at(Coord::new(at.0, at.1)).is_none());
    }
    assert!(commit
        .events
        .contains(&GameEvent::TilesRemoved { tiles: vec![t, c, a] }));
}

#[test]
fn test_second_commit_is_rejected() {
    let mut game = cat_game();
    let t = id_at(&game, 3, 4);
    let c = id_at(&game, 3, 3);
    game.move_tile(t, Coord::new(5, 4)).unwrap();
    game.move_tile(c, Coord::new(4, 4)).unwrap();

    // C at (4,4) above T at (5,4): "CT"
    let first = game.commit_word().unwrap();
    assert_eq!(first.word.text(), "CT");
    assert_eq!(first.total, (3 + 1) * 2);

    let before = game.snapshot();
    assert_eq!(game.commit_word().unwrap_err(), CommitError::NoCurrentWord);
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.total(), 8);
}

#[test]
fn test_bent_selection_is_not_a_word() {
    let mut game = cat_game();
    let nw = id_at(&game, 3, 3);
    let ne = id_at(&game, 3, 5);
    let w = id_at(&game, 4, 3);

    game.move_tile(nw, Coord::new(4, 4)).unwrap();
    game.move_tile(ne, Coord::new(4, 5)).unwrap();
    game.move_tile(w, Coord::new(5, 4)).unwrap();

    assert_eq!(game.selection().len(), 3);
    assert!(game.evaluate_selection().is_none());
    assert_eq!(game.preview(), None);
    assert_eq!(game.commit_word().unwrap_err(), CommitError::NoCurrentWord);
    assert_eq!(game.remaining_tiles(), 96);
}

#[test]
fn test_reset_restores_fresh_legal_spaces() {
    let fresh = cat_game();
    let mut game = cat_game();

    let t = id_at(&game, 3, 4);
    let c = id_at(&game, 3, 3);
    let a = id_at(&game, 3, 5);
    game.move_tile(t, Coord::new(5, 4)).unwrap();
    game.move_tile(c, Coord::new(3, 4)).unwrap();
    game.move_tile(a, Coord::new(4, 4)).unwrap();

    let events = game.reset_selection();
    assert!(events.contains(&GameEvent::SelectionChanged { selection: vec![] }));
    assert!(events.contains(&GameEvent::PreviewChanged { preview: None }));

    for tile in fresh.tiles() {
        assert_eq!(
            game.legal_spaces(tile.id()),
            fresh.legal_spaces(tile.id()),
            "tile {} differs after reset",
            tile.id()
        );
    }
    assert_eq!(game.snapshot(), fresh.snapshot());
}

#[test]
fn test_move_back_home_clears_selection() {
    let mut game = cat_game();
    let t = id_at(&game, 3, 4);
    game.move_tile(t, Coord::new(4, 4)).unwrap();
    assert!(game.tile(t).unwrap().selected());

    let events = game.move_tile(t, Coord::new(3, 4)).unwrap();
    assert!(events.contains(&GameEvent::SelectionChanged { selection: vec![] }));
    assert!(!game.tile(t).unwrap().selected());
}

#[test]
fn test_rejected_moves() {
    let mut game = cat_game();
    let far = id_at(&game, 0, 0);

    let err = game.move_tile(far, Coord::new(1, 1)).unwrap_err();
    assert_eq!(err.code(), "not_legal_destination");

    let t = id_at(&game, 3, 4);
    let err = game.move_tile(t, Coord::new(20, 20)).unwrap_err();
    assert!(matches!(err, MoveError::NotLegalDestination { .. }));

    // Moving onto the current cell is a no-op.
    game.move_tile(t, Coord::new(4, 4)).unwrap();
    assert!(game.move_tile(t, Coord::new(4, 4)).unwrap().is_empty());
}

#[test]
fn test_selected_tile_slides_past_its_own_cell() {
    let mut game = cat_game();
    let t = id_at(&game, 3, 4);
    game.move_tile(t, Coord::new(4, 4)).unwrap();

    // Rays start at the origin, so the tile's own cell does not block it.
    assert!(game.legal_spaces(t).contains(&Coord::new(5, 4)));
    let events = game.move_tile(t, Coord::new(5, 4)).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::TileMoved {
            tile: t,
            from: Coord::new(4, 4),
            to: Coord::new(5, 4)
        }]
    );
}

#[test]
fn test_clock_seeded_deal() {
    let game = GameSession::deal_new_game(&GameConfig::default()).unwrap();
    assert_eq!(game.remaining_tiles(), 96);
    assert!(game.seed().is_some());
}

#[test]
fn test_bad_config_cannot_deal() {
    let mut config = GameConfig::default();
    config.letters.pop();
    assert!(GameSession::deal(&config, 1).is_err());

    config = GameConfig::default();
    config.grid_size = 11;
    assert!(GameSession::deal_new_game(&config).is_err());
}

#[test]
fn test_oversized_grid_cannot_deal() {
    let faces = 258 * 258 - 4;
    let config = GameConfig::new(258, vec![LetterEntry::new(Letter::Char('A'), 1, faces)]);
    assert!(matches!(
        GameSession::deal(&config, 1),
        Err(ConfigError::GridTooLarge { size: 258, .. })
    ));

    let layout = vec![TileFace::new(Letter::Char('A'), 1); faces as usize];
    assert!(matches!(
        GameSession::from_tiles(&config, layout),
        Err(ConfigError::GridTooLarge { .. })
    ));
}
