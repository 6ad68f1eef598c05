//! Grid tests - bounds, occupancy, the hole, and segment containment

use wordsearch::core::{space_between, Grid};
use wordsearch::types::{Coord, TileId, DEFAULT_GRID_SIZE};

fn c(r: i32, col: i32) -> Coord {
    Coord::new(r, col)
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(DEFAULT_GRID_SIZE);
    assert_eq!(grid.size(), 10);

    // All cells should be empty
    for r in 0..10 {
        for col in 0..10 {
            assert!(grid.is_empty(c(r, col)), "Cell ({}, {}) should be empty", r, col);
            assert_eq!(grid.get(c(r, col)), Some(None));
        }
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(10);

    // Negative coordinates
    assert_eq!(grid.get(c(-1, 0)), None);
    assert_eq!(grid.get(c(0, -1)), None);

    // Beyond bounds
    assert_eq!(grid.get(c(10, 0)), None);
    assert_eq!(grid.get(c(0, 10)), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(10);

    assert!(grid.set(c(5, 7), Some(TileId(3))));
    assert_eq!(grid.get(c(5, 7)), Some(Some(TileId(3))));
    assert_eq!(grid.occupant(c(5, 7)), Some(TileId(3)));

    // Clear a cell
    assert!(grid.set(c(5, 7), None));
    assert_eq!(grid.get(c(5, 7)), Some(None));
    assert_eq!(grid.occupant(c(5, 7)), None);
}

#[test]
fn test_grid_set_out_of_bounds() {
    let mut grid = Grid::new(10);

    assert!(!grid.set(c(-1, 0), Some(TileId(0))));
    assert!(!grid.set(c(0, -1), Some(TileId(0))));
    assert!(!grid.set(c(10, 0), Some(TileId(0))));
    assert!(!grid.set(c(0, 10), Some(TileId(0))));
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_grid_is_empty_and_occupied() {
    let mut grid = Grid::new(10);
    assert!(!grid.is_occupied(c(2, 2)));

    grid.set(c(2, 2), Some(TileId(1)));
    assert!(grid.is_occupied(c(2, 2)));
    assert!(!grid.is_empty(c(2, 2)));

    // Out of bounds is neither
    assert!(!grid.is_occupied(c(-1, 0)));
    assert!(!grid.is_empty(c(-1, 0)));
}

#[test]
fn test_grid_hole_and_deal_order() {
    let grid = Grid::new(10);
    for at in [c(4, 4), c(4, 5), c(5, 4), c(5, 5)] {
        assert!(grid.is_hole(at));
    }
    for at in [c(3, 4), c(4, 3), c(6, 5), c(5, 6), c(0, 0)] {
        assert!(!grid.is_hole(at));
    }

    let order: Vec<Coord> = grid.deal_order().collect();
    assert_eq!(order.len(), 10 * 10 - 4);
    assert!(order.iter().all(|&at| !grid.is_hole(at)));
    assert_eq!(order.first(), Some(&c(0, 0)));
    assert_eq!(order.last(), Some(&c(9, 9)));
}

#[test]
fn test_grid_occupied_count() {
    let mut grid = Grid::new(4);
    grid.set(c(0, 0), Some(TileId(0)));
    grid.set(c(3, 3), Some(TileId(1)));
    assert_eq!(grid.occupied_count(), 2);
    assert_eq!(grid.occupiable_cells(), 12);

    grid.set(c(0, 0), None);
    assert_eq!(grid.occupied_count(), 1);
    assert_eq!(grid.cells().iter().filter(|cell| cell.is_some()).count(), 1);
}

#[test]
fn test_space_between() {
    assert!(space_between(c(0, 1), c(4, 5), c(1, 2)));
    assert!(space_between(c(0, 1), c(0, 8), c(0, 4)));
    assert!(!space_between(c(1, 1), c(2, 2), c(0, 0)));
}

#[test]
fn test_space_between_vertical_and_reversed() {
    assert!(space_between(c(7, 3), c(2, 3), c(4, 3)));
    assert!(!space_between(c(7, 3), c(2, 3), c(1, 3)));
    assert!(!space_between(c(7, 3), c(2, 3), c(4, 4)));
}
