//! Move validation - where may a tile go?
//!
//! Destinations are always measured from the tile's origin, never from its
//! current cell:
//!
//! 1. The origin itself, when it is empty and no other selected tile's path
//!    (the segment from that tile's origin to its current cell) runs through it.
//! 2. Along each of the 8 directions, every cell up to (not including) the
//!    first cell held by a different tile. A cell held by the tile itself does
//!    not block.
//!
//! The result lists the origin first, then ray cells in [`Direction::ALL`]
//! order by increasing distance.

use crate::grid::{space_between, Grid};
use crate::selection::Selection;
use crate::tile::{Tile, TileSet};
use crate::types::{Coord, Direction};

/// Legal destinations for `tile`, in deterministic order
pub fn legal_spaces(grid: &Grid, tiles: &TileSet, selection: &Selection, tile: &Tile) -> Vec<Coord> {
    let origin = tile.origin();
    let mut spaces = Vec::new();

    if origin_is_free(grid, tiles, selection, tile) {
        spaces.push(origin);
    }

    for direction in Direction::ALL {
        scan_ray(grid, tile, direction, &mut spaces);
    }

    spaces
}

/// Whether `tile` may return to its origin
pub fn origin_is_free(grid: &Grid, tiles: &TileSet, selection: &Selection, tile: &Tile) -> bool {
    let origin = tile.origin();
    if !grid.is_empty(origin) {
        return false;
    }
    let crossed = selection
        .iter()
        .filter(|&id| id != tile.id())
        .filter_map(|id| tiles.get(id))
        .filter_map(|other| other.current().map(|at| (other.origin(), at)))
        .any(|(from, to)| space_between(from, to, origin));
    !crossed
}

fn scan_ray(grid: &Grid, tile: &Tile, direction: Direction, out: &mut Vec<Coord>) {
    let origin = tile.origin();
    let mut distance = 1;
    loop {
        let at = origin.step(direction, distance);
        if !grid.in_bounds(at) || at == origin {
            return;
        }
        match grid.occupant(at) {
            Some(id) if id != tile.id() => return,
            _ => out.push(at),
        }
        distance += 1;
    }
}
