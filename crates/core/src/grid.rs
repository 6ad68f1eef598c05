//! Grid module - the square playfield
//!
//! The grid is an N x N array of cells where each cell is empty or holds a tile id.
//! Uses a flat vector in row-major order; N is fixed for the lifetime of a session.
//! Coordinates: (r, c) where both range over 0..N, row 0 at the top.
//! The central 2x2 block is the hole: it is never dealt onto.

use crate::types::{Cell, Coord, TileId, HOLE_SIZE};

/// The playfield - N x N cells using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Flat vector of cells, row-major order (r * size + c)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid of the given side length
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, at: Coord) -> Option<usize> {
        if !self.in_bounds(at) {
            return None;
        }
        Some(at.r as usize * self.size + at.c as usize)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, at: Coord) -> bool {
        let n = self.size as i32;
        at.r >= 0 && at.r < n && at.c >= 0 && at.c < n
    }

    /// Get cell at a coordinate
    /// Returns None if out of bounds
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.index(at).map(|idx| self.cells[idx])
    }

    /// Set cell at a coordinate
    /// Returns false if out of bounds
    pub fn set(&mut self, at: Coord, cell: Cell) -> bool {
        match self.index(at) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Tile occupying a coordinate, if any
    pub fn occupant(&self, at: Coord) -> Option<TileId> {
        self.get(at).flatten()
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(Some(_)))
    }

    /// Whether the coordinate belongs to the central hole
    pub fn is_hole(&self, at: Coord) -> bool {
        if !self.in_bounds(at) {
            return false;
        }
        let lo = (self.size.saturating_sub(HOLE_SIZE) / 2) as i32;
        let hi = lo + HOLE_SIZE as i32;
        (lo..hi).contains(&at.r) && (lo..hi).contains(&at.c)
    }

    /// Cells tiles may be dealt onto, in row-major scan order (hole skipped)
    pub fn deal_order(&self) -> impl Iterator<Item = Coord> + '_ {
        let n = self.size as i32;
        (0..n)
            .flat_map(move |r| (0..n).map(move |c| Coord::new(r, c)))
            .filter(move |&at| !self.is_hole(at))
    }

    /// Number of cells outside the hole
    pub fn occupiable_cells(&self) -> usize {
        self.size
            .saturating_mul(self.size)
            .saturating_sub(crate::types::HOLE_CELLS)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// True iff `p` lies on the segment from `s1` to `s2`, endpoints included.
///
/// The cross product settles colinearity for any slope; the two independent
/// range checks then confine `p` to the segment.
pub fn space_between(s1: Coord, s2: Coord, p: Coord) -> bool {
    let cross = (s1.r - s2.r) * (s1.c - p.c) - (s1.c - s2.c) * (s1.r - p.r);
    if cross != 0 {
        return false;
    }
    let within = |v: i32, a: i32, b: i32| a.min(b) <= v && v <= a.max(b);
    within(p.r, s1.r, s2.r) && within(p.c, s1.c, s2.c)
}
