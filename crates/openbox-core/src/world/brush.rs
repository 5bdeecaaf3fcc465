//! Disc brush for stamping materials onto the grid

use super::grid::Grid;
use super::neighbor_queries::NeighborQueries;
use crate::simulation::{Cell, MaterialKind, Materials};

/// Stamps a fresh material instance over a disc of cells
pub struct Brush;

impl Brush {
    /// Overwrite every in-bounds cell within `radius` of the center
    ///
    /// Does nothing when the center itself is out of bounds. Returns the
    /// number of cells written.
    pub fn paint(
        grid: &mut Grid,
        materials: &Materials,
        center_x: i32,
        center_y: i32,
        kind: MaterialKind,
        radius: i32,
    ) -> usize {
        if !grid.in_bounds(center_x, center_y) {
            log::debug!(
                "Brush center ({}, {}) outside grid, ignoring",
                center_x,
                center_y
            );
            return 0;
        }

        let fresh = Cell::new(kind, materials);
        let positions = NeighborQueries::cells_in_radius(grid, center_x, center_y, radius.max(0));
        for &(x, y) in &positions {
            if let Some(cell) = grid.get_mut(x, y) {
                *cell = fresh;
            }
        }

        positions.len()
    }

    /// Paint with Empty
    pub fn erase(
        grid: &mut Grid,
        materials: &Materials,
        center_x: i32,
        center_y: i32,
        radius: i32,
    ) -> usize {
        Self::paint(grid, materials, center_x, center_y, MaterialKind::Empty, radius)
    }

    /// Column mirrored across the vertical midline
    pub fn mirror_x(grid: &Grid, x: i32) -> i32 {
        grid.width() - 1 - x
    }
}
