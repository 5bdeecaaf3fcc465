//! Cellular automata update logic - material movement physics

use super::grid::Grid;
use crate::simulation::{Materials, Spread};
use crate::world::{SimRng, SimStats};

/// Cellular automata updater - handles material movement physics
pub struct CellularAutomataUpdater;

impl CellularAutomataUpdater {
    /// Move the cell at (x, y) one step if it can
    ///
    /// Returns where the cell's content is after this tick's movement.
    pub fn update_movement(
        grid: &mut Grid,
        materials: &Materials,
        x: i32,
        y: i32,
        rng: &mut dyn SimRng,
        stats: &mut dyn SimStats,
    ) -> (i32, i32) {
        let Some(cell) = grid.get(x, y) else {
            return (x, y);
        };
        let props = materials.get(cell.kind);
        if !props.movable {
            return (x, y);
        }

        // Gravity first
        if Self::try_move(grid, x, y, x, y + 1, stats) {
            return (x, y + 1);
        }

        match props.spread {
            Spread::Lateral => Self::update_liquid(grid, x, y, rng, stats),
            Spread::Diagonal => Self::update_powder(grid, x, y, rng, stats),
            Spread::None => (x, y),
        }
    }

    /// Powder blocked below: slide diagonally down (random side first)
    fn update_powder(
        grid: &mut Grid,
        x: i32,
        y: i32,
        rng: &mut dyn SimRng,
        stats: &mut dyn SimStats,
    ) -> (i32, i32) {
        let dx = if rng.gen_bool() { -1 } else { 1 };
        if Self::try_move(grid, x, y, x + dx, y + 1, stats) {
            return (x + dx, y + 1);
        }

        // Try opposite diagonal
        if Self::try_move(grid, x, y, x - dx, y + 1, stats) {
            return (x - dx, y + 1);
        }

        (x, y)
    }

    /// Liquid blocked below: flow sideways (random side first)
    fn update_liquid(
        grid: &mut Grid,
        x: i32,
        y: i32,
        rng: &mut dyn SimRng,
        stats: &mut dyn SimStats,
    ) -> (i32, i32) {
        let dx = if rng.gen_bool() { -1 } else { 1 };
        if Self::try_move(grid, x, y, x + dx, y, stats) {
            return (x + dx, y);
        }

        // Try opposite direction
        if Self::try_move(grid, x, y, x - dx, y, stats) {
            return (x - dx, y);
        }

        (x, y)
    }

    /// Swap a cell into an empty in-bounds target
    /// Returns true if the move succeeded
    fn try_move(
        grid: &mut Grid,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
        stats: &mut dyn SimStats,
    ) -> bool {
        if !grid.is_empty_at(to_x, to_y) {
            return false;
        }

        if grid.swap(from_x, from_y, to_x, to_y).is_err() {
            return false;
        }
        stats.record_cell_moved();
        true
    }
}
