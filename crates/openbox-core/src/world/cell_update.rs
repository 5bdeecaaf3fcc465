//! Per-cell update pipeline

use super::ca_update::CellularAutomataUpdater;
use super::grid::Grid;
use crate::simulation::{
    InteractionRules, MaterialKind, Materials, ReactionSystem, TemperatureSimulator,
};
use crate::world::{SimRng, SimStats};

/// Runs the full update pipeline for one grid position
pub struct CellUpdater;

impl CellUpdater {
    /// Update the cell at (x, y) unless it was already visited this tick
    ///
    /// Stages run in order: lifetime decay, movement, heat diffusion,
    /// interactions, reactions. Stages after movement act on the position the
    /// particle moved to.
    pub fn update_cell(
        grid: &mut Grid,
        materials: &Materials,
        x: i32,
        y: i32,
        rng: &mut dyn SimRng,
        stats: &mut dyn SimStats,
    ) {
        let Some(cell) = grid.get_mut(x, y) else {
            return;
        };
        if cell.processed {
            return;
        }
        // Marked before any swap, so the flag travels with the particle
        cell.processed = true;

        if cell.lifetime > 0 {
            cell.lifetime -= 1;
        }
        if cell.lifetime == 0 {
            cell.convert(MaterialKind::Empty, materials);
            stats.record_state_change();
            return;
        }

        let (x, y) = CellularAutomataUpdater::update_movement(grid, materials, x, y, rng, stats);

        TemperatureSimulator::diffuse_cell(grid, x, y);
        InteractionRules::apply(grid, materials, x, y, rng, stats);
        ReactionSystem::apply(grid, materials, x, y, stats);
    }
}
