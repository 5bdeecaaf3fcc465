//! Temperature simulation
//!
//! Each visited cell blends towards the mean temperature of its 3x3
//! neighborhood, then takes a fixed cooling step towards ambient. Cells are
//! updated in place, so a cell sees the new temperatures of neighbors that
//! were visited earlier in the same tick.

use crate::simulation::AMBIENT_TEMPERATURE;
use crate::world::{Grid, NeighborQueries};

/// Weight of the neighborhood mean in the blend
pub const TEMPERATURE_SPREAD: f32 = 0.2;

/// Fixed step towards ambient applied after blending
pub const COOLING_RATE: f32 = 0.05;

/// Heat diffusion for single cells
pub struct TemperatureSimulator;

impl TemperatureSimulator {
    /// Diffuse heat into the cell at (x, y)
    pub fn diffuse_cell(grid: &mut Grid, x: i32, y: i32) {
        let Some(current) = grid.get(x, y).map(|c| c.temperature) else {
            return;
        };

        // Own temperature counts once, plus every in-bounds neighbor
        let mut sum = current;
        let mut count = 1;
        for (nx, ny) in NeighborQueries::neighbors(grid, x, y) {
            if let Some(neighbor) = grid.get(nx, ny) {
                sum += neighbor.temperature;
                count += 1;
            }
        }

        let mean = sum / count as f32;
        let blended = mean * TEMPERATURE_SPREAD + current * (1.0 - TEMPERATURE_SPREAD);

        if let Some(cell) = grid.get_mut(x, y) {
            cell.temperature = Self::cool_towards_ambient(blended);
        }
    }

    /// One cooling step towards ambient, without clamping
    pub fn cool_towards_ambient(temperature: f32) -> f32 {
        if temperature > AMBIENT_TEMPERATURE {
            temperature - COOLING_RATE
        } else if temperature < AMBIENT_TEMPERATURE {
            temperature + COOLING_RATE
        } else {
            temperature
        }
    }
}
