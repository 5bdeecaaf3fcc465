//! Chemical reactions, evaluated after interactions

use crate::simulation::{MaterialKind, Materials, SALT_WATER_COLOR};
use crate::world::{Grid, NEIGHBOR_OFFSETS, SimStats};

/// Sand above this fuses into glass
pub const GLASS_FORMING_TEMPERATURE: f32 = 1700.0;

/// Deterministic reactions between a cell and its neighborhood
pub struct ReactionSystem;

impl ReactionSystem {
    /// Apply the reactions of whatever occupies (x, y)
    pub fn apply(grid: &mut Grid, materials: &Materials, x: i32, y: i32, stats: &mut dyn SimStats) {
        let Some(kind) = grid.kind_at(x, y) else {
            return;
        };

        match kind {
            MaterialKind::Sand => Self::fuse_sand(grid, materials, x, y, stats),
            MaterialKind::Water => Self::dissolve_salt(grid, materials, x, y, stats),
            _ => {}
        }
    }

    fn fuse_sand(grid: &mut Grid, materials: &Materials, x: i32, y: i32, stats: &mut dyn SimStats) {
        if let Some(cell) = grid.get_mut(x, y)
            && cell.temperature > GLASS_FORMING_TEMPERATURE
        {
            cell.convert(MaterialKind::Glass, materials);
            stats.record_reaction();
        }
    }

    /// Each adjacent salt dissolves; the water keeps its kind but takes the brine tint
    fn dissolve_salt(
        grid: &mut Grid,
        materials: &Materials,
        x: i32,
        y: i32,
        stats: &mut dyn SimStats,
    ) {
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let dissolved = match grid.get_mut(x + dx, y + dy) {
                Some(neighbor) if neighbor.kind == MaterialKind::Salt => {
                    neighbor.convert(MaterialKind::Empty, materials);
                    true
                }
                _ => false,
            };

            if dissolved && let Some(water) = grid.get_mut(x, y) {
                water.color = SALT_WATER_COLOR;
                stats.record_reaction();
            }
        }
    }
}
