//! Material interactions: freezing, burning, lava quenching, acid
//!
//! Rules are looked up per material kind; adding a material with a behavior
//! means adding one arm to [`InteractionRules::rule_for`].

use crate::simulation::{MaterialKind, Materials};
use crate::world::{Grid, NEIGHBOR_OFFSETS, SimRng, SimStats};

/// Chance per tick that fire ignites one flammable neighbor
pub const IGNITION_CHANCE: f32 = 0.10;
/// Chance per tick that fire puts smoke in the cell above it
pub const SMOKE_CHANCE: f32 = 0.05;
/// Chance per tick that acid dissolves one neighbor
pub const DISSOLVE_CHANCE: f32 = 0.20;
/// Water below this becomes ice
pub const FREEZING_POINT: f32 = 0.0;
/// Lava below this becomes metal
pub const LAVA_SOLIDIFY_POINT: f32 = 800.0;

/// Signature shared by every interaction rule
pub type InteractionFn = fn(&mut Grid, &Materials, i32, i32, &mut dyn SimRng, &mut dyn SimStats);

/// Handles material-specific neighborhood interactions
pub struct InteractionRules;

impl InteractionRules {
    /// Interaction rule for a material, if it has one
    pub fn rule_for(kind: MaterialKind) -> Option<InteractionFn> {
        match kind {
            MaterialKind::Water => Some(Self::update_water),
            MaterialKind::Fire => Some(Self::update_fire),
            MaterialKind::Lava => Some(Self::update_lava),
            MaterialKind::Acid => Some(Self::update_acid),
            _ => None,
        }
    }

    /// Run the interaction rule of whatever occupies (x, y)
    pub fn apply(
        grid: &mut Grid,
        materials: &Materials,
        x: i32,
        y: i32,
        rng: &mut dyn SimRng,
        stats: &mut dyn SimStats,
    ) {
        let Some(kind) = grid.kind_at(x, y) else {
            return;
        };
        if let Some(rule) = Self::rule_for(kind) {
            rule(grid, materials, x, y, rng, stats);
        }
    }

    /// Water puts out fire around it and freezes below zero
    fn update_water(
        grid: &mut Grid,
        materials: &Materials,
        x: i32,
        y: i32,
        _rng: &mut dyn SimRng,
        stats: &mut dyn SimStats,
    ) {
        for (dx, dy) in NEIGHBOR_OFFSETS {
            if let Some(neighbor) = grid.get_mut(x + dx, y + dy)
                && neighbor.kind == MaterialKind::Fire
            {
                neighbor.convert(MaterialKind::Steam, materials);
                stats.record_state_change();
            }
        }

        if let Some(cell) = grid.get_mut(x, y)
            && cell.temperature < FREEZING_POINT
        {
            cell.convert(MaterialKind::Ice, materials);
            stats.record_state_change();
        }
    }

    /// Fire spreads to flammable neighbors and gives off smoke
    fn update_fire(
        grid: &mut Grid,
        materials: &Materials,
        x: i32,
        y: i32,
        rng: &mut dyn SimRng,
        stats: &mut dyn SimStats,
    ) {
        for (dx, dy) in NEIGHBOR_OFFSETS {
            if let Some(neighbor) = grid.get_mut(x + dx, y + dy)
                && materials.get(neighbor.kind).flammable
                && rng.check_probability(IGNITION_CHANCE)
            {
                neighbor.convert(MaterialKind::Fire, materials);
                stats.record_state_change();
            }
        }

        if rng.check_probability(SMOKE_CHANCE)
            && let Some(above) = grid.get_mut(x, y - 1)
            && above.is_empty()
        {
            above.convert(MaterialKind::Smoke, materials);
            stats.record_state_change();
        }
    }

    /// Lava boils neighboring water and solidifies once cooled
    fn update_lava(
        grid: &mut Grid,
        materials: &Materials,
        x: i32,
        y: i32,
        _rng: &mut dyn SimRng,
        stats: &mut dyn SimStats,
    ) {
        for (dx, dy) in NEIGHBOR_OFFSETS {
            if let Some(neighbor) = grid.get_mut(x + dx, y + dy)
                && neighbor.kind == MaterialKind::Water
            {
                neighbor.convert(MaterialKind::Steam, materials);
                stats.record_state_change();
            }
        }

        if let Some(cell) = grid.get_mut(x, y)
            && cell.temperature < LAVA_SOLIDIFY_POINT
        {
            cell.convert(MaterialKind::Metal, materials);
            stats.record_state_change();
        }
    }

    /// Acid dissolves anything except empty space, acid and glass
    fn update_acid(
        grid: &mut Grid,
        materials: &Materials,
        x: i32,
        y: i32,
        rng: &mut dyn SimRng,
        stats: &mut dyn SimStats,
    ) {
        for (dx, dy) in NEIGHBOR_OFFSETS {
            if let Some(neighbor) = grid.get_mut(x + dx, y + dy)
                && !matches!(
                    neighbor.kind,
                    MaterialKind::Empty | MaterialKind::Acid | MaterialKind::Glass
                )
                && rng.check_probability(DISSOLVE_CHANCE)
            {
                neighbor.convert(MaterialKind::Empty, materials);
                stats.record_state_change();
            }
        }
    }
}
