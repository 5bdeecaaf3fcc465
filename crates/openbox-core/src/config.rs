//! Simulation configuration

use serde::{Deserialize, Serialize};

/// Settings the simulation core needs at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Grid width in cells
    pub grid_width: i32,
    /// Grid height in cells
    pub grid_height: i32,
    /// Initial brush radius
    pub brush_size: i32,
    pub min_brush_size: i32,
    pub max_brush_size: i32,
    /// Fixed RNG seed for deterministic replay; entropy when unset
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        // 1280x720 window with 8-pixel cells
        Self::from_screen(1280, 720, 8)
    }
}

impl SimConfig {
    /// Grid sized to fill a window of `cell_size`-pixel cells
    pub fn from_screen(screen_width: u32, screen_height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        Self {
            grid_width: (screen_width / cell_size) as i32,
            grid_height: (screen_height / cell_size) as i32,
            brush_size: 3,
            min_brush_size: 1,
            max_brush_size: 20,
            seed: None,
        }
    }

    /// Clamp a requested brush radius to the configured bounds
    pub fn clamp_brush_size(&self, size: i32) -> i32 {
        size.clamp(self.min_brush_size, self.max_brush_size.max(self.min_brush_size))
    }
}
