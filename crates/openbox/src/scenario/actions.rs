//! Scenario actions, one per shell command

use std::path::PathBuf;

use openbox_core::simulation::MaterialKind;
use serde::{Deserialize, Serialize};

/// A single scripted command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScenarioAction {
    // === PAINTING ===
    /// Paint with the current brush
    Paint { x: i32, y: i32, material: MaterialKind },

    /// Paint the selected material with the current brush
    PaintSelected { x: i32, y: i32 },

    /// Erase with the current brush
    Erase { x: i32, y: i32 },

    /// Choose the material for `PaintSelected`
    SelectMaterial { material: MaterialKind },

    /// Choose the material by number key (1-9)
    SelectHotkey { key: u8 },

    /// Set the brush radius (clamped to the configured bounds)
    SetBrushSize { size: i32 },

    // === SIMULATION CONTROL ===
    Pause,
    Resume,
    TogglePause,

    /// Clear the grid back to walls only
    Reset,

    /// Reset and paint a preset scene
    LoadScene { scene: String },

    /// Mirror painting across the vertical midline
    ToggleSymmetry,

    /// Store a wind vector
    SetWind { x: f32, y: f32 },

    /// Advance ticks regardless of pause state
    Step { ticks: u32 },

    /// Run frames; each ticks only while not paused
    Update { frames: u32 },

    // === FILES ===
    /// Save the grid; uses the configured save path when `path` is None
    Save { path: Option<PathBuf> },

    /// Load the grid; uses the configured save path when `path` is None
    Load { path: Option<PathBuf> },

    // === UTILITY ===
    Log { message: String },
}
