//! Application configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `openbox.ron` in the working directory (if it exists), or the file
//!    given with `--config`
//! 3. Environment variables prefixed with `OPENBOX_`
//!
//! Example environment variable: `OPENBOX_SIMULATION__GRID_WIDTH=200`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use openbox_core::SimConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimulationSection,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Simulation settings; a grid size of 0 means "fill the window"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    pub grid_width: i32,
    pub grid_height: i32,
    pub brush_size: i32,
    pub min_brush_size: i32,
    pub max_brush_size: i32,
    pub seed: Option<u64>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        let sim = SimConfig::default();
        Self {
            grid_width: 0,
            grid_height: 0,
            brush_size: sim.brush_size,
            min_brush_size: sim.min_brush_size,
            max_brush_size: sim.max_brush_size,
            seed: None,
        }
    }
}

/// Window the grid is sized against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in pixels
    pub screen_width: u32,
    /// Window height in pixels
    pub screen_height: u32,
    /// Side of one cell in pixels
    pub cell_size: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            cell_size: 8,
        }
    }
}

/// Where results are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Save file used when no explicit path is given
    pub save_path: PathBuf,
    /// Pixels per cell in PNG snapshots
    pub snapshot_scale: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("sandbox_save.dat"),
            snapshot_scale: 8,
        }
    }
}

impl AppConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `path` if given (must exist), otherwise `openbox.ron` (optional)
    /// 3. Environment variables prefixed with `OPENBOX_` (highest priority)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("openbox")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("simulation.grid_width", 0_i64)?
            .set_default("simulation.grid_height", 0_i64)?
            .set_default("simulation.brush_size", 3_i64)?
            .set_default("simulation.min_brush_size", 1_i64)?
            .set_default("simulation.max_brush_size", 20_i64)?
            .set_default("window.screen_width", 1280_i64)?
            .set_default("window.screen_height", 720_i64)?
            .set_default("window.cell_size", 8_i64)?
            .set_default("output.save_path", "sandbox_save.dat")?
            .set_default("output.snapshot_scale", 8_i64)?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (OPENBOX_WINDOW__CELL_SIZE, etc.)
            .add_source(Environment::with_prefix("OPENBOX").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Simulation settings with the grid size resolved against the window
    pub fn sim_config(&self) -> SimConfig {
        let from_window = SimConfig::from_screen(
            self.window.screen_width,
            self.window.screen_height,
            self.window.cell_size,
        );
        let section = &self.simulation;

        SimConfig {
            grid_width: if section.grid_width > 0 {
                section.grid_width
            } else {
                from_window.grid_width
            },
            grid_height: if section.grid_height > 0 {
                section.grid_height
            } else {
                from_window.grid_height
            },
            brush_size: section.brush_size,
            min_brush_size: section.min_brush_size,
            max_brush_size: section.max_brush_size,
            seed: section.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.screen_width, 1280);
        assert_eq!(config.window.cell_size, 8);
        assert_eq!(config.output.save_path, PathBuf::from("sandbox_save.dat"));
        assert_eq!(config.simulation.brush_size, 3);
    }

    #[test]
    fn test_default_grid_fills_window() {
        let sim = AppConfig::default().sim_config();
        assert_eq!((sim.grid_width, sim.grid_height), (160, 90));
        assert_eq!((sim.min_brush_size, sim.max_brush_size), (1, 20));
    }

    #[test]
    fn test_explicit_grid_size_wins() {
        let mut config = AppConfig::default();
        config.simulation.grid_width = 64;
        config.window.cell_size = 4;

        let sim = config.sim_config();

        assert_eq!(sim.grid_width, 64);
        assert_eq!(sim.grid_height, 180);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ron");
        std::fs::write(
            &path,
            "(window: (screen_width: 400, screen_height: 300, cell_size: 10), simulation: (seed: Some(7)))",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).expect("Failed to load config");

        assert_eq!(config.window.screen_width, 400);
        assert_eq!(config.simulation.seed, Some(7));
        // Untouched sections keep their defaults
        assert_eq!(config.output.snapshot_scale, 8);
        let sim = config.sim_config();
        assert_eq!((sim.grid_width, sim.grid_height), (40, 30));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("nope.ron"))).is_err());
    }
}
