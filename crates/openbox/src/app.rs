//! Headless run: configure, populate, simulate, then write results

use std::path::PathBuf;

use anyhow::{Context, Result};
use openbox_core::Simulation;

use crate::config::AppConfig;
use crate::scenario::{ScenarioDefinition, ScenarioExecutor, ScenarioExecutorConfig};
use crate::scenes::Scene;
use crate::snapshot;

/// What a single headless run does, in order
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Config file; `openbox.ron` is tried when absent
    pub config_path: Option<PathBuf>,
    /// Overrides the configured seed
    pub seed: Option<u64>,
    /// Save file loaded before anything else
    pub load: Option<PathBuf>,
    /// Preset scene painted after loading
    pub scene: Option<Scene>,
    /// Scenario script run after the scene
    pub scenario: Option<PathBuf>,
    /// Extra ticks after the scenario
    pub ticks: u32,
    /// Save the final grid here
    pub save: Option<PathBuf>,
    /// Write a PNG of the final grid here
    pub snapshot: Option<PathBuf>,
}

/// Run once. Returns false when a scenario check failed.
pub fn run(options: &RunOptions) -> Result<bool> {
    let mut config = AppConfig::load(options.config_path.as_deref())?;
    if options.seed.is_some() {
        config.simulation.seed = options.seed;
    }

    let sim_config = config.sim_config();
    log::info!(
        "Grid {}x{}, brush {} ({}..={})",
        sim_config.grid_width,
        sim_config.grid_height,
        sim_config.brush_size,
        sim_config.min_brush_size,
        sim_config.max_brush_size
    );
    let mut sim = Simulation::new(sim_config).context("Failed to create simulation")?;

    if let Some(path) = &options.load {
        sim.load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
    }

    if let Some(scene) = options.scene {
        scene.apply(&mut sim);
    }

    let mut passed = true;
    if let Some(path) = &options.scenario {
        let scenario = ScenarioDefinition::from_file(path)?;
        let mut executor = ScenarioExecutor::with_config(ScenarioExecutorConfig {
            default_save_path: config.output.save_path.clone(),
            verbose: false,
        });
        let report = executor.execute_scenario(&scenario, &mut sim)?;

        log::info!("{}", report.summary());
        for failure in &report.verification_failures {
            log::warn!("  FAIL {}", failure.message);
        }
        passed = report.passed;
    }

    if options.ticks > 0 {
        for _ in 0..options.ticks {
            sim.step();
        }
        let stats = sim.last_stats();
        log::info!(
            "Ran {} ticks (last tick: {} moved, {} changed, {} reactions)",
            options.ticks,
            stats.cells_moved,
            stats.state_changes,
            stats.reactions
        );
    }

    if let Some(path) = &options.save {
        sim.save(path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
    }

    if let Some(path) = &options.snapshot {
        snapshot::save_snapshot(&sim, config.output.snapshot_scale, path)?;
    }

    log::info!(
        "Finished at tick {} with {} particles",
        sim.tick(),
        sim.particle_count()
    );
    Ok(passed)
}
