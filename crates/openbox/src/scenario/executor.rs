//! Scenario execution engine

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::Vec2;
use openbox_core::Simulation;
use web_time::Instant;

use super::actions::ScenarioAction;
use super::definition::ScenarioDefinition;
use super::results::ExecutionReport;
use crate::scenes::Scene;

/// Configuration for scenario executor
#[derive(Debug, Clone)]
pub struct ScenarioExecutorConfig {
    /// Save file used by `Save`/`Load` actions without a path
    pub default_save_path: PathBuf,

    /// Log every action before running it
    pub verbose: bool,
}

impl Default for ScenarioExecutorConfig {
    fn default() -> Self {
        Self {
            default_save_path: PathBuf::from("sandbox_save.dat"),
            verbose: false,
        }
    }
}

/// Executes scenario actions against a simulation
pub struct ScenarioExecutor {
    /// Configuration
    config: ScenarioExecutorConfig,

    /// Action execution log
    log: Vec<String>,

    /// Ticks run by this scenario
    ticks: u64,
}

impl ScenarioExecutor {
    /// Create new executor with default config
    pub fn new() -> Self {
        Self::with_config(ScenarioExecutorConfig::default())
    }

    /// Create new executor with custom config
    pub fn with_config(config: ScenarioExecutorConfig) -> Self {
        Self {
            config,
            log: Vec::new(),
            ticks: 0,
        }
    }

    /// Execute a complete scenario
    ///
    /// Errors only when an action cannot run at all (e.g. unknown scene).
    /// Failed checks are reported in the returned report.
    pub fn execute_scenario(
        &mut self,
        scenario: &ScenarioDefinition,
        sim: &mut Simulation,
    ) -> Result<ExecutionReport> {
        let start_time = Instant::now();
        let mut report = ExecutionReport::new(scenario.name.clone());

        self.log.clear();
        self.ticks = 0;

        self.log(&format!("Starting scenario: {}", scenario.name));
        if !scenario.description.is_empty() {
            self.log(&format!("Description: {}", scenario.description));
        }

        if !scenario.setup.is_empty() {
            self.log(&format!("Running {} setup actions", scenario.setup.len()));
            for (idx, action) in scenario.setup.iter().enumerate() {
                self.execute_action(action, sim)
                    .with_context(|| format!("Setup action {} failed", idx))?;
            }
        }

        self.log(&format!("Running {} main actions", scenario.actions.len()));
        for (idx, action) in scenario.actions.iter().enumerate() {
            self.execute_action(action, sim)
                .with_context(|| format!("Action {} failed", idx))?;
        }
        report.actions_executed = scenario.setup.len() + scenario.actions.len();

        if !scenario.verify.is_empty() {
            self.log(&format!("Running {} verifications", scenario.verify.len()));
            for condition in &scenario.verify {
                let result = condition.evaluate(sim);
                self.log(&format!(
                    "  {} {}",
                    if result.passed { "PASS" } else { "FAIL" },
                    result.message
                ));

                if !result.passed {
                    report.verification_failures.push(result);
                }
            }
        }

        report.passed = report.success();
        report.ticks_executed = self.ticks;
        report.duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

        self.log(&format!(
            "Scenario complete: {} ({} ticks, {:.1}ms)",
            if report.passed { "PASSED" } else { "FAILED" },
            self.ticks,
            report.duration_ms
        ));
        report.log = self.log.clone();

        Ok(report)
    }

    /// Execute a single action
    pub fn execute_action(&mut self, action: &ScenarioAction, sim: &mut Simulation) -> Result<()> {
        if self.config.verbose {
            self.log(&format!("[Tick {}] {:?}", sim.tick(), action));
        }

        match action {
            ScenarioAction::Paint { x, y, material } => {
                let painted = sim.paint(*x, *y, *material);
                self.log(&format!("  Painted {} at ({}, {}): {} cells", material, x, y, painted));
            }

            ScenarioAction::PaintSelected { x, y } => {
                let painted = sim.paint_selected(*x, *y);
                self.log(&format!(
                    "  Painted {} at ({}, {}): {} cells",
                    sim.selected_material(),
                    x,
                    y,
                    painted
                ));
            }

            ScenarioAction::Erase { x, y } => {
                let erased = sim.erase(*x, *y);
                self.log(&format!("  Erased at ({}, {}): {} cells", x, y, erased));
            }

            ScenarioAction::SelectMaterial { material } => {
                sim.select_material(*material);
            }

            ScenarioAction::SelectHotkey { key } => {
                if !sim.select_hotkey(*key) {
                    self.log(&format!("  Key {} selects nothing", key));
                }
            }

            ScenarioAction::SetBrushSize { size } => {
                sim.set_brush_size(*size);
                self.log(&format!("  Brush size {}", sim.brush_size()));
            }

            ScenarioAction::Pause => sim.pause(),
            ScenarioAction::Resume => sim.resume(),
            ScenarioAction::TogglePause => sim.toggle_pause(),

            ScenarioAction::Reset => {
                sim.reset();
                self.log("  World reset");
            }

            ScenarioAction::LoadScene { scene } => {
                let scene: Scene = scene.parse().map_err(anyhow::Error::msg)?;
                scene.apply(sim);
                self.log(&format!("  Loaded scene {}", scene));
            }

            ScenarioAction::ToggleSymmetry => sim.toggle_symmetry_mode(),

            ScenarioAction::SetWind { x, y } => sim.set_wind(Vec2::new(*x, *y)),

            ScenarioAction::Step { ticks } => {
                for _ in 0..*ticks {
                    sim.step();
                }
                self.ticks += u64::from(*ticks);
            }

            ScenarioAction::Update { frames } => {
                let mut ran = 0;
                for _ in 0..*frames {
                    if sim.update() {
                        ran += 1;
                    }
                }
                self.ticks += ran;
                if ran == 0 && *frames > 0 {
                    self.log(&format!("  {} frames while paused", frames));
                }
            }

            // File failures are soft: logged, simulation untouched
            ScenarioAction::Save { path } => {
                let path = self.resolve_path(path.as_deref());
                match sim.save(&path) {
                    Ok(()) => self.log(&format!("  Saved to {}", path.display())),
                    Err(e) => self.log(&format!("  Save to {} failed: {}", path.display(), e)),
                }
            }

            ScenarioAction::Load { path } => {
                let path = self.resolve_path(path.as_deref());
                match sim.load(&path) {
                    Ok(()) => self.log(&format!("  Loaded from {}", path.display())),
                    Err(e) => self.log(&format!("  Load from {} failed: {}", path.display(), e)),
                }
            }

            ScenarioAction::Log { message } => {
                self.log(&format!("  {}", message));
            }
        }

        Ok(())
    }

    fn resolve_path(&self, path: Option<&Path>) -> PathBuf {
        path.map_or_else(|| self.config.default_save_path.clone(), Path::to_path_buf)
    }

    fn log(&mut self, message: &str) {
        log::info!("{}", message);
        self.log.push(message.to_string());
    }
}

impl Default for ScenarioExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{Region, VerificationCondition};
    use openbox_core::SimConfig;
    use openbox_core::simulation::MaterialKind;

    fn sim() -> Simulation {
        Simulation::new(SimConfig {
            grid_width: 24,
            grid_height: 16,
            seed: Some(11),
            ..Default::default()
        })
        .unwrap()
    }

    fn scenario(actions: Vec<ScenarioAction>, verify: Vec<VerificationCondition>) -> ScenarioDefinition {
        ScenarioDefinition {
            name: "test".to_string(),
            description: String::new(),
            setup: vec![],
            actions,
            verify,
        }
    }

    #[test]
    fn test_sand_settles_on_floor() {
        let mut sim = sim();
        let def = scenario(
            vec![
                ScenarioAction::SetBrushSize { size: 1 },
                ScenarioAction::SelectMaterial {
                    material: MaterialKind::Sand,
                },
                ScenarioAction::PaintSelected { x: 12, y: 2 },
                ScenarioAction::Step { ticks: 40 },
            ],
            vec![
                VerificationCondition::MaterialCount {
                    material: MaterialKind::Sand,
                    region: Region::Whole,
                    expected: 5,
                    tolerance: None,
                },
                VerificationCondition::RegionEmpty {
                    region: Region::Rect {
                        min_x: 1,
                        min_y: 1,
                        max_x: 22,
                        max_y: 11,
                    },
                },
            ],
        );

        let report = ScenarioExecutor::new().execute_scenario(&def, &mut sim).unwrap();

        assert!(report.passed, "{:?}", report.verification_failures);
        assert_eq!(report.ticks_executed, 40);
        assert_eq!(report.actions_executed, 4);
    }

    #[test]
    fn test_failed_check_is_reported() {
        let mut sim = sim();
        let def = scenario(
            vec![ScenarioAction::Step { ticks: 1 }],
            vec![VerificationCondition::ParticleCount { min: 1, max: 10 }],
        );

        let report = ScenarioExecutor::new().execute_scenario(&def, &mut sim).unwrap();

        assert!(!report.passed);
        assert_eq!(report.verification_failures.len(), 1);
    }

    #[test]
    fn test_update_respects_pause() {
        let mut sim = sim();
        let def = scenario(
            vec![
                ScenarioAction::Pause,
                ScenarioAction::Update { frames: 10 },
                ScenarioAction::Resume,
                ScenarioAction::Update { frames: 3 },
            ],
            vec![],
        );

        let report = ScenarioExecutor::new().execute_scenario(&def, &mut sim).unwrap();

        assert_eq!(report.ticks_executed, 3);
        assert_eq!(sim.tick(), 3);
    }

    #[test]
    fn test_unknown_scene_fails_the_action() {
        let mut sim = sim();
        let def = scenario(
            vec![ScenarioAction::LoadScene {
                scene: "atlantis".to_string(),
            }],
            vec![],
        );

        let err = ScenarioExecutor::new()
            .execute_scenario(&def, &mut sim)
            .unwrap_err();

        assert!(format!("{err:#}").contains("atlantis"));
    }

    #[test]
    fn test_save_and_load_actions() {
        let dir = tempfile::tempdir().unwrap();
        let mut executor = ScenarioExecutor::with_config(ScenarioExecutorConfig {
            default_save_path: dir.path().join("sandbox_save.dat"),
            verbose: true,
        });
        let mut sim = sim();
        let def = scenario(
            vec![
                ScenarioAction::Paint {
                    x: 5,
                    y: 5,
                    material: MaterialKind::Wood,
                },
                ScenarioAction::Save { path: None },
                ScenarioAction::Reset,
                ScenarioAction::Load { path: None },
                // Soft failure: logged, scenario continues
                ScenarioAction::Load {
                    path: Some(dir.path().join("missing.dat")),
                },
            ],
            vec![VerificationCondition::MaterialAt {
                x: 5,
                y: 5,
                expected: MaterialKind::Wood,
            }],
        );

        let report = executor.execute_scenario(&def, &mut sim).unwrap();

        assert!(report.passed, "{:?}", report.verification_failures);
        assert!(report.log.iter().any(|line| line.contains("failed")));
    }

    #[test]
    fn test_symmetry_and_wind_actions() {
        let mut sim = sim();
        let def = scenario(
            vec![
                ScenarioAction::ToggleSymmetry,
                ScenarioAction::SetBrushSize { size: 0 },
                ScenarioAction::SelectHotkey { key: 9 },
                ScenarioAction::PaintSelected { x: 3, y: 4 },
                ScenarioAction::SetWind { x: -1.0, y: 0.5 },
            ],
            vec![
                VerificationCondition::MaterialAt {
                    x: 3,
                    y: 4,
                    expected: MaterialKind::Wood,
                },
                VerificationCondition::MaterialAt {
                    x: 20,
                    y: 4,
                    expected: MaterialKind::Wood,
                },
            ],
        );

        let report = ScenarioExecutor::new().execute_scenario(&def, &mut sim).unwrap();

        assert!(report.passed, "{:?}", report.verification_failures);
        assert_eq!(sim.wind(), Vec2::new(-1.0, 0.5));
    }
}
