//! Simulation context: the world plus everything the input shell can change

use std::path::Path;

use glam::Vec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::config::SimConfig;
use crate::error::{GridError, PersistenceError};
use crate::simulation::MaterialKind;
use crate::world::{Brush, RenderCell, SimRng, TickStats, World};

/// Result of probing a single cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub kind: MaterialKind,
    pub temperature: f32,
}

/// Owns the world and all interactive state
///
/// Every shell command goes through this type; there is no global state.
/// Generic over the random generator; `new` uses a seeded Xoshiro256**.
pub struct Simulation<R = Xoshiro256StarStar> {
    world: World,
    config: SimConfig,
    rng: R,
    brush_size: i32,
    paused: bool,
    symmetry: bool,
    /// Stored for the shell; movement ignores it
    wind: Vec2,
    selected: MaterialKind,
    tick: u64,
    last_stats: TickStats,
}

impl Simulation {
    /// Seeded from `config.seed`, or from entropy when unset
    pub fn new(config: SimConfig) -> Result<Self, GridError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("Seeding simulation with {}", seed);
        Self::with_rng(config, Xoshiro256StarStar::seed_from_u64(seed))
    }
}

impl<R: SimRng> Simulation<R> {
    /// Use the given generator; `config.seed` is ignored
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self, GridError> {
        let world = World::new(config.grid_width, config.grid_height)?;
        log::info!(
            "Simulation ready: {}x{} grid",
            config.grid_width,
            config.grid_height
        );

        Ok(Self {
            world,
            rng,
            brush_size: config.clamp_brush_size(config.brush_size),
            paused: false,
            symmetry: false,
            wind: Vec2::ZERO,
            selected: MaterialKind::Sand,
            tick: 0,
            last_stats: TickStats::default(),
            config,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Paint `kind` with the current brush, mirrored when symmetry is on
    pub fn paint(&mut self, x: i32, y: i32, kind: MaterialKind) -> usize {
        let radius = self.brush_size;
        let mut painted = self.world.paint(x, y, kind, radius);

        if self.symmetry {
            let mirrored = Brush::mirror_x(self.world.grid(), x);
            if mirrored != x {
                painted += self.world.paint(mirrored, y, kind, radius);
            }
        }

        log::debug!("Painted {} at ({}, {}), {} cells", kind, x, y, painted);
        painted
    }

    /// Paint with the selected material
    pub fn paint_selected(&mut self, x: i32, y: i32) -> usize {
        self.paint(x, y, self.selected)
    }

    pub fn erase(&mut self, x: i32, y: i32) -> usize {
        self.paint(x, y, MaterialKind::Empty)
    }

    pub fn selected_material(&self) -> MaterialKind {
        self.selected
    }

    pub fn select_material(&mut self, kind: MaterialKind) {
        log::debug!("Selected {}", kind);
        self.selected = kind;
    }

    /// Number-key selection; keys outside 1..=9 are ignored
    pub fn select_hotkey(&mut self, key: u8) -> bool {
        match MaterialKind::from_hotkey(key) {
            Some(kind) => {
                self.select_material(kind);
                true
            }
            None => false,
        }
    }

    pub fn brush_size(&self) -> i32 {
        self.brush_size
    }

    /// Set the brush radius, clamped to the configured bounds
    pub fn set_brush_size(&mut self, size: i32) {
        self.brush_size = self.config.clamp_brush_size(size);
    }

    pub fn grow_brush(&mut self) {
        self.set_brush_size(self.brush_size + 1);
    }

    pub fn shrink_brush(&mut self) {
        self.set_brush_size(self.brush_size - 1);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn symmetry(&self) -> bool {
        self.symmetry
    }

    pub fn toggle_symmetry_mode(&mut self) {
        self.symmetry = !self.symmetry;
        log::debug!("Symmetry mode {}", if self.symmetry { "on" } else { "off" });
    }

    pub fn wind(&self) -> Vec2 {
        self.wind
    }

    pub fn set_wind(&mut self, wind: Vec2) {
        self.wind = wind;
    }

    /// Re-initialize the grid; settings are kept
    pub fn reset(&mut self) {
        self.world.reset();
        self.tick = 0;
        self.last_stats = TickStats::default();
        log::info!("World reset");
    }

    /// Save the grid; failures are logged and leave the world untouched
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        self.world.save(path).inspect_err(|e| {
            log::error!("Failed to save to {:?}: {}", path, e);
        })
    }

    /// Load the grid; on any failure the current grid is kept as is
    pub fn load(&mut self, path: &Path) -> Result<(), PersistenceError> {
        self.world.load(path).inspect_err(|e| {
            log::error!("Failed to load from {:?}: {}", path, e);
        })
    }

    /// Per-frame update: ticks once unless paused
    pub fn update(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.step();
        true
    }

    /// Advance exactly one tick, paused or not
    pub fn step(&mut self) -> TickStats {
        let mut stats = TickStats::default();
        self.world.step(&mut self.rng, &mut stats);
        self.tick += 1;
        self.last_stats = stats;
        log::trace!(
            "Tick {}: {} moved, {} changed, {} reactions",
            self.tick,
            stats.cells_moved,
            stats.state_changes,
            stats.reactions
        );
        stats
    }

    /// Ticks run since creation or the last reset
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }

    /// Material and temperature at (x, y); None off the grid
    pub fn probe(&self, x: i32, y: i32) -> Option<Probe> {
        self.world.grid().get(x, y).map(|cell| Probe {
            kind: cell.kind,
            temperature: cell.temperature,
        })
    }

    /// Cells holding anything other than Empty or Wall
    pub fn particle_count(&self) -> usize {
        self.world
            .grid()
            .cells()
            .iter()
            .filter(|c| !matches!(c.kind, MaterialKind::Empty | MaterialKind::Wall))
            .count()
    }

    pub fn render_snapshot(&self) -> Vec<RenderCell> {
        self.world.render_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> Simulation {
        Simulation::new(SimConfig {
            grid_width: 20,
            grid_height: 15,
            seed: Some(1),
            ..Default::default()
        })
        .unwrap()
    }

    /// Always returns the same roll
    struct FixedRng(f32);

    impl SimRng for FixedRng {
        fn gen_bool(&mut self) -> bool {
            self.0 < 0.5
        }

        fn gen_f32(&mut self) -> f32 {
            self.0
        }
    }

    fn small_config() -> SimConfig {
        SimConfig {
            grid_width: 20,
            grid_height: 15,
            ..Default::default()
        }
    }

    #[test]
    fn test_injected_rng_drives_the_rules() {
        let mut lucky = Simulation::with_rng(small_config(), FixedRng(0.0)).unwrap();
        let mut unlucky = Simulation::with_rng(small_config(), FixedRng(0.999)).unwrap();
        for sim in [&mut lucky, &mut unlucky] {
            sim.world_mut().paint(10, 13, MaterialKind::Fire, 0);
        }

        lucky.step();
        for _ in 0..5 {
            unlucky.step();
        }

        assert!(lucky.world().grid().count(MaterialKind::Smoke) > 0);
        assert_eq!(unlucky.world().grid().count(MaterialKind::Smoke), 0);
    }

    #[test]
    fn test_seeded_new_matches_explicit_generator() {
        let mut config = small_config();
        config.seed = Some(99);
        let mut seeded = Simulation::new(config.clone()).unwrap();
        let mut explicit =
            Simulation::with_rng(config, Xoshiro256StarStar::seed_from_u64(99)).unwrap();

        for sim in [&mut seeded, &mut explicit] {
            sim.paint(10, 3, MaterialKind::Water);
            sim.paint(5, 3, MaterialKind::Sand);
        }
        for _ in 0..30 {
            seeded.step();
            explicit.step();
        }

        assert_eq!(seeded.world().grid().cells(), explicit.world().grid().cells());
    }

    #[test]
    fn test_invalid_dimensions() {
        let config = SimConfig {
            grid_width: 0,
            ..Default::default()
        };
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_brush_size_clamped() {
        let mut sim = sim();
        assert_eq!(sim.brush_size(), 3);

        sim.set_brush_size(100);
        assert_eq!(sim.brush_size(), 20);
        sim.grow_brush();
        assert_eq!(sim.brush_size(), 20);

        sim.set_brush_size(-4);
        assert_eq!(sim.brush_size(), 1);
        sim.shrink_brush();
        assert_eq!(sim.brush_size(), 1);
        sim.grow_brush();
        assert_eq!(sim.brush_size(), 2);
    }

    #[test]
    fn test_paint_uses_brush_size() {
        let mut sim = sim();
        sim.set_brush_size(1);

        let painted = sim.paint(10, 5, MaterialKind::Water);

        assert_eq!(painted, 5);
        assert_eq!(sim.particle_count(), 5);
    }

    #[test]
    fn test_symmetry_mirrors_paint() {
        let mut sim = sim();
        sim.set_brush_size(1);
        sim.toggle_symmetry_mode();

        sim.paint(4, 5, MaterialKind::Wood);

        assert_eq!(sim.probe(4, 5).unwrap().kind, MaterialKind::Wood);
        assert_eq!(sim.probe(15, 5).unwrap().kind, MaterialKind::Wood);
        assert_eq!(sim.particle_count(), 10);
    }

    #[test]
    fn test_symmetry_mirrors_erase() {
        let mut sim = sim();
        sim.set_brush_size(1);
        sim.paint(4, 5, MaterialKind::Wood);
        sim.paint(15, 5, MaterialKind::Wood);
        sim.toggle_symmetry_mode();

        sim.erase(4, 5);

        assert_eq!(sim.particle_count(), 0);
    }

    #[test]
    fn test_paint_out_of_bounds_is_noop() {
        let mut sim = sim();
        assert_eq!(sim.paint(-3, 5, MaterialKind::Sand), 0);
        assert_eq!(sim.paint(5, 15, MaterialKind::Sand), 0);
        assert_eq!(sim.particle_count(), 0);
    }

    #[test]
    fn test_hotkey_selection() {
        let mut sim = sim();
        assert!(sim.select_hotkey(5));
        assert_eq!(sim.selected_material(), MaterialKind::Lava);
        assert!(!sim.select_hotkey(0));
        assert_eq!(sim.selected_material(), MaterialKind::Lava);

        sim.set_brush_size(1);
        sim.paint_selected(10, 5);
        assert_eq!(sim.probe(10, 5).unwrap().kind, MaterialKind::Lava);
    }

    #[test]
    fn test_paused_update_does_not_tick() {
        let mut sim = sim();
        sim.set_brush_size(1);
        sim.paint(10, 2, MaterialKind::Sand);
        let before = sim.world().grid().cells().to_vec();

        sim.pause();
        assert!(!sim.update());

        assert_eq!(sim.world().grid().cells(), before.as_slice());
        assert_eq!(sim.tick(), 0);

        sim.resume();
        assert!(sim.update());
        assert_eq!(sim.tick(), 1);
    }

    #[test]
    fn test_step_while_paused() {
        let mut sim = sim();
        sim.set_brush_size(1);
        sim.paint(10, 2, MaterialKind::Sand);
        sim.toggle_pause();

        let stats = sim.step();

        assert!(sim.is_paused());
        assert_eq!(sim.tick(), 1);
        assert_eq!(stats.cells_moved, 5);
        assert_eq!(sim.last_stats(), stats);
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut sim = sim();
        sim.set_brush_size(6);
        sim.toggle_symmetry_mode();
        sim.paint(10, 5, MaterialKind::Sand);
        sim.step();

        sim.reset();

        assert_eq!(sim.particle_count(), 0);
        assert_eq!(sim.tick(), 0);
        assert_eq!(sim.brush_size(), 6);
        assert!(sim.symmetry());
    }

    #[test]
    fn test_wind_is_stored_only() {
        let mut sim = sim();
        sim.set_wind(Vec2::new(2.0, -1.0));
        assert_eq!(sim.wind(), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_probe() {
        let mut sim = sim();
        assert_eq!(
            sim.probe(0, 0),
            Some(Probe {
                kind: MaterialKind::Wall,
                temperature: 20.0
            })
        );
        assert!(sim.probe(20, 0).is_none());

        sim.set_brush_size(1);
        sim.paint(10, 5, MaterialKind::Ice);
        assert_eq!(sim.probe(10, 5).unwrap().temperature, -10.0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sandbox_save.dat");
        let mut sim = sim();
        sim.paint(10, 5, MaterialKind::Oil);
        sim.save(&path).unwrap();
        let saved = sim.world().grid().cells().to_vec();

        sim.reset();
        sim.load(&path).unwrap();

        assert_eq!(sim.world().grid().cells(), saved.as_slice());
    }

    #[test]
    fn test_failed_load_keeps_grid() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = sim();
        sim.paint(10, 5, MaterialKind::Oil);
        let before = sim.world().grid().cells().to_vec();

        assert!(sim.load(&dir.path().join("nope.dat")).is_err());

        assert_eq!(sim.world().grid().cells(), before.as_slice());
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let run = || {
            let mut sim = sim();
            sim.paint(10, 3, MaterialKind::Water);
            sim.paint(6, 6, MaterialKind::Sand);
            for _ in 0..40 {
                sim.step();
            }
            sim.world().grid().cells().to_vec()
        };

        assert_eq!(run(), run());
    }
}
