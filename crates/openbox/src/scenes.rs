//! Preset scenes painted onto a fresh simulation

use std::fmt;
use std::str::FromStr;

use openbox_core::Simulation;
use openbox_core::simulation::MaterialKind;

/// Built-in starting layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Empty,
    SandPile,
    Volcano,
    SaltLake,
    Bonfire,
    AcidBath,
}

impl Scene {
    pub const ALL: [Scene; 6] = [
        Scene::Empty,
        Scene::SandPile,
        Scene::Volcano,
        Scene::SaltLake,
        Scene::Bonfire,
        Scene::AcidBath,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scene::Empty => "empty",
            Scene::SandPile => "sand-pile",
            Scene::Volcano => "volcano",
            Scene::SaltLake => "salt-lake",
            Scene::Bonfire => "bonfire",
            Scene::AcidBath => "acid-bath",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scene::Empty => "Walls only",
            Scene::SandPile => "A column of sand dropped onto the floor",
            Scene::Volcano => "Lava poured over a pool of water",
            Scene::SaltLake => "Salt grains sprinkled over a lake",
            Scene::Bonfire => "Burning wood stack with oil underneath",
            Scene::AcidBath => "Acid eating through metal, glass survives",
        }
    }

    /// Reset the world and paint this scene, scaled to the grid
    pub fn apply(self, sim: &mut Simulation) {
        sim.reset();
        let (w, h) = (sim.world().width(), sim.world().height());
        let floor = h - 2;

        match self {
            Scene::Empty => {}
            Scene::SandPile => {
                fill_rect(sim, w / 2 - w / 16, h / 8, w / 2 + w / 16, h / 3, MaterialKind::Sand);
            }
            Scene::Volcano => {
                fill_rect(sim, 1, floor - h / 8, w - 2, floor, MaterialKind::Water);
                fill_rect(sim, w / 2 - 3, 1, w / 2 + 3, h / 6, MaterialKind::Lava);
            }
            Scene::SaltLake => {
                fill_rect(sim, 1, floor - h / 5, w - 2, floor, MaterialKind::Water);
                for x in (2..w - 2).step_by(3) {
                    fill_rect(sim, x, 1, x, 2, MaterialKind::Salt);
                }
            }
            Scene::Bonfire => {
                fill_rect(sim, w / 2 - 8, floor - 1, w / 2 + 8, floor, MaterialKind::Oil);
                fill_rect(sim, w / 2 - 5, floor - 8, w / 2 + 5, floor - 2, MaterialKind::Wood);
                fill_rect(sim, w / 2 - 1, floor - 10, w / 2 + 1, floor - 9, MaterialKind::Fire);
            }
            Scene::AcidBath => {
                fill_rect(sim, 1, floor - 4, w / 2 - 1, floor, MaterialKind::Metal);
                fill_rect(sim, w / 2, floor - 4, w - 2, floor, MaterialKind::Glass);
                fill_rect(sim, w / 4, 1, 3 * w / 4, 4, MaterialKind::Acid);
            }
        }

        log::info!("Loaded scene '{}' ({} particles)", self.name(), sim.particle_count());
    }
}

/// Fill an inclusive rectangle cell by cell, clipped to the grid
fn fill_rect(sim: &mut Simulation, x0: i32, y0: i32, x1: i32, y1: i32, kind: MaterialKind) {
    let world = sim.world_mut();
    for x in x0..=x1 {
        for y in y0..=y1 {
            world.paint(x, y, kind, 0);
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scene {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Scene::ALL
            .into_iter()
            .find(|scene| scene.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = Scene::ALL.iter().map(|s| s.name()).collect();
                format!("Unknown scene '{}'. Available: {}", s, names.join(", "))
            })
    }
}

/// Print all scenes to stdout
pub fn list_scenes() {
    println!("Available scenes:");
    for scene in Scene::ALL {
        println!("  {:<10} {}", scene.name(), scene.description());
    }
}
