//! Material definitions and registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Temperature every fresh cell and the cooling pull settle towards (Celsius)
pub const AMBIENT_TEMPERATURE: f32 = 20.0;

/// Lifetime value meaning "never decays"
pub const INFINITE_LIFETIME: i32 = -1;

/// Fixed tint applied to water that has dissolved salt
pub const SALT_WATER_COLOR: [u8; 4] = [102, 191, 255, 255];

/// Color of empty space
pub const EMPTY_COLOR: [u8; 4] = [0, 0, 0, 255];

/// The closed set of materials a cell can hold
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MaterialKind {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Wall = 3,
    Fire = 4,
    Smoke = 5,
    Steam = 6,
    Lava = 7,
    Ice = 8,
    Oil = 9,
    Acid = 10,
    Wood = 11,
    Plant = 12,
    Salt = 13,
    Glass = 14,
    Metal = 15,
}

impl MaterialKind {
    /// Number of material kinds
    pub const COUNT: usize = 16;

    /// Every kind, in discriminant order
    pub const ALL: [MaterialKind; Self::COUNT] = [
        MaterialKind::Empty,
        MaterialKind::Sand,
        MaterialKind::Water,
        MaterialKind::Wall,
        MaterialKind::Fire,
        MaterialKind::Smoke,
        MaterialKind::Steam,
        MaterialKind::Lava,
        MaterialKind::Ice,
        MaterialKind::Oil,
        MaterialKind::Acid,
        MaterialKind::Wood,
        MaterialKind::Plant,
        MaterialKind::Salt,
        MaterialKind::Glass,
        MaterialKind::Metal,
    ];

    /// Decode a discriminant read from a save file
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Discriminant used by the save format
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Material bound to number keys 1-9
    pub fn from_hotkey(key: u8) -> Option<Self> {
        match key {
            1 => Some(MaterialKind::Sand),
            2 => Some(MaterialKind::Water),
            3 => Some(MaterialKind::Wall),
            4 => Some(MaterialKind::Fire),
            5 => Some(MaterialKind::Lava),
            6 => Some(MaterialKind::Ice),
            7 => Some(MaterialKind::Oil),
            8 => Some(MaterialKind::Acid),
            9 => Some(MaterialKind::Wood),
            _ => None,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::Empty => "Empty",
            MaterialKind::Sand => "Sand",
            MaterialKind::Water => "Water",
            MaterialKind::Wall => "Wall",
            MaterialKind::Fire => "Fire",
            MaterialKind::Smoke => "Smoke",
            MaterialKind::Steam => "Steam",
            MaterialKind::Lava => "Lava",
            MaterialKind::Ice => "Ice",
            MaterialKind::Oil => "Oil",
            MaterialKind::Acid => "Acid",
            MaterialKind::Wood => "Wood",
            MaterialKind::Plant => "Plant",
            MaterialKind::Salt => "Salt",
            MaterialKind::Glass => "Glass",
            MaterialKind::Metal => "Metal",
        }
    }

    pub fn is_empty(self) -> bool {
        self == MaterialKind::Empty
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown material '{}'", s))
    }
}

/// How a movable material behaves once it cannot fall straight down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spread {
    /// Only falls
    None,
    /// Flows sideways (water, oil)
    Lateral,
    /// Slides down diagonally, piles up (sand)
    Diagonal,
}

/// Physical properties of one material kind
#[derive(Clone, Debug)]
pub struct MaterialProps {
    pub kind: MaterialKind,

    /// Base color (RGBA)
    pub color: [u8; 4],

    /// Takes part in gravity and spreading
    pub movable: bool,
    /// Fire may ignite it
    pub flammable: bool,
    pub spread: Spread,

    /// Temperature a freshly placed cell starts at
    pub default_temperature: f32,
    /// Ticks until the cell decays to empty (-1 = infinite)
    pub default_lifetime: i32,

    // Reserved: carried in the table, not read by the update engine
    pub mass: f32,
    pub conductivity: f32,
    pub viscosity: f32,
}

impl Default for MaterialProps {
    /// Inert, non-movable, ambient-temperature record
    fn default() -> Self {
        Self {
            kind: MaterialKind::Empty,
            color: EMPTY_COLOR,
            movable: false,
            flammable: false,
            spread: Spread::None,
            default_temperature: AMBIENT_TEMPERATURE,
            default_lifetime: INFINITE_LIFETIME,
            mass: 0.0,
            conductivity: 0.0,
            viscosity: 0.0,
        }
    }
}

/// Registry of all materials
pub struct Materials {
    materials: Vec<MaterialProps>,
}

impl Materials {
    pub fn new() -> Self {
        let mut materials = Self {
            materials: vec![MaterialProps::default(); MaterialKind::COUNT],
        };
        materials.register_defaults();
        log::debug!("Registered {} materials", materials.materials.len());
        materials
    }

    fn register_defaults(&mut self) {
        self.register(MaterialProps::default());

        self.register(MaterialProps {
            kind: MaterialKind::Sand,
            color: [255, 203, 0, 255],
            movable: true,
            spread: Spread::Diagonal,
            mass: 1.5,
            conductivity: 0.2,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Water,
            color: [0, 121, 241, 255],
            movable: true,
            spread: Spread::Lateral,
            mass: 1.0,
            conductivity: 0.5,
            viscosity: 0.8,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Wall,
            color: [80, 80, 80, 255],
            mass: 999.0,
            conductivity: 0.1,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Fire,
            color: [230, 41, 55, 255],
            movable: true,
            default_temperature: 800.0,
            default_lifetime: 100,
            mass: 0.1,
            conductivity: 1.0,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Smoke,
            color: [80, 80, 80, 255],
            movable: true,
            default_temperature: 100.0,
            default_lifetime: 200,
            mass: 0.2,
            conductivity: 0.1,
            viscosity: 0.3,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Steam,
            color: [200, 200, 200, 255],
            movable: true,
            default_temperature: 100.0,
            default_lifetime: 150,
            mass: 0.3,
            conductivity: 0.3,
            viscosity: 0.2,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Lava,
            color: [255, 161, 0, 255],
            movable: true,
            default_temperature: 1000.0,
            mass: 2.0,
            conductivity: 0.8,
            viscosity: 0.9,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Ice,
            color: [102, 191, 255, 255],
            default_temperature: -10.0,
            mass: 0.9,
            conductivity: 0.9,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Oil,
            color: [127, 106, 79, 255],
            movable: true,
            flammable: true,
            spread: Spread::Lateral,
            mass: 0.8,
            conductivity: 0.1,
            viscosity: 0.4,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Acid,
            color: [0, 228, 48, 255],
            movable: true,
            mass: 1.2,
            conductivity: 0.3,
            viscosity: 0.5,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Wood,
            color: [211, 176, 131, 255],
            flammable: true,
            mass: 0.7,
            conductivity: 0.2,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Plant,
            color: [0, 117, 44, 255],
            flammable: true,
            mass: 0.6,
            conductivity: 0.3,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Salt,
            color: [255, 255, 255, 255],
            movable: true,
            mass: 1.1,
            conductivity: 0.2,
            ..Default::default()
        });

        // Half-transparent white
        self.register(MaterialProps {
            kind: MaterialKind::Glass,
            color: [255, 255, 255, 127],
            mass: 1.5,
            conductivity: 0.4,
            ..Default::default()
        });

        self.register(MaterialProps {
            kind: MaterialKind::Metal,
            color: [200, 200, 200, 255],
            mass: 2.0,
            conductivity: 0.9,
            ..Default::default()
        });
    }

    fn register(&mut self, material: MaterialProps) {
        let idx = material.kind as usize;
        self.materials[idx] = material;
    }

    /// Get material properties by kind
    pub fn get(&self, kind: MaterialKind) -> &MaterialProps {
        &self.materials[kind as usize]
    }

    /// Get color for a material
    pub fn get_color(&self, kind: MaterialKind) -> [u8; 4] {
        self.get(kind).color
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialProps> {
        self.materials.iter()
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::new()
    }
}
