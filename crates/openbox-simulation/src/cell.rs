//! Cell type
//!
//! The per-position state of the sandbox grid.

use crate::materials::{AMBIENT_TEMPERATURE, EMPTY_COLOR, INFINITE_LIFETIME};
use crate::{MaterialKind, Materials};

/// A single cell of the grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub kind: MaterialKind,
    /// Display color, normally the material color
    pub color: [u8; 4],
    /// Celsius, unbounded
    pub temperature: f32,
    /// Remaining ticks (-1 = infinite)
    pub lifetime: i32,
    /// Visited by the update pipeline this tick
    pub processed: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        kind: MaterialKind::Empty,
        color: EMPTY_COLOR,
        temperature: AMBIENT_TEMPERATURE,
        lifetime: INFINITE_LIFETIME,
        processed: false,
    };

    /// Fresh instance of a material with its table defaults
    pub fn new(kind: MaterialKind, materials: &Materials) -> Self {
        let props = materials.get(kind);
        Self {
            kind,
            color: props.color,
            temperature: props.default_temperature,
            lifetime: props.default_lifetime,
            processed: false,
        }
    }

    /// Turn this cell into another material, keeping its heat
    ///
    /// Color and lifetime are reset to the new kind's defaults, so burning
    /// wood gets a full fire lifetime instead of inheriting the countdown
    /// of whatever the cell held before.
    pub fn convert(&mut self, kind: MaterialKind, materials: &Materials) {
        let props = materials.get(kind);
        self.kind = kind;
        self.color = props.color;
        self.lifetime = props.default_lifetime;
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}
