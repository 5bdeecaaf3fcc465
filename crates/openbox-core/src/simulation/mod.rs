//! Material rules: heat, interactions and reactions

pub mod interactions;
pub mod reactions;
pub mod temperature;

pub use interactions::{InteractionFn, InteractionRules};
pub use reactions::ReactionSystem;
pub use temperature::TemperatureSimulator;

// Re-export material data from openbox-simulation
pub use openbox_simulation::{
    AMBIENT_TEMPERATURE, Cell, EMPTY_COLOR, INFINITE_LIFETIME, MaterialKind, MaterialProps,
    Materials, SALT_WATER_COLOR, Spread,
};
