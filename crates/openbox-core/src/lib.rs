//! OpenBox simulation core: grid, update pipeline, brush and save files

pub mod config;
pub mod error;
mod sandbox;
pub mod simulation;
pub mod world;

pub use config::SimConfig;
pub use error::{GridError, PersistenceError};
pub use sandbox::{Probe, Simulation};
