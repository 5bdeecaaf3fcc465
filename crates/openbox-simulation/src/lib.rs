//! Material data for the OpenBox sandbox
//!
//! This crate provides the foundational data types for the simulation:
//! - Material definitions (MaterialKind, MaterialProps, Materials)
//! - Cell state (Cell)

mod cell;
mod materials;

pub use cell::Cell;
pub use materials::{
    AMBIENT_TEMPERATURE, EMPTY_COLOR, INFINITE_LIFETIME, MaterialKind, MaterialProps, Materials,
    SALT_WATER_COLOR, Spread,
};
