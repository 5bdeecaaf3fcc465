//! World management - grid, tick driver, brush, saving

mod brush;
mod ca_update;
mod cell_update;
mod grid;
mod neighbor_queries;
pub mod persistence;
pub mod render_snapshot;
pub mod rng_trait;
pub mod stats;
#[allow(clippy::module_inception)]
mod world;

pub use brush::Brush;
pub use ca_update::CellularAutomataUpdater;
pub use cell_update::CellUpdater;
pub use grid::Grid;
pub use neighbor_queries::{NEIGHBOR_OFFSETS, NeighborQueries};
pub use render_snapshot::{RenderCell, render_snapshot, temperature_tint};
pub use rng_trait::SimRng;
pub use stats::{NoopStats, SimStats, TickStats};
pub use world::World;
