//! World - the grid plus the material table it is simulated with

use std::path::Path;

use super::brush::Brush;
use super::cell_update::CellUpdater;
use super::grid::Grid;
use super::persistence;
use super::render_snapshot::{self, RenderCell};
use crate::error::{GridError, PersistenceError};
use crate::simulation::{MaterialKind, Materials};
use crate::world::{SimRng, SimStats};

/// The simulated sandbox
pub struct World {
    grid: Grid,
    materials: Materials,
}

impl World {
    /// Create a walled, otherwise empty world
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let materials = Materials::new();
        let grid = Grid::new(width, height, &materials)?;
        log::info!("Created {}x{} world", width, height);
        Ok(Self { grid, materials })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Back to the initial walled, empty state
    pub fn reset(&mut self) {
        self.grid.reset(&self.materials);
    }

    /// Advance the simulation by one tick
    ///
    /// Rows are visited bottom to top and each row left to right. The scan
    /// order keeps a falling particle from crossing more than one row per
    /// tick.
    pub fn step<R: SimRng>(&mut self, rng: &mut R, stats: &mut dyn SimStats) {
        self.grid.clear_processed_flags();

        let (width, height) = (self.grid.width(), self.grid.height());
        for y in (0..height).rev() {
            for x in 0..width {
                CellUpdater::update_cell(&mut self.grid, &self.materials, x, y, rng, stats);
            }
        }
    }

    /// Stamp a disc of fresh `kind` cells; returns cells written
    pub fn paint(&mut self, x: i32, y: i32, kind: MaterialKind, radius: i32) -> usize {
        Brush::paint(&mut self.grid, &self.materials, x, y, kind, radius)
    }

    pub fn erase(&mut self, x: i32, y: i32, radius: i32) -> usize {
        Brush::erase(&mut self.grid, &self.materials, x, y, radius)
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        persistence::save_to_path(&self.grid, path)
    }

    pub fn load(&mut self, path: &Path) -> Result<(), PersistenceError> {
        persistence::load_from_path(&mut self.grid, path)
    }

    /// Visible cells with temperature-tinted colors
    pub fn render_snapshot(&self) -> Vec<RenderCell> {
        render_snapshot::render_snapshot(&self.grid)
    }
}
