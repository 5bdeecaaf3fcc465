//! Grid - the fixed-size store of cells

use crate::error::GridError;
use crate::simulation::{Cell, MaterialKind, Materials};

/// Fixed-size 2-D array of cells
///
/// Storage is column-major: index = x * height + y. Row 0 is the top row,
/// y grows downwards.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a grid and lay down the wall border
    pub fn new(width: i32, height: i32, materials: &Materials) -> Result<Self, GridError> {
        if width < 3 || height < 2 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        };
        grid.reset(materials);
        Ok(grid)
    }

    /// Empty every cell, then wall off the left, right and bottom edges
    pub fn reset(&mut self, materials: &Materials) {
        let wall = Cell::new(MaterialKind::Wall, materials);
        let (width, height) = (self.width, self.height);

        for x in 0..width {
            for y in 0..height {
                let border = y == height - 1 || x == 0 || x == width - 1;
                self.cells[Self::index_unchecked(height, x, y)] =
                    if border { wall } else { Cell::EMPTY };
            }
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index_unchecked(height: i32, x: i32, y: i32) -> usize {
        x as usize * height as usize + y as usize
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| Self::index_unchecked(self.height, x, y))
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Borrow the cell at (x, y), None when out of bounds
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Material at (x, y), None when out of bounds
    #[inline]
    pub fn kind_at(&self, x: i32, y: i32) -> Option<MaterialKind> {
        self.get(x, y).map(|c| c.kind)
    }

    /// True if (x, y) is in bounds and holds nothing
    #[inline]
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.kind_at(x, y) == Some(MaterialKind::Empty)
    }

    /// Read a copy of the cell at (x, y)
    pub fn at(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        self.get(x, y).copied().ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Overwrite the cell at (x, y)
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        let old_kind = self.cells[idx].kind;
        self.cells[idx] = cell;

        if old_kind != cell.kind {
            log::trace!("[MODIFY] ({}, {}) set to {} (was {})", x, y, cell.kind, old_kind);
        }
        Ok(())
    }

    /// Exchange the full state of two cells
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), GridError> {
        let a = self.index(x1, y1).ok_or_else(|| self.out_of_bounds(x1, y1))?;
        let b = self.index(x2, y2).ok_or_else(|| self.out_of_bounds(x2, y2))?;
        self.cells.swap(a, b);
        Ok(())
    }

    /// Reset every processed flag before a tick
    pub fn clear_processed_flags(&mut self) {
        for cell in &mut self.cells {
            cell.processed = false;
        }
    }

    /// All cells in storage order (column-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Replace every cell at once; `cells` must hold exactly `len()` entries
    pub(crate) fn replace_cells(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }

    /// Iterate (x, y, cell) in storage order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &Cell)> + '_ {
        let height = self.height as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i / height) as i32, (i % height) as i32, c))
    }

    /// Count cells of the given material
    pub fn count(&self, kind: MaterialKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }
}
