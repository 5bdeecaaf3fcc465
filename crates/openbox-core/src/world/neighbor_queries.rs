//! Neighbor cell collection utilities

use super::grid::Grid;

/// Offsets of the 8 neighbors (Moore neighborhood)
///
/// Order: NW, N, NE, W, E, SW, S, SE (y grows downwards)
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), // NW
    (0, -1),  // N
    (1, -1),  // NE
    (-1, 0),  // W
    (1, 0),   // E
    (-1, 1),  // SW
    (0, 1),   // S
    (1, 1),   // SE
];

/// Neighbor collection utilities - stateless methods for querying neighboring cells
pub struct NeighborQueries;

impl NeighborQueries {
    /// In-bounds neighbor positions of (x, y), at most 8
    pub fn neighbors(grid: &Grid, x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| grid.in_bounds(nx, ny))
    }

    /// Positions within Euclidean distance `radius` of the center (inclusive),
    /// clipped to the grid
    pub fn cells_in_radius(
        grid: &Grid,
        center_x: i32,
        center_y: i32,
        radius: i32,
    ) -> Vec<(i32, i32)> {
        let mut cells = Vec::new();
        if radius < 0 {
            return cells;
        }

        // Bounding square of the disc, clipped to the grid
        let (cx, cy, r) = (i64::from(center_x), i64::from(center_y), i64::from(radius));
        let x_range = (cx - r).max(0)..=(cx + r).min(i64::from(grid.width()) - 1);
        let y_range = (cy - r).max(0)..=(cy + r).min(i64::from(grid.height()) - 1);

        for y in y_range {
            for x in x_range.clone() {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r * r {
                    cells.push((x as i32, y as i32));
                }
            }
        }

        cells
    }
}
