//! CPU pixel buffer for PNG snapshots of the grid

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use openbox_core::Simulation;
use openbox_core::world::RenderCell;

/// RGBA pixel buffer, one `scale`x`scale` block per cell
pub struct PixelRenderer {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// RGBA pixel buffer (4 bytes per pixel)
    pub buffer: Vec<u8>,
}

impl PixelRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0u8; width * height * 4],
        }
    }

    /// Sized to hold a `grid_width`x`grid_height` grid at `scale`
    pub fn for_grid(grid_width: i32, grid_height: i32, scale: u32) -> Self {
        let scale = scale.max(1) as usize;
        Self::new(
            grid_width.max(0) as usize * scale,
            grid_height.max(0) as usize * scale,
        )
    }

    /// Draw the cells over a black background. Row 0 is the top.
    pub fn render(&mut self, cells: &[RenderCell], scale: u32) {
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }

        let scale = scale.max(1) as i32;
        for cell in cells {
            for dy in 0..scale {
                for dx in 0..scale {
                    self.set_pixel(cell.x * scale + dx, cell.y * scale + dy, cell.color);
                }
            }
        }
    }

    /// Set a single pixel; off-buffer writes are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = (y as usize * self.width + x as usize) * 4;
            self.buffer[idx..idx + 4].copy_from_slice(&color);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut color = [0; 4];
        color.copy_from_slice(&self.buffer[idx..idx + 4]);
        Some(color)
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        use image::{ImageBuffer, Rgba};

        let img: ImageBuffer<Rgba<u8>, _> = ImageBuffer::from_raw(
            self.width as u32,
            self.height as u32,
            self.buffer.as_slice(),
        )
        .ok_or_else(|| anyhow!("Failed to create image buffer"))?;

        img.save(path)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        Ok(())
    }
}

/// Render the simulation and write it as a PNG
pub fn save_snapshot(sim: &Simulation, scale: u32, path: &Path) -> Result<()> {
    let world = sim.world();
    let mut renderer = PixelRenderer::for_grid(world.width(), world.height(), scale);
    renderer.render(&sim.render_snapshot(), scale);
    renderer.save_png(path)?;

    log::info!(
        "Snapshot saved to {} ({}x{})",
        path.display(),
        renderer.width,
        renderer.height
    );
    Ok(())
}
