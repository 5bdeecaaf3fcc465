//! Read-only view of the grid for renderers

use super::grid::Grid;

/// Above this a cell glows redder
pub const HOT_TINT_THRESHOLD: f32 = 100.0;
/// Below this a cell turns bluer
pub const COLD_TINT_THRESHOLD: f32 = 0.0;

/// One visible cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderCell {
    pub x: i32,
    pub y: i32,
    pub color: [u8; 4],
}

/// Shift a display color by temperature
///
/// Hot: red up by (t-100)/4, green and blue down by (t-100)/8.
/// Cold: red and green down by (-t)/8, blue up by (-t)/4.
/// Offsets truncate towards zero; channels clamp to 0..=255; alpha is kept.
/// Any temperature is accepted, including infinities.
pub fn temperature_tint(color: [u8; 4], temperature: f32) -> [u8; 4] {
    let [r, g, b, a] = color;
    let shift = |channel: u8, offset: f32| -> u8 {
        (f32::from(channel) + offset.trunc()).clamp(0.0, 255.0) as u8
    };

    if temperature > HOT_TINT_THRESHOLD {
        let heat = temperature - HOT_TINT_THRESHOLD;
        [
            shift(r, heat / 4.0),
            shift(g, -heat / 8.0),
            shift(b, -heat / 8.0),
            a,
        ]
    } else if temperature < COLD_TINT_THRESHOLD {
        let cold = -temperature;
        [
            shift(r, -cold / 8.0),
            shift(g, -cold / 8.0),
            shift(b, cold / 4.0),
            a,
        ]
    } else {
        color
    }
}

/// Every non-Empty cell with its tinted display color, in storage order
pub fn render_snapshot(grid: &Grid) -> Vec<RenderCell> {
    grid.iter()
        .filter(|(_, _, cell)| !cell.is_empty())
        .map(|(x, y, cell)| RenderCell {
            x,
            y,
            color: temperature_tint(cell.color, cell.temperature),
        })
        .collect()
}
