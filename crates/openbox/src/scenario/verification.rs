//! Verification conditions checked against the grid after a scenario

use openbox_core::Simulation;
use openbox_core::simulation::{Cell, MaterialKind};
use serde::{Deserialize, Serialize};

/// Conditions that can be verified against simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VerificationCondition {
    // === MATERIAL CHECKS ===
    /// Assert material at a specific cell
    MaterialAt {
        x: i32,
        y: i32,
        expected: MaterialKind,
    },

    /// Assert exact material count in region
    MaterialCount {
        material: MaterialKind,
        region: Region,
        expected: usize,
        tolerance: Option<usize>, // Allow ±N variance
    },

    /// Assert material count within range
    MaterialCountRange {
        material: MaterialKind,
        region: Region,
        min: usize,
        max: usize,
    },

    /// Assert nothing but Empty in region
    RegionEmpty { region: Region },

    /// Assert total particles (not Empty, not Wall) within range
    ParticleCount { min: usize, max: usize },

    // === PHYSICS CHECKS ===
    /// Assert every cell temperature in region lies in [min, max]
    TemperatureRange { region: Region, min: f32, max: f32 },

    // === LOGICAL OPERATORS ===
    /// All conditions must pass
    All {
        conditions: Vec<VerificationCondition>,
    },

    /// Any condition must pass
    Any {
        conditions: Vec<VerificationCondition>,
    },

    /// Condition must NOT pass
    Not {
        condition: Box<VerificationCondition>,
    },
}

/// Spatial region for verification, in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Region {
    /// Inclusive rectangle
    Rect {
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    },

    /// Disc, inclusive radius
    Circle {
        center_x: i32,
        center_y: i32,
        radius: u32,
    },

    /// The whole grid
    Whole,
}

impl Region {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        match *self {
            Region::Rect {
                min_x,
                min_y,
                max_x,
                max_y,
            } => x >= min_x && x <= max_x && y >= min_y && y <= max_y,
            Region::Circle {
                center_x,
                center_y,
                radius,
            } => {
                let (dx, dy) = ((x - center_x) as i64, (y - center_y) as i64);
                dx * dx + dy * dy <= (radius as i64) * (radius as i64)
            }
            Region::Whole => true,
        }
    }
}

/// Result of a verification check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub passed: bool,
    pub message: String,
    pub actual_value: Option<String>, // For debugging
}

impl VerificationCondition {
    /// Evaluate condition against simulation state
    pub fn evaluate(&self, sim: &Simulation) -> VerificationResult {
        match self {
            VerificationCondition::MaterialAt { x, y, expected } => {
                let actual = sim.probe(*x, *y).map(|p| p.kind);
                let passed = actual == Some(*expected);

                VerificationResult {
                    passed,
                    message: format!(
                        "Material at ({}, {}): expected {}, got {}",
                        x,
                        y,
                        expected,
                        actual.map_or("out of bounds".to_string(), |k| k.to_string())
                    ),
                    actual_value: actual.map(|k| k.to_string()),
                }
            }

            VerificationCondition::MaterialCount {
                material,
                region,
                expected,
                tolerance,
            } => {
                let actual = count_material_in_region(sim, *material, region);
                let tol = tolerance.unwrap_or(0);
                let passed = actual >= expected.saturating_sub(tol) && actual <= expected + tol;

                VerificationResult {
                    passed,
                    message: format!(
                        "{} count in {:?}: expected {}±{}, got {}",
                        material, region, expected, tol, actual
                    ),
                    actual_value: Some(actual.to_string()),
                }
            }

            VerificationCondition::MaterialCountRange {
                material,
                region,
                min,
                max,
            } => {
                let actual = count_material_in_region(sim, *material, region);
                let passed = actual >= *min && actual <= *max;

                VerificationResult {
                    passed,
                    message: format!(
                        "{} count in {:?}: expected {}-{}, got {}",
                        material, region, min, max, actual
                    ),
                    actual_value: Some(actual.to_string()),
                }
            }

            VerificationCondition::RegionEmpty { region } => {
                let occupied = cells_in_region(sim, region)
                    .filter(|cell| !cell.is_empty())
                    .count();

                VerificationResult {
                    passed: occupied == 0,
                    message: format!("Region {:?} empty: {} occupied cells", region, occupied),
                    actual_value: Some(occupied.to_string()),
                }
            }

            VerificationCondition::ParticleCount { min, max } => {
                let actual = sim.particle_count();

                VerificationResult {
                    passed: actual >= *min && actual <= *max,
                    message: format!("Particle count: expected {}-{}, got {}", min, max, actual),
                    actual_value: Some(actual.to_string()),
                }
            }

            VerificationCondition::TemperatureRange { region, min, max } => {
                let (lowest, highest) = cells_in_region(sim, region).fold(
                    (f32::INFINITY, f32::NEG_INFINITY),
                    |(lo, hi), cell| (lo.min(cell.temperature), hi.max(cell.temperature)),
                );
                // An empty region passes vacuously
                let passed = lowest > highest || (lowest >= *min && highest <= *max);

                VerificationResult {
                    passed,
                    message: format!(
                        "Temperature in {:?}: expected {:.2}..={:.2}, got {:.2}..={:.2}",
                        region, min, max, lowest, highest
                    ),
                    actual_value: Some(format!("{:.2}..={:.2}", lowest, highest)),
                }
            }

            VerificationCondition::All { conditions } => {
                let results: Vec<_> = conditions.iter().map(|c| c.evaluate(sim)).collect();
                let failed: Vec<_> = results.iter().filter(|r| !r.passed).collect();

                VerificationResult {
                    passed: failed.is_empty(),
                    message: format!(
                        "All of {} conditions: {} failed",
                        results.len(),
                        failed.len()
                    ),
                    actual_value: failed.first().map(|r| r.message.clone()),
                }
            }

            VerificationCondition::Any { conditions } => {
                let passed = conditions.iter().any(|c| c.evaluate(sim).passed);

                VerificationResult {
                    passed,
                    message: format!(
                        "Any of {} conditions: {}",
                        conditions.len(),
                        if passed { "one passed" } else { "none passed" }
                    ),
                    actual_value: None,
                }
            }

            VerificationCondition::Not { condition } => {
                let inner = condition.evaluate(sim);

                VerificationResult {
                    passed: !inner.passed,
                    message: format!("NOT ({})", inner.message),
                    actual_value: inner.actual_value,
                }
            }
        }
    }
}

fn cells_in_region<'a>(sim: &'a Simulation, region: &'a Region) -> impl Iterator<Item = &'a Cell> + 'a {
    sim.world()
        .grid()
        .iter()
        .filter(move |(x, y, _)| region.contains(*x, *y))
        .map(|(_, _, cell)| cell)
}

fn count_material_in_region(sim: &Simulation, material: MaterialKind, region: &Region) -> usize {
    cells_in_region(sim, region)
        .filter(|cell| cell.kind == material)
        .count()
}
