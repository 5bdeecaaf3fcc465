//! Error types for the simulation core

use thiserror::Error;

/// Errors from coordinate-taking grid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("invalid grid dimensions {width}x{height} (need at least 3x2 for the wall border)")]
    InvalidDimensions { width: i32, height: i32 },
}

/// Errors from saving or loading a grid
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("not an OpenBox save file (bad magic)")]
    BadMagic,

    #[error("unsupported save format version {0}")]
    UnsupportedVersion(u32),

    #[error("save is {found:?} but the grid is {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("save file truncated: expected {expected} cell records, read {read}")]
    Truncated { expected: usize, read: usize },

    #[error("cell record {index} holds unknown material {value}")]
    InvalidMaterial { index: usize, value: u8 },
}
