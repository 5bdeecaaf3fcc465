//! # Openbox - headless falling-sand sandbox
//!
//! Scenes, scripted scenarios and PNG snapshots on top of `openbox-core`.

pub mod app;
pub mod config;
pub mod scenario;
pub mod scenes;
pub mod snapshot;

pub use openbox_core::simulation;
pub use openbox_core::world;
