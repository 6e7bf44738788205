//! Error types
//!
//! Every configuration problem is caught when a simulation is built.
//! Stepping never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid arena {width} x {height}: both extents must be positive and finite")]
    InvalidArena { width: f64, height: f64 },

    #[error("body {index}: radius {radius} must be positive and finite")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("body {index}: mass {mass} must be positive and finite")]
    InvalidMass { index: usize, mass: f64 },

    #[error("body {index}: position and velocity must be finite")]
    NonFiniteState { index: usize },

    #[error("body {index}: radius {radius} exceeds half the smaller arena extent ({limit})")]
    BodyTooLarge { index: usize, radius: f64, limit: f64 },

    #[error("body {index}: centre ({x}, {y}) is not inside the arena")]
    OutOfBounds { index: usize, x: f64, y: f64 },

    #[error("invalid timestep {dt}: must be positive and finite")]
    InvalidTimestep { dt: f64 },

    #[error("scene: {0}")]
    Scene(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for simulation setup
pub type Result<T> = std::result::Result<T, SimError>;
