//! Bouncing Balls - discrete-time 2D rigid-ball physics
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, step pipeline)
//! - `scene`: Scene descriptions with JSON load/save
//! - `driver`: Fixed timestep accumulator for frame-driven callers
//! - `error`: Configuration error taxonomy

pub mod driver;
pub mod error;
pub mod scene;
pub mod sim;

pub use driver::FixedStepDriver;
pub use error::{Result, SimError};
pub use scene::Scene;
pub use sim::{BallInstance, Body, BodySpec, SimConfig, Simulation};

use glam::DVec2;

/// Simulation constants
pub mod consts {
    /// Gravitational acceleration (m/s²)
    pub const G: f64 = 9.82;
    /// Extra distance at which two balls already count as touching (m)
    pub const COLLISION_EPSILON: f64 = 0.001;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time the driver will accept in one go (s)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Drawing scale used by the default window-sized scene
    pub const PIXELS_PER_METER: f64 = 200.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}
