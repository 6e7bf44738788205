//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep supplied by the caller
//! - Stable iteration order (by body ID)
//! - No rendering, timing or platform dependencies

pub mod body;
pub mod collision;
pub mod config;
pub mod state;
pub mod tick;
pub mod vector;

pub use body::{BallInstance, Body, BodySpec};
pub use collision::{
    Contact, WallHit, elastic_normal_velocities, is_colliding, reflect_walls,
    resolve_ball_collision, separate_overlap,
};
pub use config::SimConfig;
pub use state::Simulation;
pub use tick::tick;
