//! Body entity and its boundary types
//!
//! A `Body` carries state only. Every physics rule is applied to it from
//! the outside by the step pipeline.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Initial conditions for one ball, as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub mass: f64,
}

impl BodySpec {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64, mass: f64) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            radius,
            mass,
        }
    }
}

/// A simulated ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Stable id, assigned in construction order and never reused
    pub id: u32,
    /// Centre position (m, origin bottom-left, y up)
    pub pos: DVec2,
    /// Velocity (m/s)
    pub vel: DVec2,
    pub radius: f64,
    pub mass: f64,
}

impl Body {
    pub(crate) fn from_spec(id: u32, spec: &BodySpec) -> Self {
        Self {
            id,
            pos: DVec2::new(spec.x, spec.y),
            vel: DVec2::new(spec.vx, spec.vy),
            radius: spec.radius,
            mass: spec.mass,
        }
    }

    /// Kinetic energy ½mv²
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// Linear momentum mv
    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }
}

/// Per-ball record handed to a renderer between steps
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BallInstance {
    pub id: u32,
    pub position: [f32; 2],
    pub radius: f32,
}

impl From<&Body> for BallInstance {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            position: [body.pos.x as f32, body.pos.y as f32],
            radius: body.radius as f32,
        }
    }
}
