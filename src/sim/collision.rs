//! Collision detection and response for balls in a box
//!
//! Ball-ball contacts are resolved as frictionless, perfectly elastic
//! impacts: velocities are split into components along the contact normal
//! and its tangent, the normal components go through the 1-D elastic
//! formula and the tangential components pass through untouched.
//! A pair that is already moving apart is left alone, so a contact is
//! only ever resolved once no matter which ball of the pair is checked.

use glam::DVec2;

use super::body::Body;
use super::vector::{add, distance, dot, magnitude, normalize, perpendicular, scale, sub};
use crate::consts::COLLISION_EPSILON;

/// Outcome of checking one pair of balls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Not touching, or already moving apart; nothing changed
    Separate,
    /// Touching, velocities exchanged along the normal
    Resolved,
    /// Centres coincide, no normal exists; pair skipped this step
    Degenerate,
}

/// Which axes a wall check reflected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Two balls count as touching once their gap closes to within epsilon
#[inline]
pub fn is_colliding(a: &Body, b: &Body) -> bool {
    distance(a.pos, b.pos) <= a.radius + b.radius + COLLISION_EPSILON
}

/// 1-D elastic collision for unequal masses
///
/// Returns the post-impact velocities `(v1, v2)`. Conserves both
/// `m1*u1 + m2*u2` and `m1*u1² + m2*u2²`.
#[inline]
pub fn elastic_normal_velocities(u1: f64, m1: f64, u2: f64, m2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1 = (u1 * (m1 - m2) + 2.0 * m2 * u2) / total;
    let v2 = (u2 * (m2 - m1) + 2.0 * m1 * u1) / total;
    (v1, v2)
}

/// Check a pair and, if touching and approaching, apply the elastic
/// response to both
pub fn resolve_ball_collision(a: &mut Body, b: &mut Body) -> Contact {
    if !is_colliding(a, b) {
        return Contact::Separate;
    }

    let Some(normal) = normalize(sub(b.pos, a.pos)) else {
        return Contact::Degenerate;
    };
    if dot(sub(b.vel, a.vel), normal) >= 0.0 {
        return Contact::Separate;
    }
    let tangent = perpendicular(normal);

    let u1 = dot(a.vel, normal);
    let u2 = dot(b.vel, normal);
    let t1 = dot(a.vel, tangent);
    let t2 = dot(b.vel, tangent);

    let (v1, v2) = elastic_normal_velocities(u1, a.mass, u2, b.mass);

    a.vel = add(scale(normal, v1), scale(tangent, t1));
    b.vel = add(scale(normal, v2), scale(tangent, t2));

    Contact::Resolved
}

/// Reflect off the arena walls, axis by axis
///
/// An axis whose coordinate left `[radius, extent - radius]` gets its
/// velocity component negated and its coordinate put back to `prev`.
pub fn reflect_walls(body: &mut Body, prev: DVec2, width: f64, height: f64) -> WallHit {
    let r = body.radius;
    let mut hit = WallHit::default();

    if body.pos.x < r || body.pos.x > width - r {
        body.vel.x = -body.vel.x;
        body.pos.x = prev.x;
        hit.x = true;
    }

    if body.pos.y < r || body.pos.y > height - r {
        body.vel.y = -body.vel.y;
        body.pos.y = prev.y;
        hit.y = true;
    }

    hit
}

/// Push two overlapping balls apart until they are exactly tangent
///
/// Each ball moves half the overlap along the line between centres, then
/// is clamped back inside `[radius, extent - radius]` so a push can never
/// leave a ball inside a wall. Velocities are never touched. Returns the
/// overlap that was removed, or `None` when the balls do not overlap or
/// their centres coincide.
pub fn separate_overlap(a: &mut Body, b: &mut Body, width: f64, height: f64) -> Option<f64> {
    let delta = sub(b.pos, a.pos);
    let overlap = a.radius + b.radius - magnitude(delta);
    if overlap <= 0.0 {
        return None;
    }

    let normal = normalize(delta)?;
    let push = scale(normal, overlap * 0.5);
    a.pos = sub(a.pos, push);
    b.pos = add(b.pos, push);
    clamp_to_arena(a, width, height);
    clamp_to_arena(b, width, height);

    Some(overlap)
}

/// Keep a ball's centre inside the box its radius allows
#[inline]
fn clamp_to_arena(body: &mut Body, width: f64, height: f64) {
    let r = body.radius;
    body.pos.x = body.pos.x.clamp(r, width - r);
    body.pos.y = body.pos.y.clamp(r, height - r);
}
