//! Fixed timestep simulation tick
//!
//! Each body is processed in id order, and every phase writes straight back
//! into the shared body list, so later bodies see the velocities earlier
//! bodies already produced this tick:
//!
//! 1. debug line (optional)
//! 2. remember the pre-step position
//! 3. explicit Euler: `pos += dt * vel`
//! 4. elastic response against every other touching body
//! 5. wall reflection with position restore
//! 6. anti-clipping separation (optional)
//! 7. gravity, unless resting on the floor (optional)

use super::body::Body;
use super::collision::{Contact, reflect_walls, resolve_ball_collision, separate_overlap};
use super::state::Simulation;
use crate::consts::G;

/// Advance the simulation by one step of `dt` seconds
///
/// `dt == 0` is a no-op. Negative or non-finite `dt` is ignored.
pub fn tick(state: &mut Simulation, dt: f64) {
    if dt == 0.0 {
        return;
    }
    if !(dt > 0.0 && dt.is_finite()) {
        log::warn!("Ignoring step with invalid dt: {}", dt);
        return;
    }

    let config = *state.config();
    let (width, height) = (state.width(), state.height());
    let bodies = &mut state.bodies;

    for i in 0..bodies.len() {
        if config.debug_logging_enabled {
            log::debug!("{}", debug_line(&bodies[i]));
        }

        let prev = bodies[i].pos;

        {
            let b = &mut bodies[i];
            b.pos += dt * b.vel;
        }

        for j in 0..bodies.len() {
            if j == i {
                continue;
            }
            let (a, other) = pair_mut(bodies, i, j);
            if resolve_ball_collision(a, other) == Contact::Degenerate {
                log::debug!("Skipping coincident pair {} / {}", a.id, other.id);
            }
        }

        reflect_walls(&mut bodies[i], prev, width, height);

        if config.anti_clipping_enabled {
            for j in 0..bodies.len() {
                if j == i {
                    continue;
                }
                let (a, other) = pair_mut(bodies, i, j);
                separate_overlap(a, other, width, height);
            }
        }

        if config.gravity_enabled {
            let b = &mut bodies[i];
            if b.pos.y > b.radius {
                b.vel.y -= G * dt;
            }
        }
    }

    state.time_ticks += 1;
    state.elapsed += dt;
}

/// Per-body kinematic state at fixed precision
pub fn debug_line(b: &Body) -> String {
    format!(
        "ball {}: x={:.4} y={:.4} vx={:.4} vy={:.4}",
        b.id, b.pos.x, b.pos.y, b.vel.x, b.vel.y
    )
}

/// Borrow two distinct bodies mutably, returned in `(i, j)` order
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
