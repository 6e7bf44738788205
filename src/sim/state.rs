//! Simulation state
//!
//! Owns the arena, the bodies and the behavior flags. Bodies are stored in
//! a flat vector ordered by id; callers only ever see them through shared
//! references or render snapshots.

use glam::DVec2;
use serde::Serialize;

use super::body::{BallInstance, Body, BodySpec};
use super::config::SimConfig;
use crate::error::{Result, SimError};

/// A running ball simulation
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    width: f64,
    height: f64,
    config: SimConfig,
    /// Sorted by id; order never changes after construction
    pub(crate) bodies: Vec<Body>,
    /// Number of non-empty steps taken
    pub(crate) time_ticks: u64,
    /// Total simulated time (s)
    pub(crate) elapsed: f64,
}

impl Simulation {
    /// Build a simulation, rejecting any configuration that could not run
    ///
    /// Ids are assigned in the order of `specs`, starting at 0.
    pub fn new(specs: &[BodySpec], width: f64, height: f64, config: SimConfig) -> Result<Self> {
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(SimError::InvalidArena { width, height });
        }

        let limit = width.min(height) / 2.0;
        for (index, spec) in specs.iter().enumerate() {
            validate_spec(index, spec, width, height, limit)?;
        }

        let bodies: Vec<Body> = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| Body::from_spec(i as u32, spec))
            .collect();

        log::info!(
            "Simulation: {} bodies in {}x{} arena (gravity={}, anti_clipping={})",
            bodies.len(),
            width,
            height,
            config.gravity_enabled,
            config.anti_clipping_enabled
        );

        Ok(Self {
            width,
            height,
            config,
            bodies,
            time_ticks: 0,
            elapsed: 0.0,
        })
    }

    /// Advance every body by one tick of `dt` seconds
    pub fn step(&mut self, dt: f64) {
        super::tick::tick(self, dt);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Look up a body by its id
    pub fn body(&self, id: u32) -> Option<&Body> {
        // Ids are dense and match the index
        self.bodies.get(id as usize).filter(|b| b.id == id)
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Total kinetic energy of all bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Total linear momentum of all bodies
    pub fn momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Render-facing view of the current positions
    pub fn snapshot(&self) -> Vec<BallInstance> {
        self.bodies.iter().map(BallInstance::from).collect()
    }
}

fn validate_spec(index: usize, spec: &BodySpec, width: f64, height: f64, limit: f64) -> Result<()> {
    let BodySpec {
        x,
        y,
        vx,
        vy,
        radius,
        mass,
    } = *spec;

    if !(radius > 0.0 && radius.is_finite()) {
        return Err(SimError::InvalidRadius { index, radius });
    }
    if !(mass > 0.0 && mass.is_finite()) {
        return Err(SimError::InvalidMass { index, mass });
    }
    if ![x, y, vx, vy].iter().all(|v| v.is_finite()) {
        return Err(SimError::NonFiniteState { index });
    }
    if radius > limit {
        return Err(SimError::BodyTooLarge {
            index,
            radius,
            limit,
        });
    }
    if x < radius || x > width - radius || y < radius || y > height - radius {
        return Err(SimError::OutOfBounds { index, x, y });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAGS_OFF: SimConfig = SimConfig::new(false, false, false);

    #[test]
    fn test_new_assigns_ids_in_order() {
        let specs = [
            BodySpec::new(1.0, 1.0, 0.0, 0.0, 0.5, 1.0),
            BodySpec::new(3.0, 1.0, 0.0, 0.0, 0.5, 1.0),
            BodySpec::new(5.0, 1.0, 0.0, 0.0, 0.5, 1.0),
        ];
        let sim = Simulation::new(&specs, 10.0, 10.0, FLAGS_OFF).unwrap();

        let ids: Vec<u32> = sim.bodies().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(sim.body(2).unwrap().pos, DVec2::new(5.0, 1.0));
        assert!(sim.body(3).is_none());
        assert_eq!(sim.time_ticks(), 0);
    }

    #[test]
    fn test_empty_simulation_is_valid() {
        let sim = Simulation::new(&[], 4.0, 3.0, FLAGS_OFF).unwrap();
        assert!(sim.bodies().is_empty());
        assert_eq!(sim.kinetic_energy(), 0.0);
        assert_eq!(sim.momentum(), DVec2::ZERO);
    }

    #[test]
    fn test_rejects_bad_arena() {
        for (w, h) in [(0.0, 10.0), (10.0, -1.0), (f64::NAN, 10.0), (f64::INFINITY, 1.0)] {
            let err = Simulation::new(&[], w, h, FLAGS_OFF).unwrap_err();
            assert!(matches!(err, SimError::InvalidArena { .. }));
        }
    }

    #[test]
    fn test_rejects_non_positive_radius_and_mass() {
        let bad_radius = [BodySpec::new(5.0, 5.0, 0.0, 0.0, 0.0, 1.0)];
        assert!(matches!(
            Simulation::new(&bad_radius, 10.0, 10.0, FLAGS_OFF),
            Err(SimError::InvalidRadius { index: 0, .. })
        ));

        let bad_mass = [
            BodySpec::new(2.0, 2.0, 0.0, 0.0, 0.5, 1.0),
            BodySpec::new(5.0, 5.0, 0.0, 0.0, 0.5, -2.0),
        ];
        assert!(matches!(
            Simulation::new(&bad_mass, 10.0, 10.0, FLAGS_OFF),
            Err(SimError::InvalidMass { index: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_state() {
        let specs = [BodySpec::new(5.0, 5.0, f64::NAN, 0.0, 0.5, 1.0)];
        assert!(matches!(
            Simulation::new(&specs, 10.0, 10.0, FLAGS_OFF),
            Err(SimError::NonFiniteState { index: 0 })
        ));
    }

    #[test]
    fn test_rejects_body_wider_than_arena() {
        // Half of the smaller extent is 2.0
        let specs = [BodySpec::new(5.0, 2.0, 0.0, 0.0, 2.5, 1.0)];
        let err = Simulation::new(&specs, 10.0, 4.0, FLAGS_OFF).unwrap_err();
        assert!(matches!(err, SimError::BodyTooLarge { limit, .. } if limit == 2.0));

        // Exactly half fits
        let specs = [BodySpec::new(5.0, 2.0, 0.0, 0.0, 2.0, 1.0)];
        assert!(Simulation::new(&specs, 10.0, 4.0, FLAGS_OFF).is_ok());
    }

    #[test]
    fn test_rejects_body_outside_walls() {
        let specs = [BodySpec::new(9.8, 5.0, 0.0, 0.0, 0.5, 1.0)];
        assert!(matches!(
            Simulation::new(&specs, 10.0, 10.0, FLAGS_OFF),
            Err(SimError::OutOfBounds { index: 0, .. })
        ));

        // Touching the floor is fine
        let specs = [BodySpec::new(1.0, 0.2, 0.0, 9.0, 0.2, 1.0)];
        assert!(Simulation::new(&specs, 4.0, 3.0, FLAGS_OFF).is_ok());
    }

    #[test]
    fn test_diagnostics_and_snapshot() {
        let specs = [
            BodySpec::new(2.0, 2.0, 1.0, 0.0, 0.5, 2.0),
            BodySpec::new(6.0, 2.0, 0.0, -2.0, 0.25, 1.0),
        ];
        let sim = Simulation::new(&specs, 10.0, 10.0, FLAGS_OFF).unwrap();

        assert!((sim.kinetic_energy() - 3.0).abs() < 1e-12);
        assert_eq!(sim.momentum(), DVec2::new(2.0, -2.0));

        let snap = sim.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[1].id, 1);
        assert_eq!(snap[1].position, [6.0, 2.0]);
        assert_eq!(snap[1].radius, 0.25);
    }
}
