//! Scene descriptions
//!
//! A scene is everything needed to build a `Simulation`: the arena, the
//! behavior flags and the initial ball set. Scenes round-trip through JSON
//! so a driver can keep them next to its own assets.

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::polar_to_cartesian;
use crate::sim::{BodySpec, SimConfig, Simulation};

/// Radius range for generated balls (m)
const RANDOM_RADIUS: (f64, f64) = (0.1, 0.3);
/// Mass range for generated balls (kg)
const RANDOM_MASS: (f64, f64) = (0.5, 3.0);
/// Launch speed range for generated balls (m/s)
const RANDOM_SPEED: (f64, f64) = (0.5, 4.0);
/// Placement attempts per ball before giving up on it
const PLACEMENT_ATTEMPTS: u32 = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub config: SimConfig,
    pub bodies: Vec<BodySpec>,
}

impl Scene {
    /// Two resting balls dropped from different heights
    pub fn classic(width: f64, height: f64, config: SimConfig) -> Self {
        Self {
            width,
            height,
            config,
            bodies: vec![
                BodySpec::new(width / 3.0, height * 0.9, 0.0, 0.0, 0.2, 1.0),
                BodySpec::new(2.0 * width / 3.0, height * 0.7, 0.0, 0.0, 0.3, 1.0),
            ],
        }
    }

    /// Seeded scatter of up to `count` non-overlapping balls
    ///
    /// The same seed always yields the same scene. Balls that cannot be
    /// placed without overlap after a bounded number of tries are dropped,
    /// so a crowded arena may come back with fewer than `count`.
    pub fn random(
        seed: u64,
        count: usize,
        width: f64,
        height: f64,
        config: SimConfig,
    ) -> Result<Self> {
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(SimError::InvalidArena { width, height });
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut bodies: Vec<BodySpec> = Vec::with_capacity(count);

        for _ in 0..count {
            let radius = rng
                .random_range(RANDOM_RADIUS.0..RANDOM_RADIUS.1)
                .min(width.min(height) / 2.0);
            let mass = rng.random_range(RANDOM_MASS.0..RANDOM_MASS.1);
            let speed = rng.random_range(RANDOM_SPEED.0..RANDOM_SPEED.1);
            let theta = rng.random_range(0.0..std::f64::consts::TAU);
            let vel = polar_to_cartesian(speed, theta);

            for _ in 0..PLACEMENT_ATTEMPTS {
                let x = rng.random_range(radius..=width - radius);
                let y = rng.random_range(radius..=height - radius);
                let clear = bodies.iter().all(|b| {
                    let (dx, dy) = (b.x - x, b.y - y);
                    (dx * dx + dy * dy).sqrt() > b.radius + radius
                });
                if clear {
                    bodies.push(BodySpec::new(x, y, vel.x, vel.y, radius, mass));
                    break;
                }
            }
        }

        if bodies.len() < count {
            log::warn!("Placed {} of {} requested balls", bodies.len(), count);
        }

        Ok(Self {
            width,
            height,
            config,
            bodies,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let scene = Self::from_json(&json)?;
        log::info!(
            "Loaded scene from {} ({} balls)",
            path.as_ref().display(),
            scene.bodies.len()
        );
        Ok(scene)
    }

    /// Save the scene as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Validate and build the simulation
    pub fn build(&self) -> Result<Simulation> {
        Simulation::new(&self.bodies, self.width, self.height, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ON: SimConfig = SimConfig::new(true, true, false);

    #[test]
    fn test_classic_scene_builds() {
        let scene = Scene::classic(4.0, 3.0, ALL_ON);
        let sim = scene.build().unwrap();
        assert_eq!(sim.bodies().len(), 2);
        assert!((sim.bodies()[0].pos.y - 2.7).abs() < 1e-12);
        assert_eq!(sim.bodies()[1].radius, 0.3);
    }

    #[test]
    fn test_json_round_trip() {
        let scene = Scene::classic(4.0, 3.0, ALL_ON);
        let json = scene.to_json().unwrap();
        assert!(json.contains("anti_clipping_enabled"));
        assert_eq!(Scene::from_json(&json).unwrap(), scene);
    }

    #[test]
    fn test_parse_hand_written_scene() {
        let json = r#"{
            "width": 10.0,
            "height": 10.0,
            "config": {
                "gravity_enabled": false,
                "anti_clipping_enabled": false,
                "debug_logging_enabled": false
            },
            "bodies": [
                { "x": 4.0, "y": 5.0, "vx": 1.0, "vy": 0.0, "radius": 0.5, "mass": 1.0 },
                { "x": 6.0, "y": 5.0, "vx": 0.0, "vy": 0.0, "radius": 0.5, "mass": 1.0 }
            ]
        }"#;
        let mut sim = Scene::from_json(json).unwrap().build().unwrap();
        sim.step(1.0);
        assert!(sim.bodies()[0].vel.x.abs() < 0.01);
        assert!((sim.bodies()[1].vel.x - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_scene_without_flags_is_rejected() {
        let json = r#"{ "width": 10.0, "height": 10.0, "config": {}, "bodies": [] }"#;
        assert!(matches!(Scene::from_json(json), Err(SimError::Scene(_))));
    }

    #[test]
    fn test_invalid_scene_fails_at_build() {
        let mut scene = Scene::classic(4.0, 3.0, ALL_ON);
        scene.bodies[1].mass = 0.0;
        assert!(matches!(scene.build(), Err(SimError::InvalidMass { index: 1, .. })));
    }

    #[test]
    fn test_random_scene_is_seeded() {
        let a = Scene::random(42, 12, 4.0, 3.0, ALL_ON).unwrap();
        let b = Scene::random(42, 12, 4.0, 3.0, ALL_ON).unwrap();
        let c = Scene::random(43, 12, 4.0, 3.0, ALL_ON).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.bodies, c.bodies);
    }

    #[test]
    fn test_random_scene_is_valid_and_non_overlapping() {
        let scene = Scene::random(7, 20, 4.0, 3.0, ALL_ON).unwrap();
        assert!(!scene.bodies.is_empty());
        let sim = scene.build().unwrap();

        let bodies = sim.bodies();
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                assert!(a.pos.distance(b.pos) > a.radius + b.radius);
            }
        }
    }

    #[test]
    fn test_random_scene_rejects_bad_arena() {
        for (w, h) in [(f64::NAN, 3.0), (4.0, 0.0), (-1.0, 3.0), (4.0, f64::INFINITY)] {
            assert!(matches!(
                Scene::random(1, 5, w, h, ALL_ON),
                Err(SimError::InvalidArena { .. })
            ));
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Scene::load("/nonexistent/scene.json").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("bouncing-balls-{}.json", std::process::id()));
        let scene = Scene::random(1, 5, 4.0, 3.0, ALL_ON).unwrap();
        scene.save(&path).unwrap();
        let loaded = Scene::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, scene);
    }
}
