//! Fixed timestep driver
//!
//! Turns whatever frame time the caller measured into a whole number of
//! fixed `step` calls, carrying the remainder over to the next frame.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::{Result, SimError};
use crate::sim::Simulation;

#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    sim: Simulation,
    accumulator: f64,
    dt: f64,
    max_substeps: u32,
}

impl FixedStepDriver {
    /// Drive at `SIM_DT` with at most `MAX_SUBSTEPS` steps per frame
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            accumulator: 0.0,
            dt: SIM_DT,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Drive at a custom step; `dt` must be positive and finite
    pub fn with_timestep(sim: Simulation, dt: f64, max_substeps: u32) -> Result<Self> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(SimError::InvalidTimestep { dt });
        }
        Ok(Self {
            sim,
            accumulator: 0.0,
            dt,
            max_substeps,
        })
    }

    /// Feed one frame's worth of wall-clock time, returning the steps run
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            self.sim.step(self.dt);
            self.accumulator -= self.dt;
            substeps += 1;
        }
        substeps
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.dt
    }

    pub fn timestep(&self) -> f64 {
        self.dt
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn into_simulation(self) -> Simulation {
        self.sim
    }
}
