//! Behavior flags for a simulation
//!
//! No `Default`: every caller states all three flags.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Apply constant downward acceleration `G` each step
    pub gravity_enabled: bool,
    /// Push overlapping balls apart after collision response (positions only)
    pub anti_clipping_enabled: bool,
    /// Emit one `debug` line per body per step
    pub debug_logging_enabled: bool,
}

impl SimConfig {
    pub const fn new(
        gravity_enabled: bool,
        anti_clipping_enabled: bool,
        debug_logging_enabled: bool,
    ) -> Self {
        Self {
            gravity_enabled,
            anti_clipping_enabled,
            debug_logging_enabled,
        }
    }
}
