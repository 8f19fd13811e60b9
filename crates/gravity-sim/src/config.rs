//! Simulation configuration
//!
//! All fields have defaults matching the classic planet simulation: a fixed
//! 20 time-unit tick, bodies updated in collection order and forces split
//! per axis with sign multipliers.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Fixed tick duration in simulation time units
pub const DEFAULT_TIME_STEP: f64 = 20.0;

/// How bodies within one tick observe each other's updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickOrdering {
    /// Bodies move one after another in collection order; a body later in
    /// the collection sees the already-moved positions of earlier ones.
    #[default]
    Sequential,
    /// Every force is computed from the start-of-tick state before any body
    /// moves.
    Synchronous,
}

/// How the resultant force on a body is decomposed into components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceDecomposition {
    /// Unsigned axis angle with per-axis direction signs
    #[default]
    AxisSign,
    /// Plain vector sum along the line of centres
    Vector,
}

/// Tunable parameters for a [`Simulation`](crate::simulation::Simulation)
///
/// # Examples
///
/// ```
/// use gravity_sim::config::{SimulationConfig, TickOrdering};
///
/// let config = SimulationConfig {
///     ordering: TickOrdering::Synchronous,
///     ..SimulationConfig::default()
/// };
/// assert_eq!(config.time_step, 20.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Duration of one tick
    pub time_step: f64,
    pub ordering: TickOrdering,
    pub force_decomposition: ForceDecomposition,
    /// Whether overlapping bodies are separated and bounced each tick
    pub resolve_collisions: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            ordering: TickOrdering::default(),
            force_decomposition: ForceDecomposition::default(),
            resolve_collisions: true,
        }
    }
}

impl SimulationConfig {
    /// Rejects configurations the integrator cannot run with
    pub fn validate(&self) -> Result<()> {
        validate_time_step(self.time_step)
    }
}

pub(crate) fn validate_time_step(dt: f64) -> Result<()> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidTimeStep(dt))
    }
}
