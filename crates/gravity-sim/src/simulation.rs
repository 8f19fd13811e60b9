//! Tick driver tying the store, integrator, force model and collision pass
//! together

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::forces::{ForceModel, force_model_for};
use crate::integrator::{ExplicitEuler, Integrator};
use crate::store::BodyStore;

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Bodies in the snapshot the tick ran on
    pub bodies: usize,
    /// Collisions resolved during the tick
    pub collisions: usize,
    /// Bodies whose new state made it back into the store
    pub committed: usize,
}

/// Advances a shared [`BodyStore`] one fixed tick at a time
///
/// # Examples
///
/// ```
/// use gravity_sim::body::Body;
/// use gravity_sim::config::SimulationConfig;
/// use gravity_sim::simulation::Simulation;
/// use gravity_sim::store::BodyStore;
/// use nalgebra::{Point2, Vector2};
///
/// let store = BodyStore::new();
/// store.insert(Body::new(1.0e24, 1.0e6, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap());
/// store.insert(Body::new(1.0e24, 1.0e6, Point2::new(1.0e8, 0.0), Vector2::zeros()).unwrap());
///
/// let mut sim = Simulation::new(store.clone(), SimulationConfig::default()).unwrap();
/// sim.run(10).unwrap();
///
/// assert_eq!(sim.time(), 200.0);
/// ```
pub struct Simulation {
    store: BodyStore,
    config: SimulationConfig,
    integrator: Box<dyn Integrator>,
    force: Box<dyn ForceModel>,
    time: f64,
    ticks: u64,
}

impl Simulation {
    /// Builds a simulation from a validated configuration
    pub fn new(store: BodyStore, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            integrator: Box::new(ExplicitEuler::new(config.ordering)),
            force: force_model_for(config.force_decomposition),
            store,
            config,
            time: 0.0,
            ticks: 0,
        })
    }

    /// Replaces the force model chosen by the configuration
    pub fn with_force<F: ForceModel + 'static>(mut self, force: F) -> Self {
        self.force = Box::new(force);
        self
    }

    /// Replaces the integrator chosen by the configuration
    pub fn with_integrator<I: Integrator + 'static>(mut self, integrator: I) -> Self {
        self.integrator = Box::new(integrator);
        self
    }

    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Elapsed simulation time
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one tick: integrate, resolve collisions, commit
    ///
    /// If any body pair is degenerate the tick is abandoned and the store is
    /// left as it was.
    pub fn step(&mut self) -> Result<TickReport> {
        let mut state = self.store.snapshot();
        log::trace!(
            "tick {} at t={} over {} bodies (generation {})",
            self.ticks,
            self.time,
            state.body_count(),
            state.generation
        );

        let outcome = self
            .integrator
            .step(&mut state, self.config.time_step, self.force.as_ref())
            .and_then(|()| {
                if self.config.resolve_collisions {
                    state.resolve_collisions()
                } else {
                    Ok(0)
                }
            });
        let collisions = match outcome {
            Ok(collisions) => collisions,
            Err(err) => {
                log::warn!("tick {} abandoned: {err}", self.ticks);
                return Err(err);
            }
        };

        let committed = self.store.commit(&state);
        self.time += self.config.time_step;
        self.ticks += 1;

        Ok(TickReport {
            bodies: state.body_count(),
            collisions,
            committed,
        })
    }

    /// Runs `n` ticks, stopping at the first error
    ///
    /// Returns the total number of collisions resolved.
    pub fn run(&mut self, n: usize) -> Result<usize> {
        let mut collisions = 0;
        for _ in 0..n {
            collisions += self.step()?.collisions;
        }
        Ok(collisions)
    }
}
