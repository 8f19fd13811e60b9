//! Time integration
//!
//! Bodies are advanced with a fixed-step explicit scheme: the resultant
//! force is held constant over the step, position moves by
//! `v₀·dt + ½·a·dt²` and velocity by `a·dt`.

use nalgebra::Vector2;

use crate::config::{TickOrdering, validate_time_step};
use crate::error::Result;
use crate::forces::ForceModel;
use crate::state::SystemState;

/// A time integrator for a body collection
pub trait Integrator: Send + Sync {
    /// Advance every movable body in `state` by one step of `dt`
    ///
    /// On error `state` may be partially updated.
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) -> Result<()>;

    /// Advance by `n_steps` steps, stopping at the first error
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> Result<()> {
        for _ in 0..n_steps {
            self.step(state, dt, force)?;
        }
        Ok(())
    }
}

/// Explicit Euler-style integrator with constant acceleration over a step
///
/// # Examples
///
/// ```
/// use gravity_sim::body::Body;
/// use gravity_sim::forces::AxisSignGravity;
/// use gravity_sim::integrator::{ExplicitEuler, Integrator};
/// use gravity_sim::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let a = Body::new(1.0e24, 1.0e6, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap();
/// let b = Body::new(1.0e24, 1.0e6, Point2::new(1.0e8, 0.0), Vector2::zeros()).unwrap();
/// let mut state = SystemState::from_bodies(vec![a, b]);
///
/// ExplicitEuler::default().step(&mut state, 20.0, &AxisSignGravity).unwrap();
///
/// assert!(state.bodies[0].velocity.x > 0.0);
/// assert!(state.bodies[1].velocity.x < 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler {
    pub ordering: TickOrdering,
}

impl ExplicitEuler {
    pub fn new(ordering: TickOrdering) -> Self {
        Self { ordering }
    }

    /// Each body moves right after its force is computed, so later bodies
    /// feel the already-moved earlier ones
    fn step_sequential(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) -> Result<()> {
        for i in 0..state.bodies.len() {
            if !state.bodies[i].movable {
                continue;
            }
            let f = force.net_force(&state.bodies[i], &state.bodies)?;
            state.bodies[i].apply_force(f, dt);
        }
        Ok(())
    }

    /// All forces come from the start-of-step positions
    fn step_synchronous(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) -> Result<()> {
        let forces: Vec<Vector2<f64>> = state
            .bodies
            .iter()
            .map(|body| {
                if body.movable {
                    force.net_force(body, &state.bodies)
                } else {
                    Ok(Vector2::zeros())
                }
            })
            .collect::<Result<_>>()?;

        state
            .bodies
            .iter_mut()
            .zip(forces)
            .for_each(|(body, f)| body.apply_force(f, dt));
        Ok(())
    }
}

impl Integrator for ExplicitEuler {
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) -> Result<()> {
        validate_time_step(dt)?;
        match self.ordering {
            TickOrdering::Sequential => self.step_sequential(state, dt, force),
            TickOrdering::Synchronous => self.step_synchronous(state, dt, force),
        }
    }
}
