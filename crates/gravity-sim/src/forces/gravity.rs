//! Direct O(N²) Newtonian gravity

use nalgebra::Vector2;

use crate::body::Body;
use crate::error::{Result, SimError};
use crate::forces::ForceModel;
use crate::physics::gravitational_force;

/// Pairwise gravity decomposed with an unsigned angle and per-axis signs
///
/// This is the classic formulation: the magnitude of each pairwise force is
/// split with `cos`/`sin` of the directionless axis angle, and each
/// component takes the sign of the coordinate delta on its own axis. See
/// [`Body::net_force`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisSignGravity;

impl ForceModel for AxisSignGravity {
    fn net_force(&self, body: &Body, bodies: &[Body]) -> Result<Vector2<f64>> {
        body.net_force(bodies)
    }
}

/// Pairwise gravity summed as vectors along the line of centres
///
/// Each pair contributes `F · (r_b - r_a) / |r_b - r_a|`. Used as the
/// reference the axis-sign formulation is checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectGravity;

impl ForceModel for DirectGravity {
    fn net_force(&self, body: &Body, bodies: &[Body]) -> Result<Vector2<f64>> {
        bodies
            .iter()
            .filter(|other| other.id() != body.id())
            .try_fold(Vector2::zeros(), |acc, other| {
                let dr = other.position - body.position;
                let r = dr.magnitude();
                let degenerate = || SimError::DegenerateConfiguration {
                    a: body.id(),
                    b: other.id(),
                };
                let magnitude =
                    gravitational_force(body.mass(), other.mass(), r).map_err(|_| degenerate())?;
                let total = acc + dr * (magnitude / r);
                if !(total.x.is_finite() && total.y.is_finite()) {
                    return Err(degenerate());
                }
                Ok(total)
            })
    }
}
