//! Force models
//!
//! A force model turns the current positions of a set of bodies into the
//! resultant force acting on one of them.

use nalgebra::Vector2;

use crate::body::Body;
use crate::config::ForceDecomposition;
use crate::error::Result;

pub mod gravity;


pub use crate::physics::G;
pub use gravity::{AxisSignGravity, DirectGravity};

/// A source of force on bodies
///
/// # Examples
///
/// ```
/// use gravity_sim::body::Body;
/// use gravity_sim::forces::{DirectGravity, ForceModel};
/// use nalgebra::{Point2, Vector2};
///
/// let a = Body::new(1.0e24, 1.0e6, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap();
/// let b = Body::new(1.0e24, 1.0e6, Point2::new(1.0e8, 0.0), Vector2::zeros()).unwrap();
///
/// let force = DirectGravity.net_force(&a, &[a, b]).unwrap();
/// assert!(force.x > 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Resultant force on `body` from every other body in `bodies`
    ///
    /// `body` itself may appear in `bodies`; it is skipped by id.
    fn net_force(&self, body: &Body, bodies: &[Body]) -> Result<Vector2<f64>>;
}

/// Builds the force model selected in a configuration
pub fn force_model_for(decomposition: ForceDecomposition) -> Box<dyn ForceModel> {
    match decomposition {
        ForceDecomposition::AxisSign => Box::new(AxisSignGravity),
        ForceDecomposition::Vector => Box::new(DirectGravity),
    }
}
