//! Collision response: penetration correction and elastic velocity exchange

use nalgebra::Vector2;

use crate::body::Body;
use crate::error::Result;

/// Which body of a pair gets moved out of the overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Displace {
    First,
    Second,
}

/// Chooses the body to push during penetration correction
///
/// The first body is moved when it can move; otherwise the second one is,
/// provided it is movable. Two anchors are never moved.
pub fn pick_body_to_displace(a: &Body, b: &Body) -> Option<Displace> {
    match (a.movable, b.movable) {
        (true, _) => Some(Displace::First),
        (false, true) => Some(Displace::Second),
        (false, false) => None,
    }
}

/// Pushes one body of an overlapping pair away from the other so that the
/// discs just touch
///
/// Only one body moves (see [`pick_body_to_displace`]). Pairs that do not
/// overlap are left alone.
///
/// # Examples
///
/// ```
/// use gravity_sim::body::Body;
/// use gravity_sim::collisions::{overlap_test, penetration_correction};
/// use nalgebra::{Point2, Vector2};
///
/// let mut a = Body::new(1.0, 1.0, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap();
/// let mut b = Body::new(1.0, 1.0, Point2::new(1.0, 0.0), Vector2::zeros()).unwrap();
///
/// penetration_correction(&mut a, &mut b).unwrap();
///
/// assert_eq!(a.position, Point2::new(-1.0, 0.0));
/// assert_eq!(b.position, Point2::new(1.0, 0.0));
/// assert!(!overlap_test(a.position, a.radius(), b.position, b.radius()));
/// ```
pub fn penetration_correction(a: &mut Body, b: &mut Body) -> Result<()> {
    let overlap = a.radius() + b.radius() - a.distance_to(b);
    if overlap <= 0.0 {
        return Ok(());
    }

    let phi = a.direction_to(b)?;
    let push = Vector2::new(phi.cos(), phi.sin()) * overlap;

    match pick_body_to_displace(a, b) {
        Some(Displace::First) => a.position -= push,
        Some(Displace::Second) => b.position += push,
        None => {}
    }
    Ok(())
}

/// Velocity of `this` after an elastic collision with `other`
///
/// The normal is the line of centres. Normal components are exchanged as in
/// a 1D elastic collision; tangential components are kept. An anchor acts as
/// an infinitely heavy body: it keeps its own velocity and reflects the
/// relative normal velocity of whatever hits it.
///
/// # Examples
///
/// ```
/// use gravity_sim::body::Body;
/// use gravity_sim::collisions::collision_velocity;
/// use nalgebra::{Point2, Vector2};
///
/// // Equal masses in a head-on collision swap velocities
/// let a = Body::new(1.0, 1.0, Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();
/// let b = Body::new(1.0, 1.0, Point2::new(1.5, 0.0), Vector2::new(-1.0, 0.0)).unwrap();
///
/// let va = collision_velocity(&a, &b).unwrap();
/// assert!((va.x + 1.0).abs() < 1e-12);
/// assert!(va.y.abs() < 1e-12);
/// ```
pub fn collision_velocity(this: &Body, other: &Body) -> Result<Vector2<f64>> {
    let phi = this.direction_to(other)?;
    if !this.movable {
        return Ok(this.velocity);
    }

    let normal = Vector2::new(phi.cos(), phi.sin());
    let v1n = this.velocity.dot(&normal);
    let v2n = other.velocity.dot(&normal);

    let new_v1n = if other.movable {
        let m1 = this.mass();
        let m2 = other.mass();
        ((m1 - m2) * v1n + 2.0 * m2 * v2n) / (m1 + m2)
    } else {
        2.0 * v2n - v1n
    };

    Ok(this.velocity + normal * (new_v1n - v1n))
}

/// Resolves one overlapping pair
///
/// Both post-collision velocities are computed from the pre-collision
/// state, then the overlap is corrected, then the velocities are assigned.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> Result<()> {
    let va = collision_velocity(a, b)?;
    let vb = collision_velocity(b, a)?;

    penetration_correction(a, b)?;

    a.velocity = va;
    b.velocity = vb;
    Ok(())
}
