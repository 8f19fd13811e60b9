//! Geometric overlap tests

use nalgebra::Point2;

use crate::body::{Body, BodyId};
use crate::physics::distance;

/// A pair of bodies whose discs currently overlap
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionPair {
    pub body_a: BodyId,
    pub body_b: BodyId,
    /// Distance between centres
    pub separation: f64,
    /// How far the discs intersect: sum of radii minus separation
    pub overlap: f64,
}

/// Whether two discs strictly overlap
///
/// Discs that exactly touch are not overlapping.
///
/// # Examples
///
/// ```
/// use gravity_sim::collisions::overlap_test;
/// use nalgebra::Point2;
///
/// assert!(overlap_test(Point2::new(0.0, 0.0), 1.0, Point2::new(1.0, 0.0), 1.0));
/// assert!(!overlap_test(Point2::new(0.0, 0.0), 1.0, Point2::new(2.0, 0.0), 1.0));
/// ```
pub fn overlap_test(pos_a: Point2<f64>, radius_a: f64, pos_b: Point2<f64>, radius_b: f64) -> bool {
    distance(pos_a, pos_b) < radius_a + radius_b
}

/// Check a single pair, producing a [`CollisionPair`] when they overlap
fn check_pair(a: &Body, b: &Body) -> Option<CollisionPair> {
    // Cheap rejection before the square root
    if !a.bounds().intersects(&b.bounds()) || !a.has_collided(b) {
        return None;
    }

    let separation = a.distance_to(b);
    Some(CollisionPair {
        body_a: a.id(),
        body_b: b.id(),
        separation,
        overlap: a.radius() + b.radius() - separation,
    })
}

/// Every unordered overlapping pair, in collection order
///
/// O(N²) scan; the pairs describe the state at the time of the call and are
/// not updated as collisions get resolved.
pub fn find_collision_pairs(bodies: &[Body]) -> Vec<CollisionPair> {
    let n = bodies.len();

    (0..n)
        .flat_map(|i| ((i + 1)..n).filter_map(move |j| check_pair(&bodies[i], &bodies[j])))
        .collect()
}
