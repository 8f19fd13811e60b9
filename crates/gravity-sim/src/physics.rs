//! Scalar physics functions
//!
//! Pure helpers shared by bodies, force models and the collision resolver.

use nalgebra::Point2;
use std::f64::consts::PI;

use crate::error::{Result, SimError};

/// Gravitational constant in simulation units
pub const G: f64 = 6.67e-11;

/// Newtonian attraction between two masses `r` apart
///
/// # Examples
///
/// ```
/// use gravity_sim::physics::{gravitational_force, G};
///
/// let f = gravitational_force(2.0, 3.0, 1.0).unwrap();
/// assert_eq!(f, 6.0 * G);
///
/// // Coincident masses have no defined force, and neither do masses so
/// // close that the result overflows
/// assert!(gravitational_force(1.0, 1.0, 0.0).is_err());
/// assert!(gravitational_force(1.0, 1.0, 1.0e-160).is_err());
/// ```
pub fn gravitational_force(m1: f64, m2: f64, r: f64) -> Result<f64> {
    if r.is_nan() || r <= 0.0 {
        return Err(SimError::ZeroSeparation { separation: r });
    }
    let force = G * m1 * m2 / (r * r);
    if !force.is_finite() {
        return Err(SimError::ZeroSeparation { separation: r });
    }
    Ok(force)
}

/// Euclidean distance between two points
pub fn distance(a: Point2<f64>, b: Point2<f64>) -> f64 {
    nalgebra::distance(&a, &b)
}

/// Angle of the line between two points measured against the x axis,
/// ignoring direction
///
/// Always in `[0, π/2]`. The quadrant must be recovered separately with
/// [`direction_sign`].
pub fn unsigned_axis_angle(a: Point2<f64>, b: Point2<f64>) -> Result<f64> {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    if dx == 0.0 && dy == 0.0 {
        return Err(SimError::ZeroSeparation { separation: 0.0 });
    }
    Ok((dy / dx).atan())
}

/// Four-quadrant angle of the vector pointing from `a` to `b`, in `(-π, π]`
///
/// # Examples
///
/// ```
/// use gravity_sim::physics::directed_angle;
/// use nalgebra::Point2;
/// use std::f64::consts::PI;
///
/// let angle = directed_angle(Point2::new(0.0, 0.0), Point2::new(-1.0, 0.0)).unwrap();
/// assert!((angle - PI).abs() < 1e-12);
/// ```
pub fn directed_angle(a: Point2<f64>, b: Point2<f64>) -> Result<f64> {
    let d = b - a;
    if d.x == 0.0 && d.y == 0.0 {
        return Err(SimError::ZeroSeparation { separation: 0.0 });
    }
    Ok(d.y.atan2(d.x))
}

/// Direction from `from` to `to` along a single axis: `+1.0` or `-1.0`
///
/// Equal coordinates count as positive.
pub fn direction_sign(from: f64, to: f64) -> f64 {
    if to >= from { 1.0 } else { -1.0 }
}

/// Volume of a sphere
pub fn sphere_volume(radius: f64) -> f64 {
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// Mass of a uniform sphere of the given density
///
/// # Examples
///
/// ```
/// use gravity_sim::physics::mass_from_density;
/// use std::f64::consts::PI;
///
/// let mass = mass_from_density(1.0, 1.0);
/// assert!((mass - 4.0 / 3.0 * PI).abs() < 1e-12);
/// ```
pub fn mass_from_density(density: f64, radius: f64) -> f64 {
    density * sphere_volume(radius)
}
