use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::collisions::resolution::resolve_pair;
use crate::error::{Result, SimError};
use crate::physics::{
    direction_sign, directed_angle, distance, gravitational_force, unsigned_axis_angle,
};

static BODIES_CREATED: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A gravitating, collidable disc
///
/// Mass and radius are fixed at construction. Position and velocity change
/// every tick unless the body is an anchor (`movable == false`).
///
/// Deserialized bodies go through [`Body::new`]: mass and radius are
/// validated and a fresh id is assigned, whatever id was serialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyRecord")]
pub struct Body {
    id: BodyId,
    mass: f64,
    radius: f64,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    pub movable: bool,
}

/// Serialized form of a [`Body`], without its process-local id
#[derive(Deserialize)]
struct BodyRecord {
    mass: f64,
    radius: f64,
    position: Point2<f64>,
    #[serde(default = "Vector2::zeros")]
    velocity: Vector2<f64>,
    #[serde(default = "default_movable")]
    movable: bool,
}

fn default_movable() -> bool {
    true
}

impl TryFrom<BodyRecord> for Body {
    type Error = SimError;

    fn try_from(record: BodyRecord) -> Result<Self> {
        let mut body = Body::new(record.mass, record.radius, record.position, record.velocity)?;
        body.movable = record.movable;
        Ok(body)
    }
}

impl Body {
    /// Creates a movable body with a fresh id
    ///
    /// # Errors
    ///
    /// Rejects non-positive or non-finite mass and radius.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sim::body::Body;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let body = Body::new(5.0e24, 6.4e6, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap();
    /// assert!(body.movable);
    ///
    /// assert!(Body::new(-1.0, 1.0, Point2::origin(), Vector2::zeros()).is_err());
    /// ```
    pub fn new(
        mass: f64,
        radius: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }

        let id = BodyId(BODIES_CREATED.fetch_add(1, Ordering::Relaxed));
        Ok(Body {
            id,
            mass,
            radius,
            position,
            velocity,
            movable: true,
        })
    }

    /// Creates an immovable body that only acts as a gravitational anchor
    pub fn anchored(mass: f64, radius: f64, position: Point2<f64>) -> Result<Self> {
        let mut body = Self::new(mass, radius, position, Vector2::zeros())?;
        body.movable = false;
        Ok(body)
    }

    /// Number of bodies constructed so far in this process
    pub fn created_count() -> u64 {
        BODIES_CREATED.load(Ordering::Relaxed)
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Axis-aligned box enclosing the disc
    pub fn bounds(&self) -> BoundingBox {
        let extent = Vector2::new(self.radius, self.radius);
        BoundingBox {
            min: self.position - extent,
            max: self.position + extent,
        }
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        distance(self.position, other.position)
    }

    /// Directionless angle of the line to `other`, in `[0, π/2]`
    pub fn angle_to(&self, other: &Body) -> Result<f64> {
        unsigned_axis_angle(self.position, other.position).map_err(|_| self.degenerate(other))
    }

    /// Four-quadrant angle of the vector pointing at `other`
    pub fn direction_to(&self, other: &Body) -> Result<f64> {
        directed_angle(self.position, other.position).map_err(|_| self.degenerate(other))
    }

    /// Magnitude of the gravitational attraction between the two bodies
    pub fn force_to(&self, other: &Body) -> Result<f64> {
        gravitational_force(self.mass, other.mass, self.distance_to(other))
            .map_err(|_| self.degenerate(other))
    }

    /// Resultant gravitational force from every other body in `bodies`
    ///
    /// Each pairwise force is split using the unsigned axis angle, and the
    /// components are given a direction from the sign of the coordinate
    /// delta along each axis. `self` is skipped if present in the slice.
    pub fn net_force(&self, bodies: &[Body]) -> Result<Vector2<f64>> {
        bodies
            .iter()
            .filter(|other| other.id != self.id)
            .try_fold(Vector2::zeros(), |acc, other| {
                let angle = self.angle_to(other)?;
                let force = self.force_to(other)?;
                let x_dir = direction_sign(self.position.x, other.position.x);
                let y_dir = direction_sign(self.position.y, other.position.y);
                let total =
                    acc + Vector2::new(x_dir * force * angle.cos(), y_dir * force * angle.sin());
                if !(total.x.is_finite() && total.y.is_finite()) {
                    return Err(self.degenerate(other));
                }
                Ok(total)
            })
    }

    /// Applies a constant force for `dt`
    ///
    /// Displacement uses the start-of-step velocity:
    /// `x += v₀·dt + ½·a·dt²`, then `v += a·dt`.
    pub fn apply_force(&mut self, force: Vector2<f64>, dt: f64) {
        if !self.movable {
            return;
        }
        let acceleration = force / self.mass;
        let displacement = self.velocity * dt + acceleration * (0.5 * dt * dt);
        self.velocity += acceleration * dt;
        self.position += displacement;
    }

    /// Moves the body by one tick under the gravity of `bodies`
    ///
    /// Anchors are left untouched and never evaluate forces.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sim::body::Body;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let sun = Body::anchored(2.0e30, 7.0e8, Point2::new(0.0, 0.0)).unwrap();
    /// let mut earth = Body::new(6.0e24, 6.4e6, Point2::new(1.5e11, 0.0), Vector2::zeros()).unwrap();
    ///
    /// earth.integrate(&[sun], 20.0).unwrap();
    /// assert!(earth.velocity.x < 0.0);
    /// ```
    pub fn integrate(&mut self, bodies: &[Body], dt: f64) -> Result<()> {
        if !self.movable {
            return Ok(());
        }
        let force = self.net_force(bodies)?;
        self.apply_force(force, dt);
        Ok(())
    }

    /// Whether the two discs strictly overlap
    ///
    /// Touching discs do not count, and a body never collides with itself.
    pub fn has_collided(&self, other: &Body) -> bool {
        self.id != other.id
            && crate::collisions::overlap_test(
                self.position,
                self.radius,
                other.position,
                other.radius,
            )
    }

    /// Separates and bounces this body off every body in `bodies` it overlaps
    ///
    /// Pairs are handled in slice order. Correcting one pair may push this
    /// body into a body that was already checked; that overlap is picked up
    /// on a later pass, not here.
    ///
    /// Returns the number of collisions resolved.
    pub fn resolve_collisions_against(&mut self, bodies: &mut [Body]) -> Result<usize> {
        let mut resolved = 0;
        for other in bodies.iter_mut() {
            if self.has_collided(other) {
                log::debug!(
                    "collision between {} and {} (separation {:.3e})",
                    self.id,
                    other.id,
                    self.distance_to(other)
                );
                resolve_pair(self, other)?;
                resolved += 1;
            }
        }
        Ok(resolved)
    }

    fn degenerate(&self, other: &Body) -> SimError {
        SimError::DegenerateConfiguration {
            a: self.id,
            b: other.id,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Body {}: position ({:.3e}, {:.3e}), radius {:.3e}",
            self.id, self.position.x, self.position.y, self.radius
        )
    }
}

/// Axis-aligned rectangle in simulation units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether the two boxes share any interior area
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}
