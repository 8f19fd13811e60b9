use nalgebra::{Point2, Vector2};
use std::collections::HashSet;

use crate::body::{Body, BodyId};
use crate::collisions::resolve_pair;
use crate::error::Result;

/// A consistent copy of the body collection taken at one instant
///
/// Physics always runs against a `SystemState`, never against the live
/// [`BodyStore`](crate::store::BodyStore), so concurrent inserts and removals
/// cannot disturb a tick in progress.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    /// Store generation the snapshot was taken at
    pub generation: u64,
    /// Bodies in collection order
    pub bodies: Vec<Body>,
}

impl SystemState {
    /// Creates a free-standing state that is not tied to any store
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sim::body::Body;
    /// use gravity_sim::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let body = Body::new(1.0, 1.0, Point2::new(0.0, 0.0), Vector2::new(2.0, 0.0)).unwrap();
    /// let state = SystemState::from_bodies(vec![body]);
    ///
    /// assert_eq!(state.body_count(), 1);
    /// assert_eq!(state.total_kinetic_energy(), 2.0);
    /// ```
    pub fn from_bodies(bodies: Vec<Body>) -> Self {
        Self {
            generation: 0,
            bodies,
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id() == id)
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass()).sum()
    }

    /// Total linear momentum
    ///
    /// Gravity alone conserves this; anchors absorb momentum during
    /// collisions, so it drifts when anchors are present.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Mass-weighted mean position, `None` for an empty state
    pub fn center_of_mass(&self) -> Option<Point2<f64>> {
        let total = self.total_mass();
        if self.bodies.is_empty() || total <= 0.0 {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position.coords * b.mass())
            .fold(Vector2::zeros(), |acc, p| acc + p);
        Some(Point2::from(weighted / total))
    }

    /// Runs a collision pass over the whole state
    ///
    /// Each body, in collection order, is checked against every other body
    /// and each overlapping pair is resolved at most once per pass. Later
    /// corrections can push a body back into one that was already handled;
    /// that is left for the next pass.
    ///
    /// Returns the number of collisions resolved.
    pub fn resolve_collisions(&mut self) -> Result<usize> {
        let n = self.bodies.len();
        let mut resolved: HashSet<(BodyId, BodyId)> = HashSet::new();

        for i in 0..n {
            for j in (0..n).filter(|&j| j != i) {
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                let key = (a.id().min(b.id()), a.id().max(b.id()));
                if resolved.contains(&key) || !a.has_collided(b) {
                    continue;
                }

                log::debug!(
                    "collision between {} and {} (separation {:.3e})",
                    a.id(),
                    b.id(),
                    a.distance_to(b)
                );
                resolve_pair(a, b)?;
                resolved.insert(key);
            }
        }
        Ok(resolved.len())
    }
}

/// Mutable references to two distinct elements
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
