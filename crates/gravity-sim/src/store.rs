//! Shared, thread-safe body collection
//!
//! The collection is owned by whoever drives the simulation (a render loop,
//! a UI, a test) and may be modified from other threads while a tick runs.
//! Ticks never iterate the live list: they take a [`SystemState`] snapshot
//! under a short read lock, run physics on the copy, then write positions
//! and velocities back with [`BodyStore::commit`].

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::body::{Body, BodyId};
use crate::state::SystemState;

#[derive(Debug, Default)]
struct Slots {
    bodies: Vec<Body>,
    /// Bumped on every insert, removal and update
    generation: u64,
    /// Generation of the last `update` to each body
    edited: HashMap<BodyId, u64>,
}

/// Cloneable handle to a shared body collection
///
/// # Examples
///
/// ```
/// use gravity_sim::body::Body;
/// use gravity_sim::store::BodyStore;
/// use nalgebra::{Point2, Vector2};
///
/// let store = BodyStore::new();
/// let id = store.insert(Body::new(1.0, 1.0, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap());
///
/// let snapshot = store.snapshot();
/// store.remove(id);
///
/// // The snapshot is unaffected by the removal
/// assert_eq!(snapshot.body_count(), 1);
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    slots: Arc<RwLock<Slots>>,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bodies(bodies: impl IntoIterator<Item = Body>) -> Self {
        let store = Self::new();
        {
            let mut slots = store.slots.write();
            slots.bodies.extend(bodies);
            slots.generation += 1;
        }
        store
    }

    /// Appends a body and returns its id
    pub fn insert(&self, body: Body) -> BodyId {
        let mut slots = self.slots.write();
        slots.bodies.push(body);
        slots.generation += 1;
        body.id()
    }

    /// Removes a body, keeping the order of the rest
    pub fn remove(&self, id: BodyId) -> Option<Body> {
        let mut slots = self.slots.write();
        let idx = slots.bodies.iter().position(|b| b.id() == id)?;
        slots.generation += 1;
        slots.edited.remove(&id);
        Some(slots.bodies.remove(idx))
    }

    /// Copy of the body with `id`, if still present
    pub fn get(&self, id: BodyId) -> Option<Body> {
        self.slots.read().bodies.iter().find(|b| b.id() == id).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.read().bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().bodies.is_empty()
    }

    /// Version of the collection, advanced by every mutation
    pub fn generation(&self) -> u64 {
        self.slots.read().generation
    }

    /// Consistent copy of every body, in collection order
    pub fn snapshot(&self) -> SystemState {
        let slots = self.slots.read();
        SystemState {
            generation: slots.generation,
            bodies: slots.bodies.clone(),
        }
    }

    /// Writes positions and velocities from `state` back into the store
    ///
    /// Bodies removed since the snapshot was taken are skipped; bodies
    /// inserted since then keep their own state. Bodies changed through
    /// [`BodyStore::update`] after the snapshot, and bodies that are no
    /// longer movable, keep their live state too. Returns the number of
    /// bodies updated.
    pub fn commit(&self, state: &SystemState) -> usize {
        let mut slots = self.slots.write();

        if slots.generation == state.generation && slots.bodies.len() == state.bodies.len() {
            slots
                .bodies
                .iter_mut()
                .zip(&state.bodies)
                .for_each(|(live, updated)| copy_motion(live, updated));
            return state.bodies.len();
        }

        log::debug!(
            "store changed during tick (generation {} -> {}), matching bodies by id",
            state.generation,
            slots.generation
        );
        let Slots { bodies, edited, .. } = &mut *slots;
        let mut updated = 0;
        for body in &state.bodies {
            if edited.get(&body.id()).is_some_and(|&g| g > state.generation) {
                continue;
            }
            if let Some(live) = bodies.iter_mut().find(|b| b.id() == body.id() && b.movable) {
                copy_motion(live, body);
                updated += 1;
            }
        }
        updated
    }

    /// Runs `f` with mutable access to a live body
    ///
    /// Used by external drivers to nudge a body or toggle `movable`. A tick
    /// in flight when the update lands will not overwrite it on commit.
    pub fn update<R>(&self, id: BodyId, f: impl FnOnce(&mut Body) -> R) -> Option<R> {
        let mut slots = self.slots.write();
        let Slots {
            bodies,
            generation,
            edited,
        } = &mut *slots;

        let body = bodies.iter_mut().find(|b| b.id() == id)?;
        let result = f(body);
        *generation += 1;
        edited.insert(id, *generation);
        Some(result)
    }
}

fn copy_motion(live: &mut Body, updated: &Body) {
    live.position = updated.position;
    live.velocity = updated.velocity;
}
