//! Gravitational interaction and collisions between circular bodies on a
//! 2D plane.
//!
//! Bodies live in a shared [`store::BodyStore`]. Each tick the
//! [`simulation::Simulation`] snapshots the store, integrates every movable
//! body under pairwise gravity, separates and bounces overlapping bodies,
//! and commits the new motion back.

pub mod body;
pub mod collisions;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod physics;
pub mod simulation;
pub mod state;
pub mod store;

pub use body::{Body, BodyId};
pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use simulation::Simulation;
pub use store::BodyStore;

#[cfg(test)]
mod integrator_test;
#[cfg(test)]
mod physics_test;
