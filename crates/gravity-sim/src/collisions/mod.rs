//! Collision detection and resolution for circular bodies
//!
//! Overlapping discs are pushed apart along the line of centres and their
//! velocities are exchanged as in a one-dimensional elastic collision along
//! that line.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod detection_test;

pub use crate::physics::direction_sign;
pub use detection::{CollisionPair, find_collision_pairs, overlap_test};
pub use resolution::{
    Displace, collision_velocity, penetration_correction, pick_body_to_displace, resolve_pair,
};
