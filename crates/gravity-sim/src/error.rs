//! Error types for the simulation engine

use crate::body::BodyId;

/// Everything that can go wrong while building bodies or advancing a tick
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// A scalar function was handed two coincident points, or points too
    /// close together for the force between them to stay finite
    #[error("degenerate configuration: separation {separation} gives no finite force")]
    ZeroSeparation { separation: f64 },

    /// Two bodies are coincident, or close enough that their attraction
    /// overflows
    #[error("degenerate configuration: bodies {a} and {b} are coincident")]
    DegenerateConfiguration { a: BodyId, b: BodyId },

    #[error("invalid body mass {0}: must be finite and positive")]
    InvalidMass(f64),

    #[error("invalid body radius {0}: must be finite and positive")]
    InvalidRadius(f64),

    #[error("invalid time step {0}: must be finite and positive")]
    InvalidTimeStep(f64),
}

pub type Result<T> = std::result::Result<T, SimError>;
