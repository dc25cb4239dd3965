//! Error types for the engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while setting up or running a session.
///
/// Gameplay outcomes — a locked door, a missing tool, an unknown word — are
/// narration, never errors. These variants cover configuration problems at
/// startup and broken caller contracts.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The alias source could not be read.
    #[error("failed to read alias source: {0}")]
    AliasIo(#[from] std::io::Error),

    /// A line of the alias source is not a `raw,canonical` pair.
    #[error("malformed alias on line {line}: \"{text}\"")]
    MalformedAlias {
        /// One-based line number in the source.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// The entity given as the player is not an actor.
    #[error("\"{0}\" is not an actor")]
    NotAnActor(String),

    /// The entity given as the starting location is not a room.
    #[error("\"{0}\" is not a room")]
    NotARoom(String),

    /// The starting actor is not contained in the starting room.
    #[error("actor \"{actor}\" does not start inside room \"{room}\"")]
    ActorNotInRoom {
        /// Name of the actor.
        actor: String,
        /// Name of the room.
        room: String,
    },

    /// A containment operation broke its contract.
    #[error(transparent)]
    World(#[from] hg_core::WorldError),
}
