use crate::entity::EntityId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when manipulating a world.
///
/// These are contract violations, not gameplay failures: a locked door or a
/// missing tool is narration, never an error.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested entity ID does not exist in the world.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// An entity with this ID was already spawned.
    #[error("entity already exists: {0}")]
    DuplicateId(EntityId),

    /// Attaching would make an entity contain itself, directly or through
    /// its subtree.
    #[error("attaching \"{item}\" to \"{container}\" would create a containment cycle")]
    ContainmentCycle {
        /// Name of the entity being attached.
        item: String,
        /// Name of the would-be container.
        container: String,
    },

    /// A move was asked to take an entity out of a container that does not
    /// hold it.
    #[error("\"{item}\" is not held by \"{container}\"")]
    NotHeld {
        /// Name of the entity being moved.
        item: String,
        /// Name of the container that was expected to hold it.
        container: String,
    },
}
