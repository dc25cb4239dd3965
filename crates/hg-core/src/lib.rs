//! Core types for Hausgeist: the typed containment tree and world model.
//!
//! Everything a player can touch — rooms, walls, doors, keys, loose items,
//! the player itself — is an [`Entity`] in one recursive containment tree
//! owned by a [`World`]. This crate is independent of command parsing: the
//! engine crate resolves text into entity IDs and drives the mutating
//! operations defined here.

/// Entity types, identifiers, kinds, and facings.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Debug rendering of a containment subtree, hidden content included.
pub mod tree;
/// The world model that owns entities and their containment.
pub mod world;

/// Re-export core entity types.
pub use entity::{Entity, EntityId, EntityKind, Facing};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export the world model.
pub use world::World;
