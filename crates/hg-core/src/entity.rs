use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for every entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Orientation of a wall, used as the target of directional commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Facing {
    /// Parse a facing from a direction word or its single-letter form.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "e" | "east" => Some(Self::East),
            "s" | "south" => Some(Self::South),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// The canonical single-letter form ("n", "e", "s", "w").
    pub fn letter(&self) -> &'static str {
        match self {
            Self::North => "n",
            Self::East => "e",
            Self::South => "s",
            Self::West => "w",
        }
    }

    /// The full direction word.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The kind of an entity, with kind-specific payload.
///
/// Rooms, walls, doors, keys, and actors respond differently to the same
/// verb; the dispatcher matches on this discriminator instead of going
/// through dynamic dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A plain interactable object.
    Item,
    /// A view boundary: an actor interacts only with what its room contains.
    Room {
        /// World X coordinate. Reserved for spatial features, unused by logic.
        x: i32,
        /// World Y coordinate. Reserved for spatial features, unused by logic.
        y: i32,
    },
    /// One side of a room, addressed by directional commands.
    Wall {
        /// Which way the wall faces.
        facing: Facing,
    },
    /// A passage to another room, possibly locked.
    Door {
        /// The key entity required to pass, or `None` when unlocked.
        lock: Option<EntityId>,
        /// The room on the other side.
        destination: EntityId,
    },
    /// Unlocks its target door once, then becomes inert.
    Key {
        /// The door this key opens, or `None` once spent.
        target: Option<EntityId>,
    },
    /// The player. Its contents are the inventory.
    Actor {
        /// Health stat. Reserved, unused by game logic.
        health: u32,
    },
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Room { .. } => write!(f, "room"),
            Self::Wall { .. } => write!(f, "wall"),
            Self::Door { .. } => write!(f, "door"),
            Self::Key { .. } => write!(f, "key"),
            Self::Actor { .. } => write!(f, "actor"),
        }
    }
}

/// A node in the containment tree. Every world object is an Entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity.
    pub id: EntityId,
    /// The kind (type) of this entity, with its payload.
    pub kind: EntityKind,
    /// Display name. Lookups compare it case-insensitively.
    pub name: String,
    /// Free-text description shown when looked at.
    pub description: String,
    /// Text returned when the entity is used and nothing else happens.
    /// Empty means "use the stock refusal line".
    pub use_text: String,
    /// Whether the entity can be grabbed and dropped.
    pub takeable: bool,
    /// Whether the entity can be destroyed.
    pub breakable: bool,
    /// Entity spliced into this one's slot when destroyed. Until then it is
    /// hidden: it appears in the debug tree walk but never in listings.
    pub broken_form: Option<EntityId>,
    /// Tool that must be in the actor's inventory to destroy this entity.
    pub break_tool: Option<EntityId>,
    /// Ordered contained entities. For an actor, this is the inventory.
    pub contents: Vec<EntityId>,
}

impl Entity {
    /// Create a new entity with a random ID.
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            kind,
            name: name.into(),
            description: String::new(),
            use_text: String::new(),
            takeable: false,
            breakable: false,
            broken_form: None,
            break_tool: None,
            contents: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the interaction text returned by a plain "use".
    pub fn with_use_text(mut self, text: impl Into<String>) -> Self {
        self.use_text = text.into();
        self
    }

    /// Mark the entity as grabbable.
    pub fn takeable(mut self) -> Self {
        self.takeable = true;
        self
    }

    /// Mark the entity as destroyable.
    pub fn breakable(mut self) -> Self {
        self.breakable = true;
        self
    }

    /// Set the hidden entity that takes this one's place when destroyed.
    pub fn with_broken_form(mut self, replacement: EntityId) -> Self {
        self.broken_form = Some(replacement);
        self.breakable = true;
        self
    }

    /// Require a tool in the actor's inventory before destruction.
    pub fn with_break_tool(mut self, tool: EntityId) -> Self {
        self.break_tool = Some(tool);
        self.breakable = true;
        self
    }

    /// The text a plain "use" produces, falling back to the stock refusal.
    pub fn interaction_text(&self) -> String {
        if self.use_text.is_empty() {
            format!("You can't interact with the {}.", self.name)
        } else {
            self.use_text.clone()
        }
    }

    /// The wall's facing, if this is a wall.
    pub fn facing(&self) -> Option<Facing> {
        match self.kind {
            EntityKind::Wall { facing } => Some(facing),
            _ => None,
        }
    }

    /// True if this entity is a door.
    pub fn is_door(&self) -> bool {
        matches!(self.kind, EntityKind::Door { .. })
    }

    /// True if this entity is a wall.
    pub fn is_wall(&self) -> bool {
        matches!(self.kind, EntityKind::Wall { .. })
    }

    /// True if this entity is an actor.
    pub fn is_actor(&self) -> bool {
        matches!(self.kind, EntityKind::Actor { .. })
    }

    /// The key locking this door. `None` for unlocked doors and non-doors.
    pub fn lock(&self) -> Option<EntityId> {
        match self.kind {
            EntityKind::Door { lock, .. } => lock,
            _ => None,
        }
    }

    /// Clear the lock. No-op for anything but a door.
    pub fn clear_lock(&mut self) {
        if let EntityKind::Door { ref mut lock, .. } = self.kind {
            *lock = None;
        }
    }

    /// The room behind this door, if this is a door.
    pub fn destination(&self) -> Option<EntityId> {
        match self.kind {
            EntityKind::Door { destination, .. } => Some(destination),
            _ => None,
        }
    }

    /// The door this key opens. `None` for spent keys and non-keys.
    pub fn key_target(&self) -> Option<EntityId> {
        match self.kind {
            EntityKind::Key { target } => target,
            _ => None,
        }
    }

    /// Spend the key. No-op for anything but a key.
    pub fn clear_key_target(&mut self) {
        if let EntityKind::Key { ref mut target } = self.kind {
            *target = None;
        }
    }
}
