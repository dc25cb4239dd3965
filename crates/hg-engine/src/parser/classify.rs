//! Tokenizer and term classifier.

use std::fmt;

use hg_core::{EntityId, World};
use indexmap::IndexMap;

use crate::alias::AliasTable;
use crate::parser::disambiguate::disambiguate;
use crate::trace::Trace;

/// The closed set of known adjectives: compass letters, colors, materials.
pub const ADJECTIVES: &[&str] = &[
    "n", "e", "s", "w", "red", "yellow", "green", "blue", "oak", "metal", "broken",
];

/// A canonical action word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Describe a room, an object, or the actor's own inventory.
    Look,
    /// Take an object into the inventory.
    Grab,
    /// Pass through a door.
    Move,
    /// Interact with an object.
    Use,
    /// Unlock a door with a carried key.
    Unlock,
    /// Put a carried object down in the current room.
    Drop,
    /// Break a breakable object.
    Destroy,
    /// Show the command summary.
    Help,
}

impl Verb {
    /// Parse a canonical verb term. Synonyms go through the alias table
    /// before they reach this.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "look" => Some(Self::Look),
            "grab" => Some(Self::Grab),
            "move" => Some(Self::Move),
            "use" => Some(Self::Use),
            "unlock" => Some(Self::Unlock),
            "drop" => Some(Self::Drop),
            "destroy" => Some(Self::Destroy),
            "help" => Some(Self::Help),
            _ => None,
        }
    }

    /// The canonical term for this verb.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Grab => "grab",
            Self::Move => "move",
            Self::Use => "use",
            Self::Unlock => "unlock",
            Self::Drop => "drop",
            Self::Destroy => "destroy",
            Self::Help => "help",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The classified form of one input line.
///
/// Every slot may stay unset; the dispatcher's implicit-command rules fill
/// the common gaps (bare "look", bare directions) afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The recognized verb, if any.
    pub verb: Option<Verb>,
    /// The resolved target entity, if any.
    pub noun: Option<EntityId>,
    /// The last recognized adjective, if any.
    pub adjective: Option<String>,
    /// How many terms the input line held, before classification.
    pub term_count: usize,
}

/// Strip everything but letters and spaces, lowercase, and split.
fn tokenize(input: &str) -> Vec<String> {
    input
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Build the noun table for one turn: every name the actor can currently
/// address, keyed by lowercase full name, in enumeration order.
///
/// `"room"` and `"self"` are seeded as canonical references to the current
/// room and the actor. Duplicate names keep their first position but take
/// the later entity.
fn noun_table(world: &World, actor: EntityId, room: EntityId) -> IndexMap<String, EntityId> {
    let mut table = IndexMap::new();
    table.insert("room".to_string(), room);
    table.insert("self".to_string(), actor);
    for id in world.descendants(room) {
        if let Some(entity) = world.get(id) {
            table.insert(entity.name.to_lowercase(), id);
        }
    }
    table
}

/// Classify one line of input against what the actor can currently see.
///
/// Terms are processed left to right and canonicalized first; within each
/// category the last match wins. Terms matching nothing are treated as
/// partial descriptors and handed to the disambiguator.
pub fn classify(
    input: &str,
    world: &World,
    actor: EntityId,
    room: EntityId,
    aliases: &AliasTable,
    trace: &mut Trace,
) -> ParsedCommand {
    let terms = tokenize(input);
    let table = noun_table(world, actor, room);
    if trace.is_enabled() {
        let names: Vec<&str> = table.keys().map(String::as_str).collect();
        trace.note(format!("selectable: {}", names.join(", ")));
    }

    let mut cmd = ParsedCommand {
        verb: None,
        noun: None,
        adjective: None,
        term_count: terms.len(),
    };

    for raw in &terms {
        let term = aliases.resolve(raw);
        if let Some(verb) = Verb::parse(&term) {
            trace.note(format!("\"{raw}\" is the verb {verb}"));
            cmd.verb = Some(verb);
        } else if let Some(&id) = table.get(&term) {
            trace.note(format!("\"{raw}\" names {} exactly", world.name_of(id)));
            cmd.noun = Some(id);
        } else if ADJECTIVES.contains(&term.as_str()) {
            trace.note(format!("\"{raw}\" is the adjective \"{term}\""));
            cmd.adjective = Some(term);
        } else if let Some(id) =
            disambiguate(&term, cmd.adjective.as_deref(), &table, aliases, trace)
        {
            cmd.noun = Some(id);
        }
    }

    cmd
}
