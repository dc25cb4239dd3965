//! Free-text command resolution.
//!
//! One line of input becomes a `(verb, noun, adjective)` triple: terms are
//! canonicalized through the alias table, bucketed left to right with
//! last-match-wins, and unmatched terms fall through to substring
//! disambiguation against what the actor can currently see.

mod classify;
mod disambiguate;

pub use classify::{ADJECTIVES, ParsedCommand, Verb, classify};
