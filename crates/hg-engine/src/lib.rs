//! Interactive-fiction engine: command resolution and turn dispatch.
//!
//! The engine drives a [`hg_core::World`] through turns. Each turn takes one
//! line of free text, canonicalizes it through an [`alias::AliasTable`],
//! classifies the terms into a verb, a noun, and an adjective, fills the
//! gaps with implicit-command rules, and runs the verb's behavior. The
//! result is narration; rule violations narrate too instead of erroring.

pub mod alias;
pub mod config;
pub mod error;
pub mod parser;
pub mod session;
pub mod trace;

pub use alias::AliasTable;
pub use config::SessionConfig;
pub use error::{EngineError, EngineResult};
pub use parser::{ParsedCommand, Verb};
pub use session::{Session, TurnOutput};
pub use trace::Trace;
