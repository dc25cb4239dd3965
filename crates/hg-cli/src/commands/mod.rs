//! Subcommand implementations.

pub mod play;
pub mod tree;
pub mod vocab;

use std::path::Path;

use hg_engine::AliasTable;

/// Load the vocabulary from a CSV file, or fall back to the bundled one.
fn load_aliases(path: Option<&Path>) -> Result<AliasTable, String> {
    match path {
        Some(path) => {
            AliasTable::from_path(path).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => Ok(AliasTable::builtin()),
    }
}
