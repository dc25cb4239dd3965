//! Best-effort resolution of partial terms.
//!
//! Ambiguity never blocks a turn: a partial term either contributes nothing
//! or binds to exactly one entity, possibly a wrong-but-plausible guess.

use hg_core::EntityId;
use indexmap::IndexMap;

use crate::alias::AliasTable;
use crate::trace::Trace;

/// Resolve a term that matched no verb, full name, or adjective.
///
/// Candidates are the visible names containing any alias-expansion of the
/// term as a substring. One candidate binds directly. Several fall to an
/// adjective tie-break: the first candidate whose name contains an
/// expansion of the known adjective, where one-letter expansions are
/// ignored (the compass letters would match almost anything). When no
/// candidate satisfies the adjective, or no adjective is known, the first
/// candidate in enumeration order wins.
///
/// Short terms match over-eagerly by design; only the adjective path
/// filters one-letter hits.
pub(crate) fn disambiguate(
    term: &str,
    adjective: Option<&str>,
    table: &IndexMap<String, EntityId>,
    aliases: &AliasTable,
    trace: &mut Trace,
) -> Option<EntityId> {
    let expansions = aliases.expansions(term);
    let candidates: Vec<(&String, EntityId)> = table
        .iter()
        .filter(|(name, _)| expansions.iter().any(|x| name.contains(x.as_str())))
        .map(|(name, &id)| (name, id))
        .collect();

    match candidates.as_slice() {
        [] => {
            trace.note(format!("\"{term}\" matches nothing, ignored"));
            None
        }
        [(name, id)] => {
            trace.note(format!("\"{term}\" partially names {name}"));
            Some(*id)
        }
        _ => {
            let names: Vec<&str> = candidates.iter().map(|(n, _)| n.as_str()).collect();
            trace.note(format!(
                "\"{term}\" is ambiguous between: {}",
                names.join(", ")
            ));
            if let Some(adjective) = adjective {
                for (name, id) in &candidates {
                    let satisfied = aliases
                        .expansions(adjective)
                        .iter()
                        .any(|x| x.chars().count() > 1 && name.contains(x.as_str()));
                    if satisfied {
                        trace.note(format!("adjective \"{adjective}\" selects {name}"));
                        return Some(*id);
                    }
                }
            }
            let (name, id) = candidates[0];
            trace.note(format!("no adjective settles it, defaulting to {name}"));
            Some(id)
        }
    }
}
