//! The vocabulary table mapping raw words to canonical terms.
//!
//! Loaded once at startup from a two-column CSV stream and read-only
//! afterwards. Resolution never fails: unknown words pass through unchanged,
//! so the classifier can treat every term uniformly.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

/// Bundled default vocabulary.
const BUILTIN: &str = include_str!("../data/aliases.csv");

/// Many-to-one mapping from raw vocabulary to canonical terms.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    map: HashMap<String, String>,
}

impl AliasTable {
    /// Parse a table from CSV text: one `rawTerm,canonicalTerm` per line.
    ///
    /// Blank lines are skipped. A line without exactly two fields is a hard
    /// error — a bad vocabulary file should stop startup, not silently warp
    /// the player's words.
    pub fn from_csv(text: &str) -> EngineResult<Self> {
        let mut map = HashMap::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split(',');
            let (Some(raw), Some(canonical), None) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(EngineError::MalformedAlias {
                    line: idx + 1,
                    text: line.to_string(),
                });
            };
            map.insert(
                raw.trim().to_lowercase(),
                canonical.trim().to_lowercase(),
            );
        }
        Ok(Self { map })
    }

    /// Load a table from a CSV file.
    pub fn from_path(path: &Path) -> EngineResult<Self> {
        Self::from_csv(&std::fs::read_to_string(path)?)
    }

    /// The bundled default vocabulary.
    pub fn builtin() -> Self {
        Self::from_csv(BUILTIN).expect("bundled alias table is well-formed")
    }

    /// Canonicalize a term, case-insensitively. Unknown terms come back
    /// lowercased but otherwise unchanged.
    pub fn resolve(&self, term: &str) -> String {
        let lower = term.to_lowercase();
        self.map.get(&lower).cloned().unwrap_or(lower)
    }

    /// Every raw term mapping to `canonical`, plus `canonical` itself.
    ///
    /// The canonical term comes first, the raw synonyms after it in sorted
    /// order, so callers get deterministic output.
    pub fn expansions(&self, canonical: &str) -> Vec<String> {
        let canonical = canonical.to_lowercase();
        let mut raws: Vec<String> = self
            .map
            .iter()
            .filter(|(_, c)| **c == canonical)
            .map(|(r, _)| r.clone())
            .collect();
        raws.sort();
        let mut out = vec![canonical];
        out.extend(raws);
        out
    }

    /// All distinct canonical terms, sorted.
    pub fn canonicals(&self) -> Vec<String> {
        let mut out: Vec<String> = self.map.values().cloned().collect();
        out.sort();
        out.dedup();
        out
    }

    /// Number of raw-term entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resolve_known_term() {
        let table = AliasTable::from_csv("steel,metal\nwooden,oak\n").unwrap();
        assert_eq!(table.resolve("steel"), "metal");
        assert_eq!(table.resolve("wooden"), "oak");
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let table = AliasTable::from_csv("Steel,Metal\n").unwrap();
        assert_eq!(table.resolve("STEEL"), "metal");
        assert_eq!(table.resolve("Steel"), "metal");
    }

    #[test]
    fn unknown_term_passes_through() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("Chair"), "chair");
    }

    #[test]
    fn missing_comma_is_hard_error() {
        let err = AliasTable::from_csv("steel,metal\njustoneword\n").unwrap_err();
        match err {
            EngineError::MalformedAlias { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "justoneword");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_field_is_hard_error() {
        let err = AliasTable::from_csv("a,b,c\n").unwrap_err();
        assert!(matches!(err, EngineError::MalformedAlias { line: 1, .. }));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = AliasTable::from_csv("\nsteel,metal\n\n").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn expansions_include_canonical_and_synonyms() {
        let table = AliasTable::from_csv("steel,metal\niron,metal\n").unwrap();
        assert_eq!(table.expansions("metal"), vec!["metal", "iron", "steel"]);
    }

    #[test]
    fn expansions_of_unaliased_term_is_just_itself() {
        let table = AliasTable::builtin();
        assert_eq!(table.expansions("chair"), vec!["chair"]);
    }

    #[test]
    fn builtin_resolution_is_idempotent() {
        let table = AliasTable::builtin();
        assert!(!table.is_empty());
        for canonical in table.canonicals() {
            assert_eq!(table.resolve(&canonical), canonical);
        }
    }

    proptest! {
        #[test]
        fn resolution_is_idempotent_for_any_word(word in "[A-Za-z]{1,12}") {
            let table = AliasTable::builtin();
            let once = table.resolve(&word);
            prop_assert_eq!(table.resolve(&once), once);
        }
    }
}
