//! Decision trace for one turn.

/// Collects classification and disambiguation decisions for one turn.
///
/// The sink is passed explicitly through the resolver instead of consulting
/// a process-wide debug flag; the frontend decides what to do with the
/// collected lines.
#[derive(Debug, Default)]
pub struct Trace {
    enabled: bool,
    lines: Vec<String>,
}

impl Trace {
    /// Create a sink. A disabled sink discards everything.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            lines: Vec::new(),
        }
    }

    /// Record one decision line.
    pub fn note(&mut self, line: impl Into<String>) {
        if self.enabled {
            self.lines.push(line.into());
        }
    }

    /// True when the sink records.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Consume the sink, yielding the recorded lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
