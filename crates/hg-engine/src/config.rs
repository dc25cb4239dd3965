//! Configuration for a session.

/// Configuration for a play session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Emit classification and disambiguation trace lines with every turn.
    pub trace: bool,
}

impl SessionConfig {
    /// Toggle trace output.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet() {
        assert!(!SessionConfig::default().trace);
    }

    #[test]
    fn builder_method() {
        assert!(SessionConfig::default().with_trace(true).trace);
    }
}
