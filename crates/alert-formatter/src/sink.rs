//! Destinations for rendered alert text.

use std::io::{self, Write};
use std::sync::Mutex;

use tracing::warn;

/// Where rendered alerts are written.
///
/// Emitting never fails the invocation; sinks report their own problems.
pub trait AlertSink: Send + Sync {
    /// Write one rendered alert.
    fn emit(&self, text: &str);
}

/// Writes alerts to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl AlertSink for StdoutSink {
    fn emit(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", text).and_then(|_| stdout.flush()) {
            warn!(error = %e, "Failed to write alert to stdout");
        }
    }
}

/// Collects alerts in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    emitted: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, oldest first.
    pub fn emitted(&self) -> Vec<String> {
        self.emitted
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// The most recently emitted alert.
    pub fn last(&self) -> Option<String> {
        self.emitted().pop()
    }
}

impl AlertSink for MemorySink {
    fn emit(&self, text: &str) {
        match self.emitted.lock() {
            Ok(mut guard) => guard.push(text.to_string()),
            Err(poisoned) => poisoned.into_inner().push(text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.emit("first");
        sink.emit("second");

        assert_eq!(sink.emitted(), vec!["first", "second"]);
        assert_eq!(sink.last().as_deref(), Some("second"));
    }

    #[test]
    fn test_memory_sink_starts_empty() {
        let sink = MemorySink::new();
        assert!(sink.emitted().is_empty());
        assert!(sink.last().is_none());
    }
}
