//! Destinations for soft-condition warnings

use parking_lot::Mutex;

/// Receives warnings emitted while building objects.
///
/// Builds never fail on malformed-but-present data; they fall back and
/// report through this trait instead.
pub trait WarningSink: Send + Sync {
    /// Record one warning message
    fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "yaml2object", "{}", message);
    }
}

/// Discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn warn(&self, _message: &str) {}
}

/// Keeps warnings in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Drain the recorded messages
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.warn("first");
        sink.warn("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert_eq!(sink.take(), vec!["first", "second"]);
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_tracing_and_null_sinks_accept_messages() {
        TracingSink.warn("no subscriber installed");
        NullSink.warn("dropped");
    }
}
