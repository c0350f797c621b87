//! Build context configuration

use std::fmt;
use std::sync::Arc;

use crate::sanitize::ReservedWords;
use crate::sink::{NullSink, TracingSink, WarningSink};

/// Configuration for building objects.
///
/// Passed explicitly to every build so tests and embedders can swap the
/// reserved word set or capture warnings without touching global state.
#[derive(Clone)]
pub struct BuildContext {
    /// Keys that must be prefixed with `_` to become attribute names
    pub reserved: Arc<ReservedWords>,

    /// Where soft-condition warnings go
    pub sink: Arc<dyn WarningSink>,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            reserved: Arc::new(ReservedWords::python()),
            sink: Arc::new(TracingSink),
        }
    }
}

impl fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("reserved", &self.reserved.len())
            .finish_non_exhaustive()
    }
}

impl BuildContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that discards warnings.
    pub fn quiet() -> Self {
        Self::default().with_sink(Arc::new(NullSink))
    }

    /// Replace the warning sink.
    pub fn with_sink(self, sink: Arc<dyn WarningSink>) -> Self {
        Self { sink, ..self }
    }

    /// Replace the reserved word set.
    pub fn with_reserved(self, reserved: ReservedWords) -> Self {
        Self {
            reserved: Arc::new(reserved),
            ..self
        }
    }

    pub(crate) fn warn(&self, message: &str) {
        self.sink.warn(message);
    }
}
