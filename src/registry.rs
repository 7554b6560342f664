use crate::sink::LogSink;

/// Ordered collection of registered sinks.
///
/// Dispatch visits sinks in insertion order. The same sink may be added
/// more than once; it will then receive each message once per
/// registration. Removal of individual sinks is not supported, only
/// [`clear`](Self::clear).
#[derive(Default)]
pub struct SinkRegistry {
    sinks: Vec<Box<dyn LogSink>>,
}

impl SinkRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sink at the end of the dispatch order.
    pub fn add(&mut self, sink: Box<dyn LogSink>) {
        self.sinks.push(sink);
    }

    /// Drops every registered sink. Subsequent dispatches are no-ops
    /// until new sinks are added.
    pub fn clear(&mut self) {
        self.sinks.clear();
    }

    /// Visits each sink in insertion order.
    pub fn for_each(&self, mut visit: impl FnMut(&dyn LogSink)) {
        for sink in &self.sinks {
            visit(sink.as_ref());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::noop_sink::NoopLogSink;
    use crate::severity::Severity;
    use std::sync::{Arc, Mutex};

    struct TagSink {
        tag: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    impl LogSink for TagSink {
        fn accepts(&self, _severity: Severity) -> bool {
            true
        }
        fn emit(&self, _severity: Severity, _text: &str) {
            self.seen.lock().unwrap().push(self.tag);
        }
    }

    #[test]
    fn visits_in_insertion_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry = SinkRegistry::new();
        for tag in ["a", "b", "c"] {
            registry.add(Box::new(TagSink {
                tag,
                seen: Arc::clone(&seen),
            }));
        }

        registry.for_each(|sink| sink.emit(Severity::Info, "ping"));
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut registry = SinkRegistry::new();
        registry.add(Box::new(NoopLogSink));
        registry.add(Box::new(NoopLogSink));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut registry = SinkRegistry::new();
        registry.add(Box::new(NoopLogSink));
        assert!(!registry.is_empty());
        registry.clear();
        assert!(registry.is_empty());
    }
}
