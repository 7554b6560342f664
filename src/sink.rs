use crate::severity::Severity;

/// Capability implemented by every log output.
///
/// The dispatcher asks `accepts` once per call and, if it returns `true`,
/// hands the finished text to `emit`. `emit` has no error channel; sinks
/// handle their own failures.
pub trait LogSink: Send + Sync {
    /// Whether this sink wants messages at the given severity.
    fn accepts(&self, severity: Severity) -> bool;

    /// Receives one finished log line. Called under the dispatcher lock,
    /// so implementations should return quickly.
    fn emit(&self, severity: Severity, text: &str);
}
