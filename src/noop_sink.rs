use crate::severity::Severity;
use crate::sink::LogSink;

#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn accepts(&self, _severity: Severity) -> bool {
        true
    }

    #[inline]
    fn emit(&self, _severity: Severity, _text: &str) {}
}
