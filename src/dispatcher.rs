//! The dispatch funnel: every log call composes its final text and fans
//! it out to the registered sinks under one lock.

use std::error::Error;
use std::fmt::{Debug, Display};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::compose::{FormatError, compose, merge_message_and_throwable};
use crate::pretty::{self, EMPTY_JSON, EMPTY_XML, INVALID_JSON, INVALID_XML};
use crate::registry::SinkRegistry;
use crate::severity::Severity;
use crate::sink::LogSink;

/// Single entry point for all log calls.
///
/// A dispatcher owns an ordered set of sinks and forwards each finished
/// message to every sink that accepts its severity, in registration
/// order. The whole compose-and-dispatch sequence runs under one lock,
/// so lines from concurrent callers are never interleaved and every
/// sink observes the same global order.
///
/// Dispatchers are plain instances; construct one at startup and share
/// it by reference (or `Arc`) with anything that logs.
///
/// # Examples
/// ```ignore
/// let dispatcher = LogDispatcher::new();
/// dispatcher.add_adapter(Box::new(my_sink));
/// dispatcher.info("listening on {}", &[&addr])?;
/// ```
#[derive(Default)]
pub struct LogDispatcher {
    registry: Mutex<SinkRegistry>,
}

impl LogDispatcher {
    /// Creates a dispatcher with no sinks; dispatches are no-ops until
    /// [`add_adapter`](Self::add_adapter) is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs a composed message at VERBOSE.
    ///
    /// # Errors
    /// [`FormatError`] when the template and arguments are incompatible.
    pub fn verbose(&self, template: &str, args: &[&dyn Display]) -> Result<(), FormatError> {
        self.log_with(Severity::Verbose, template, args)
    }

    /// Logs a composed message at DEBUG.
    ///
    /// # Errors
    /// [`FormatError`] when the template and arguments are incompatible.
    pub fn debug(&self, template: &str, args: &[&dyn Display]) -> Result<(), FormatError> {
        self.log_with(Severity::Debug, template, args)
    }

    /// Logs a composed message at INFO.
    ///
    /// # Errors
    /// [`FormatError`] when the template and arguments are incompatible.
    pub fn info(&self, template: &str, args: &[&dyn Display]) -> Result<(), FormatError> {
        self.log_with(Severity::Info, template, args)
    }

    /// Logs a composed message at WARN.
    ///
    /// # Errors
    /// [`FormatError`] when the template and arguments are incompatible.
    pub fn warn(&self, template: &str, args: &[&dyn Display]) -> Result<(), FormatError> {
        self.log_with(Severity::Warn, template, args)
    }

    /// Logs a composed message at ERROR.
    ///
    /// # Errors
    /// [`FormatError`] when the template and arguments are incompatible.
    pub fn error(&self, template: &str, args: &[&dyn Display]) -> Result<(), FormatError> {
        self.log_with(Severity::Error, template, args)
    }

    /// Logs a composed message at ERROR, appending the throwable's
    /// rendered chain after a `" : "` separator.
    ///
    /// # Errors
    /// [`FormatError`] when the template and arguments are incompatible.
    pub fn error_with(
        &self,
        throwable: &dyn Error,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), FormatError> {
        self.log_fmt(Severity::Error, Some(throwable), template, args)
    }

    /// Stringifies an arbitrary value via `Debug` and logs it at DEBUG.
    pub fn debug_object<T: Debug + ?Sized>(&self, value: &T) {
        self.log(Severity::Debug, Some(&format!("{value:?}")), None);
    }

    /// Pretty-prints a JSON payload and logs it at DEBUG.
    ///
    /// Blank input logs `"Empty/Null json content"` at DEBUG; malformed
    /// or unrecognized input logs `"Invalid Json"` at ERROR. This never
    /// returns an error to the caller.
    pub fn json(&self, raw: &str) {
        if raw.trim().is_empty() {
            self.log(Severity::Debug, Some(EMPTY_JSON), None);
            return;
        }
        match pretty::pretty_json(raw) {
            Ok(text) => self.log(Severity::Debug, Some(&text), None),
            Err(_) => self.log(Severity::Error, Some(INVALID_JSON), None),
        }
    }

    /// Pretty-prints an XML payload and logs it at DEBUG.
    ///
    /// Blank input logs `"Empty/Null xml content"` at DEBUG; malformed
    /// input logs `"Invalid xml"` at ERROR. This never returns an error
    /// to the caller.
    pub fn xml(&self, raw: &str) {
        if raw.trim().is_empty() {
            self.log(Severity::Debug, Some(EMPTY_XML), None);
            return;
        }
        match pretty::pretty_xml(raw) {
            Ok(text) => self.log(Severity::Debug, Some(&text), None),
            Err(_) => self.log(Severity::Error, Some(INVALID_XML), None),
        }
    }

    /// Generic leveled entry point the convenience methods and macros
    /// funnel through.
    ///
    /// # Errors
    /// [`FormatError`] when the template and arguments are incompatible.
    pub fn log_with(
        &self,
        severity: Severity,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), FormatError> {
        self.log_fmt(severity, None, template, args)
    }

    /// Low-level entry point: normalizes the message/throwable pair and
    /// fans the final text out to every accepting sink, in order.
    pub fn log(&self, severity: Severity, message: Option<&str>, throwable: Option<&dyn Error>) {
        let registry = self.registry();
        let text = merge_message_and_throwable(message.map(str::to_owned), throwable);
        Self::dispatch(&registry, severity, &text);
    }

    /// Registers a sink at the end of the dispatch order.
    pub fn add_adapter(&self, sink: Box<dyn LogSink>) {
        self.registry().add(sink);
    }

    /// Drops every registered sink.
    pub fn clear_adapters(&self) {
        self.registry().clear();
    }

    /// Composes and dispatches under a single lock acquisition, so the
    /// message order sinks observe matches the composition order.
    fn log_fmt(
        &self,
        severity: Severity,
        throwable: Option<&dyn Error>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<(), FormatError> {
        let registry = self.registry();
        let message = compose(template, args)?;
        let text = merge_message_and_throwable(Some(message), throwable);
        Self::dispatch(&registry, severity, &text);
        Ok(())
    }

    fn dispatch(registry: &SinkRegistry, severity: Severity, text: &str) {
        registry.for_each(|sink| {
            if sink.accepts(severity) {
                sink.emit(severity, text);
            }
        });
    }

    /// A sink that panics poisons the lock; recover the guard so one bad
    /// call never disables logging for the rest of the process.
    fn registry(&self) -> MutexGuard<'_, SinkRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
