//! Fanlog is a synchronous, in-process logging facade.
//!
//! Log calls at five severities are composed into final text (positional
//! template formatting, throwable rendering, or JSON/XML
//! pretty-printing) and fanned out in registration order to a dynamic
//! set of sinks, each filtering by severity. The whole
//! compose-and-dispatch sequence for a call runs under one lock, so
//! concurrent callers never interleave output.
//!
//! The crate defines the sink capability ([`LogSink`]) but ships no
//! concrete outputs beyond [`NoopLogSink`]; console, file, or remote
//! writers are supplied by the embedding application.

/// Message composition and the message/throwable merge invariant.
pub mod compose;
/// The dispatch funnel that fans finished messages out to sinks.
pub mod dispatcher;
/// Leveled logging macros.
pub mod macros;
/// A sink that discards everything.
pub mod noop_sink;
/// JSON/XML pretty-printing.
pub mod pretty;
/// The ordered sink collection.
pub mod registry;
/// Severity levels for log messages.
pub mod severity;
/// The sink capability contract.
pub mod sink;

pub use compose::{EMPTY_MESSAGE, FormatError};
pub use dispatcher::LogDispatcher;
pub use noop_sink::NoopLogSink;
pub use pretty::{EMPTY_JSON, EMPTY_XML, INVALID_JSON, INVALID_XML, ParseError};
pub use registry::SinkRegistry;
pub use severity::Severity;
pub use sink::LogSink;
