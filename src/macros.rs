//! Leveled logging macros for [`LogDispatcher`](crate::LogDispatcher).
//!
//! The macros collect the trailing expressions into the positional
//! argument slice the dispatcher's formatter consumes, so call sites
//! read like ordinary leveled log calls:
//!
//! ```ignore
//! log_info!(dispatcher, "sent {} bytes to {}", n, peer)?;
//! ```

// ============================================================================
// 1. GENERIC INTERNAL MACRO (The "Worker")
// ============================================================================

#[macro_export]
macro_rules! log_with {
    ($dispatcher:expr, $lvl:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {{
        let __args: &[&dyn ::std::fmt::Display] = &[$(&$arg),*];
        $dispatcher.log_with($lvl, $tpl, __args)
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS
// ============================================================================

#[macro_export]
macro_rules! log_verbose { ($dispatcher:expr, $($arg:tt)*) => { $crate::log_with!($dispatcher, $crate::severity::Severity::Verbose, $($arg)*) } }

#[macro_export]
macro_rules! log_debug { ($dispatcher:expr, $($arg:tt)*) => { $crate::log_with!($dispatcher, $crate::severity::Severity::Debug, $($arg)*) } }

#[macro_export]
macro_rules! log_info { ($dispatcher:expr, $($arg:tt)*) => { $crate::log_with!($dispatcher, $crate::severity::Severity::Info, $($arg)*) } }

#[macro_export]
macro_rules! log_warn { ($dispatcher:expr, $($arg:tt)*) => { $crate::log_with!($dispatcher, $crate::severity::Severity::Warn, $($arg)*) } }

#[macro_export]
macro_rules! log_error { ($dispatcher:expr, $($arg:tt)*) => { $crate::log_with!($dispatcher, $crate::severity::Severity::Error, $($arg)*) } }
