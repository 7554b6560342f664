//! Message composition: positional template formatting, throwable
//! rendering, and the message/throwable merge applied before dispatch.

use std::error::Error;
use std::fmt::{self, Display, Write as _};

/// Text dispatched when a call carries neither a message nor a throwable.
pub const EMPTY_MESSAGE: &str = "Empty/NULL log message";

/// Separator placed between a message and the rendered throwable.
const THROWABLE_SEPARATOR: &str = " : ";

/// Template/argument mismatch during composition.
///
/// This is a programmer error and is never swallowed by the dispatcher;
/// it propagates to the logging call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    ArityMismatch { placeholders: usize, args: usize },
    UnmatchedBrace { position: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FormatError::*;
        match self {
            ArityMismatch { placeholders, args } => write!(
                f,
                "template has {placeholders} placeholder(s) but {args} argument(s) were supplied"
            ),
            UnmatchedBrace { position } => {
                write!(f, "unmatched brace at byte {position} in template")
            }
        }
    }
}

impl Error for FormatError {}

/// Substitutes positional arguments into a template.
///
/// Placeholders are written `{}` and consumed left to right; `{{` and
/// `}}` produce literal braces. With an empty `args` slice the template
/// is returned verbatim, so text containing stray braces passes through
/// safely when nothing is substituted.
///
/// # Errors
///
/// Returns [`FormatError::ArityMismatch`] when the placeholder count and
/// `args.len()` differ, and [`FormatError::UnmatchedBrace`] for a lone
/// `{` or `}` in a template that does take arguments.
pub fn compose(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    if args.is_empty() {
        return Ok(template.to_owned());
    }

    let placeholders = count_placeholders(template)?;
    if placeholders != args.len() {
        return Err(FormatError::ArityMismatch {
            placeholders,
            args: args.len(),
        });
    }

    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut next_arg = args.iter();
    let mut chars = template.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '{' => {
                // Validated above, so this is a `{}` pair with an argument left.
                chars.next();
                if let Some(arg) = next_arg.next() {
                    let _ = write!(out, "{arg}");
                }
            }
            '}' => {
                chars.next();
                out.push('}');
            }
            c => out.push(c),
        }
    }
    Ok(out)
}

/// First pass: count `{}` placeholders and reject stray braces.
fn count_placeholders(template: &str) -> Result<usize, FormatError> {
    let mut count = 0;
    let mut chars = template.char_indices().peekable();
    while let Some((position, c)) = chars.next() {
        match c {
            '{' => match chars.peek() {
                Some((_, '{')) => {
                    chars.next();
                }
                Some((_, '}')) => {
                    chars.next();
                    count += 1;
                }
                _ => return Err(FormatError::UnmatchedBrace { position }),
            },
            '}' => match chars.peek() {
                Some((_, '}')) => {
                    chars.next();
                }
                _ => return Err(FormatError::UnmatchedBrace { position }),
            },
            _ => {}
        }
    }
    Ok(count)
}

/// Renders an error and its `source()` chain as multi-line text.
///
/// Rust errors carry a cause chain rather than stack frames, so the
/// conventional rendering is the top-level message followed by one
/// `Caused by:` line per link. This never fails.
#[must_use]
pub fn render_throwable(throwable: &dyn Error) -> String {
    let mut out = throwable.to_string();
    let mut source = throwable.source();
    while let Some(cause) = source {
        let _ = write!(out, "\nCaused by: {cause}");
        source = cause.source();
    }
    out
}

/// Normalizes the (message, throwable) pair into the final dispatch text.
///
/// Message and throwable merge as `message : trace`; a throwable alone
/// dispatches as its trace; when neither a non-empty message nor a
/// throwable is present the fixed [`EMPTY_MESSAGE`] placeholder is used,
/// so sinks never receive empty text.
#[must_use]
pub fn merge_message_and_throwable(
    message: Option<String>,
    throwable: Option<&dyn Error>,
) -> String {
    match (message, throwable) {
        (Some(message), Some(throwable)) => {
            format!(
                "{message}{THROWABLE_SEPARATOR}{}",
                render_throwable(throwable)
            )
        }
        (None, Some(throwable)) => render_throwable(throwable),
        (Some(message), None) if !message.is_empty() => message,
        _ => EMPTY_MESSAGE.to_owned(),
    }
}
