//! Structured-content pretty-printing for JSON and XML payloads.
//!
//! Detection is by first character of the trimmed input: `{` or `[` for
//! JSON, `<` for XML. That is a deliberate cheap heuristic; the facade
//! targets whole-document payloads, not fragments or streams.

use std::fmt;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::Event;

/// Indent width applied to pretty-printed JSON and XML.
const INDENT: usize = 2;

/// Dispatched at DEBUG when `json` is called with blank input.
pub const EMPTY_JSON: &str = "Empty/Null json content";

/// Dispatched at DEBUG when `xml` is called with blank input.
pub const EMPTY_XML: &str = "Empty/Null xml content";

/// Dispatched at ERROR when JSON input is malformed or unrecognized.
pub const INVALID_JSON: &str = "Invalid Json";

/// Dispatched at ERROR when XML input is malformed.
pub const INVALID_XML: &str = "Invalid xml";

/// Malformed structured content.
///
/// Deliberately carries no parser detail: the dispatcher converts it to
/// a fixed diagnostic line and the caller never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    Json,
    Xml,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Json => f.write_str("invalid json content"),
            ParseError::Xml => f.write_str("invalid xml content"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Re-serializes a JSON document with 2-space indentation.
///
/// Input starting with `{` is parsed as an object, `[` as an array; key
/// order is preserved as encountered. Anything else is not recognized.
///
/// # Errors
///
/// [`ParseError::Json`] for malformed or unrecognized input.
pub fn pretty_json(raw: &str) -> Result<String, ParseError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        return Err(ParseError::Json);
    }
    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(|_| ParseError::Json)?;
    serde_json::to_string_pretty(&value).map_err(|_| ParseError::Json)
}

/// Re-indents an XML document with 2-space indentation.
///
/// Inter-element whitespace from the input is discarded and the document
/// is re-emitted one node per line, so the root opening tag is followed
/// by a line break whenever it has element content.
///
/// # Errors
///
/// [`ParseError::Xml`] for input that does not start with `<`, fails to
/// parse, or has unbalanced tags.
pub fn pretty_xml(raw: &str) -> Result<String, ParseError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('<') {
        return Err(ParseError::Xml);
    }

    let mut reader = Reader::from_str(trimmed);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    let mut depth: usize = 0;
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => {
                match event {
                    Event::Start(_) => depth += 1,
                    Event::End(_) => depth = depth.checked_sub(1).ok_or(ParseError::Xml)?,
                    _ => {}
                }
                writer.write_event(event).map_err(|_| ParseError::Xml)?;
            }
            Err(_) => return Err(ParseError::Xml),
        }
    }
    // A tag left open at EOF is not caught by the reader itself.
    if depth != 0 {
        return Err(ParseError::Xml);
    }

    String::from_utf8(writer.into_inner()).map_err(|_| ParseError::Xml)
}
