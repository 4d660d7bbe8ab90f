//! Error types for alto-rs.
//!
//! Provides [`AltoError`] covering the full failure taxonomy: fatal parse,
//! I/O, and encoding errors, the non-fatal unrecognized-namespace condition,
//! and per-record geometry attribute violations.

use std::fmt;

/// Error conditions raised while reading and extracting ALTO documents.
///
/// Not every variant is fatal for a batch: an unrecognized namespace skips
/// the affected document with a warning, while parse and I/O errors fail
/// that document but allow processing to continue with the next one. Use
/// [`is_warning`](AltoError::is_warning) to classify.
#[derive(Debug, Clone, PartialEq)]
pub enum AltoError {
    /// Malformed XML; fatal for the affected document.
    Parse(String),
    /// I/O error reading input data.
    Io(String),
    /// Unknown encoding label or undecodable input bytes.
    Encoding(String),
    /// The document's namespace URI is missing or not in the known ALTO
    /// dialect list. Extraction must not run for such a document.
    NamespaceNotRecognized {
        /// The candidate URI, if the document declared one at all.
        uri: Option<String>,
    },
    /// A region record lacks a required attribute.
    MissingAttribute {
        /// Element tag name (e.g. "Illustration").
        element: String,
        /// The element's ID attribute, when present.
        id: Option<String>,
        /// Name of the missing attribute.
        attribute: String,
    },
    /// A required attribute is present but its value cannot be interpreted.
    InvalidAttribute {
        /// Element tag name.
        element: String,
        /// The element's ID attribute, when present.
        id: Option<String>,
        /// Name of the offending attribute.
        attribute: String,
        /// The raw attribute value.
        value: String,
    },
}

impl AltoError {
    /// Returns `true` for warning-level conditions that skip a document
    /// without failing the run.
    pub fn is_warning(&self) -> bool {
        matches!(self, AltoError::NamespaceNotRecognized { .. })
    }
}

impl fmt::Display for AltoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AltoError::Parse(msg) => write!(f, "parse error: {msg}"),
            AltoError::Io(msg) => write!(f, "I/O error: {msg}"),
            AltoError::Encoding(msg) => write!(f, "encoding error: {msg}"),
            AltoError::NamespaceNotRecognized { uri: Some(uri) } => {
                write!(f, "namespace {uri} is not registered")
            }
            AltoError::NamespaceNotRecognized { uri: None } => {
                write!(f, "no namespace declaration found")
            }
            AltoError::MissingAttribute {
                element,
                id,
                attribute,
            } => {
                write!(f, "missing attribute {attribute} on <{element}>")?;
                if let Some(id) = id {
                    write!(f, " (ID {id})")?;
                }
                Ok(())
            }
            AltoError::InvalidAttribute {
                element,
                id,
                attribute,
                value,
            } => {
                write!(f, "invalid {attribute} value '{value}' on <{element}>")?;
                if let Some(id) = id {
                    write!(f, " (ID {id})")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for AltoError {}

impl From<std::io::Error> for AltoError {
    fn from(err: std::io::Error) -> Self {
        AltoError::Io(err.to_string())
    }
}
