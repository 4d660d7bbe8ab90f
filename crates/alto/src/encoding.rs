//! Input byte decoding.
//!
//! ALTO files in the wild are not always UTF-8. Decoding honors, in order:
//! an explicit XML-encoding override (with the special label `auto` sniffing
//! the XML declaration), then the configured file encoding, then UTF-8.
//! Undecodable sequences are replaced, not fatal — the tolerant behavior
//! archives expect when re-reading mixed-provenance batches.

use alto_core::AltoError;
use encoding_rs::Encoding;

/// How far into the file the XML declaration's encoding pseudo-attribute is
/// looked for.
const SNIFF_WINDOW: usize = 128;

/// Decode raw input bytes to a string.
///
/// `xml_encoding` takes precedence when set; the label `auto` reads the
/// encoding from the document's own `<?xml ... encoding="..."?>`
/// declaration. Otherwise `file_encoding` applies, defaulting to UTF-8.
/// Labels are resolved through the WHATWG label registry, so the usual
/// aliases (`latin1`, `iso-8859-1`, `utf8`) all work.
///
/// # Errors
///
/// [`AltoError::Encoding`] for an unknown label, or for `auto` when the
/// document declares no encoding.
pub fn decode(
    bytes: &[u8],
    xml_encoding: Option<&str>,
    file_encoding: Option<&str>,
) -> Result<String, AltoError> {
    let label = match xml_encoding {
        Some("auto") => match sniff_declared_encoding(bytes) {
            Some(label) => label,
            None => {
                return Err(AltoError::Encoding(
                    "no encoding declaration found".to_string(),
                ));
            }
        },
        Some(label) => label.to_string(),
        None => file_encoding.unwrap_or("UTF-8").to_string(),
    };

    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| AltoError::Encoding(format!("unknown encoding label '{label}'")))?;

    let (text, _, _) = encoding.decode(bytes);
    Ok(text.into_owned())
}

/// Pull the encoding label out of the XML declaration, if there is one.
fn sniff_declared_encoding(bytes: &[u8]) -> Option<String> {
    let window = &bytes[..bytes.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(window);
    let head = head.split_once("?>").map_or(head.as_ref(), |(decl, _)| decl);

    let rest = head.split_once("encoding=")?.1;
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    let end = value.find(quote)?;
    Some(value[..end].to_string())
}
