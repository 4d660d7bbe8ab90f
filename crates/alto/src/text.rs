//! Text content extraction with hyphenation merging.

use roxmltree::Document;

use crate::document::is_named;

/// Extract the document's text: a line break per TextLine, each String's
/// CONTENT followed by a space, in document order.
///
/// Hyphenated words split across a line break carry SUBS_TYPE markers: the
/// `HypPart1` half is emitted without its trailing space and suppresses the
/// following line break, so the `HypPart2` half concatenates directly onto
/// it and completes the word. Strings without a CONTENT attribute are
/// skipped.
pub(crate) fn extract_text(doc: &Document, ns: Option<&str>) -> String {
    let mut out = String::new();
    let mut pending_hyphen = false;

    for line in doc
        .descendants()
        .filter(|n| is_named(*n, ns, "TextLine"))
    {
        if !pending_hyphen {
            out.push('\n');
        }
        pending_hyphen = false;

        for word in line.children().filter(|n| is_named(*n, ns, "String")) {
            let Some(content) = word.attribute("CONTENT") else {
                continue;
            };
            out.push_str(content);
            if word
                .attribute("SUBS_TYPE")
                .is_some_and(|t| t.contains("HypPart1"))
            {
                pending_hyphen = true;
            } else {
                out.push(' ');
                pending_hyphen = false;
            }
        }
    }

    out
}
