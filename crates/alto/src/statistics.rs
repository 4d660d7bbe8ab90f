//! Element tallies shown by the statistics report.

use alto_core::ElementCounts;
use roxmltree::Document;

pub(crate) fn count(doc: &Document, ns: Option<&str>) -> ElementCounts {
    let mut counts = ElementCounts::default();
    for node in doc.descendants().filter(|n| n.is_element()) {
        if node.tag_name().namespace() != ns {
            continue;
        }
        match node.tag_name().name() {
            "TextLine" => counts.text_lines += 1,
            "String" => counts.strings += 1,
            "Glyph" => counts.glyphs += 1,
            "Illustration" => counts.illustrations += 1,
            "GraphicalElement" => counts.graphics += 1,
            _ => {}
        }
    }
    counts
}
