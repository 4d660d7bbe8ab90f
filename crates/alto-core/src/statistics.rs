//! Element count statistics.

use std::fmt;

/// Per-document counts of the five reported element kinds.
///
/// The `Display` form is the statistics report body: one
/// `# of <Tag> elements: N` line per kind, in fixed order, no trailing
/// newline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementCounts {
    /// Number of `<TextLine>` elements.
    pub text_lines: usize,
    /// Number of `<String>` elements.
    pub strings: usize,
    /// Number of `<Glyph>` elements.
    pub glyphs: usize,
    /// Number of `<Illustration>` elements.
    pub illustrations: usize,
    /// Number of `<GraphicalElement>` elements.
    pub graphics: usize,
}

impl ElementCounts {
    /// Returns `true` if no counted element was found at all.
    pub fn is_empty(&self) -> bool {
        self.text_lines == 0
            && self.strings == 0
            && self.glyphs == 0
            && self.illustrations == 0
            && self.graphics == 0
    }
}

impl fmt::Display for ElementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "# of <TextLine> elements: {}\n\
             # of <String> elements: {}\n\
             # of <Glyph> elements: {}\n\
             # of <Illustration> elements: {}\n\
             # of <GraphicalElement> elements: {}",
            self.text_lines, self.strings, self.glyphs, self.illustrations, self.graphics
        )
    }
}
