//! Region bounding boxes for non-text page content.

use std::fmt;

/// The two region element kinds that carry extractable bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionKind {
    /// `<Illustration>` — pictures, photographs, drawings.
    Illustration,
    /// `<GraphicalElement>` — rules, separators, other non-text graphics.
    GraphicalElement,
}

impl RegionKind {
    /// The element tag name as it appears in ALTO documents.
    pub fn tag_name(&self) -> &'static str {
        match self {
            RegionKind::Illustration => "Illustration",
            RegionKind::GraphicalElement => "GraphicalElement",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// Bounding box of one region element.
///
/// All four geometry attributes are required on a well-formed record; a
/// region missing any of them is rejected during extraction rather than
/// represented partially.
///
/// The `Display` form is the report format `ID=HEIGHT,WIDTH,VPOS,HPOS`,
/// in exactly that field order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionBox {
    /// The region's ID attribute.
    pub id: String,
    /// HEIGHT attribute.
    pub height: f64,
    /// WIDTH attribute.
    pub width: f64,
    /// VPOS attribute (vertical offset from the page origin).
    pub vpos: f64,
    /// HPOS attribute (horizontal offset from the page origin).
    pub hpos: f64,
}

impl fmt::Display for RegionBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={},{},{},{}",
            self.id, self.height, self.width, self.vpos, self.hpos
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_kind_tag_names() {
        assert_eq!(RegionKind::Illustration.tag_name(), "Illustration");
        assert_eq!(RegionKind::GraphicalElement.tag_name(), "GraphicalElement");
        assert_eq!(RegionKind::Illustration.to_string(), "Illustration");
    }

    #[test]
    fn region_box_display_field_order() {
        let b = RegionBox {
            id: "block_20".to_string(),
            height: 201.0,
            width: 321.0,
            vpos: 61.0,
            hpos: 226.0,
        };
        assert_eq!(b.to_string(), "block_20=201,321,61,226");
    }

    #[test]
    fn region_box_display_keeps_fractional_coordinates() {
        let b = RegionBox {
            id: "b1".to_string(),
            height: 10.5,
            width: 20.0,
            vpos: 0.0,
            hpos: 3.25,
        };
        assert_eq!(b.to_string(), "b1=10.5,20,0,3.25");
    }

    #[test]
    fn region_box_clone_and_eq() {
        let b1 = RegionBox {
            id: "x".to_string(),
            height: 1.0,
            width: 2.0,
            vpos: 3.0,
            hpos: 4.0,
        };
        let b2 = b1.clone();
        assert_eq!(b1, b2);
    }
}
