//! Illustration and GraphicalElement bounding boxes.

use alto_core::{AltoError, RegionBox, RegionKind};
use roxmltree::{Document, Node};

use crate::document::is_named;

/// Collect the bounding box of every element of `kind`, in document order.
///
/// A region with a missing or unparseable ID or coordinate attribute fails
/// the whole extraction; no partial record is ever produced.
pub(crate) fn extract(
    doc: &Document,
    ns: Option<&str>,
    kind: RegionKind,
) -> Result<Vec<RegionBox>, AltoError> {
    doc.descendants()
        .filter(|n| is_named(*n, ns, kind.tag_name()))
        .map(|n| region_box(n, kind))
        .collect()
}

fn region_box(node: Node, kind: RegionKind) -> Result<RegionBox, AltoError> {
    let id = require(node, kind, "ID")?.to_string();
    Ok(RegionBox {
        height: coordinate(node, kind, &id, "HEIGHT")?,
        width: coordinate(node, kind, &id, "WIDTH")?,
        vpos: coordinate(node, kind, &id, "VPOS")?,
        hpos: coordinate(node, kind, &id, "HPOS")?,
        id,
    })
}

fn require<'a>(node: Node<'a, '_>, kind: RegionKind, attribute: &str) -> Result<&'a str, AltoError> {
    node.attribute(attribute)
        .ok_or_else(|| AltoError::MissingAttribute {
            element: kind.tag_name().to_string(),
            id: node.attribute("ID").map(str::to_string),
            attribute: attribute.to_string(),
        })
}

fn coordinate(node: Node, kind: RegionKind, id: &str, attribute: &str) -> Result<f64, AltoError> {
    let value = node
        .attribute(attribute)
        .ok_or_else(|| AltoError::MissingAttribute {
            element: kind.tag_name().to_string(),
            id: Some(id.to_string()),
            attribute: attribute.to_string(),
        })?;
    value.parse().map_err(|_| AltoError::InvalidAttribute {
        element: kind.tag_name().to_string(),
        id: Some(id.to_string()),
        attribute: attribute.to_string(),
        value: value.to_string(),
    })
}
