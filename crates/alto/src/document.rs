//! Parsed ALTO documents and namespace resolution.

use alto_core::{
    AltoError, ConfidenceTally, DocumentMetadata, ElementCounts, Namespace, RegionBox, RegionKind,
};
use roxmltree::{Document, Node};

use crate::{confidence, metadata, regions, statistics, text};

/// A parsed ALTO document with its resolved namespace dialect.
///
/// Borrows the decoded XML text for its lifetime; parse once, run any number
/// of extractions, drop. Parsing fails up front for malformed XML and for
/// documents whose namespace is not a recognized ALTO dialect, so extractors
/// never run against a tree with unknown tag names.
pub struct Alto<'input> {
    doc: Document<'input>,
    namespace: Namespace,
}

impl<'input> Alto<'input> {
    /// Parse ALTO XML text and resolve its namespace.
    ///
    /// # Errors
    ///
    /// [`AltoError::Parse`] for malformed XML and
    /// [`AltoError::NamespaceNotRecognized`] when the document declares no
    /// namespace or one outside the known dialect list.
    pub fn parse(text: &'input str) -> Result<Self, AltoError> {
        let doc = Document::parse(text).map_err(|e| AltoError::Parse(e.to_string()))?;
        let namespace = resolve_namespace(&doc)?;
        Ok(Self { doc, namespace })
    }

    /// The resolved namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Extract the document's text content, one line per TextLine, with
    /// hyphenated words merged across line breaks.
    pub fn text(&self) -> String {
        text::extract_text(&self.doc, self.elem_ns())
    }

    /// Mean word confidence as a percentage in `[0, 100]`, rounded to two
    /// decimals. Zero when no String carries a usable WC attribute.
    pub fn mean_confidence(&self) -> f64 {
        self.confidence_tally().mean_percent()
    }

    /// The underlying WC sum/count tally.
    pub fn confidence_tally(&self) -> ConfidenceTally {
        confidence::tally(&self.doc, self.elem_ns())
    }

    /// Bounding boxes of all regions of `kind`, in document order.
    ///
    /// # Errors
    ///
    /// [`AltoError::MissingAttribute`] / [`AltoError::InvalidAttribute`]
    /// when a region lacks a required geometry attribute; no partial record
    /// is produced.
    pub fn region_boxes(&self, kind: RegionKind) -> Result<Vec<RegionBox>, AltoError> {
        regions::extract(&self.doc, self.elem_ns(), kind)
    }

    /// Counts of the five reported element kinds.
    pub fn counts(&self) -> ElementCounts {
        statistics::count(&self.doc, self.elem_ns())
    }

    /// The fixed processing-metadata field set, absent fields left `None`.
    pub fn metadata(&self) -> DocumentMetadata {
        metadata::extract(&self.doc, self.elem_ns())
    }

    /// Namespace URI qualifying the document's elements.
    ///
    /// Usually the resolved URI, but a document matched through the
    /// schemaLocation fallback has un-namespaced elements, so lookups must
    /// follow whatever the root element actually carries.
    fn elem_ns(&self) -> Option<&str> {
        self.doc.root_element().tag_name().namespace()
    }
}

impl std::fmt::Debug for Alto<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alto")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

/// Namespaces that qualify attributes rather than elements; never dialect
/// candidates.
const ATTRIBUTE_NAMESPACES: &[&str] = &[
    "http://www.w3.org/2001/XMLSchema-instance",
    "http://www.w3.org/1999/xlink",
];

fn is_uri(candidate: &str) -> bool {
    candidate.starts_with("http://") || candidate.starts_with("https://")
}

/// Determine the document's ALTO dialect.
///
/// Candidates, in order: the root element's structural tag namespace (when
/// it looks like a URI), any element namespace declared on the root, then
/// tokens of a schemaLocation attribute. The first candidate found is
/// matched exactly against the known dialect list; an unknown candidate is
/// reported, not substituted.
fn resolve_namespace(doc: &Document) -> Result<Namespace, AltoError> {
    let root = doc.root_element();

    if let Some(uri) = root.tag_name().namespace() {
        if is_uri(uri) {
            return Namespace::from_uri(uri).ok_or_else(|| AltoError::NamespaceNotRecognized {
                uri: Some(uri.to_string()),
            });
        }
    }

    if let Some(decl) = root
        .namespaces()
        .find(|ns| is_uri(ns.uri()) && !ATTRIBUTE_NAMESPACES.contains(&ns.uri()))
    {
        let uri = decl.uri();
        return Namespace::from_uri(uri).ok_or_else(|| AltoError::NamespaceNotRecognized {
            uri: Some(uri.to_string()),
        });
    }

    for attr in root.attributes() {
        if attr.name() == "schemaLocation" || attr.name() == "noNamespaceSchemaLocation" {
            for token in attr.value().split_whitespace() {
                if let Some(ns) = Namespace::from_uri(token) {
                    return Ok(ns);
                }
            }
            if let Some(token) = attr.value().split_whitespace().find(|t| is_uri(t)) {
                return Err(AltoError::NamespaceNotRecognized {
                    uri: Some(token.to_string()),
                });
            }
        }
    }

    Err(AltoError::NamespaceNotRecognized { uri: None })
}

/// Element test: tag name and namespace both match.
pub(crate) fn is_named(node: Node, ns: Option<&str>, tag: &str) -> bool {
    node.is_element() && node.tag_name().name() == tag && node.tag_name().namespace() == ns
}

/// First direct child element with the given tag name.
pub(crate) fn child<'a, 'input>(
    node: Node<'a, 'input>,
    ns: Option<&str>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|c| is_named(*c, ns, tag))
}

/// Text content of the first direct child element with the given tag name.
pub(crate) fn child_text(node: Node, ns: Option<&str>, tag: &str) -> Option<String> {
    child(node, ns, tag)
        .and_then(|c| c.text())
        .map(str::to_string)
}
