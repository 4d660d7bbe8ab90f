//! ALTO namespace dialects.
//!
//! ALTO documents identify their schema version through an XML namespace
//! URI. A small fixed set of URIs is recognized: the four official schema
//! versions (each with a schema-URI and an xsd-URI spelling) plus the BnF
//! production dialect. Resolution is exact string match only — no prefix
//! matching and no version negotiation.

use std::fmt;

/// An ALTO schema generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// ALTO v1 (CCS schema).
    V1,
    /// ALTO v2 (Library of Congress ns-v2).
    V2,
    /// ALTO v3.
    V3,
    /// ALTO v4.
    V4,
    /// BnF production dialect (unofficial).
    Bnf,
}

impl Dialect {
    /// Short human-readable label, e.g. `"ALTO v3"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::V1 => "ALTO v1",
            Dialect::V2 => "ALTO v2",
            Dialect::V3 => "ALTO v3",
            Dialect::V4 => "ALTO v4",
            Dialect::Bnf => "ALTO BnF",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All recognized ALTO namespace URIs and the dialect each identifies.
pub const KNOWN_NAMESPACES: &[(&str, Dialect)] = &[
    ("http://schema.ccs-gmbh.com/ALTO", Dialect::V1),
    ("http://schema.ccs-gmbh.com/ALTO/alto-1-4.xsd", Dialect::V1),
    ("http://www.loc.gov/standards/alto/ns-v2#", Dialect::V2),
    ("https://www.loc.gov/standards/alto/alto.xsd", Dialect::V2),
    ("http://www.loc.gov/standards/alto/ns-v3#", Dialect::V3),
    ("http://www.loc.gov/standards/alto/v3/alto.xsd", Dialect::V3),
    ("http://www.loc.gov/standards/alto/ns-v4#", Dialect::V4),
    ("http://www.loc.gov/standards/alto/v4/alto.xsd", Dialect::V4),
    ("http://bibnum.bnf.fr/ns/alto_prod", Dialect::Bnf),
    ("http://bibnum.bnf.fr/ns/alto_prod.xsd", Dialect::Bnf),
];

/// A resolved ALTO namespace: the URI actually declared by a document plus
/// the dialect it maps to.
///
/// A document has exactly one resolved `Namespace`; every element lookup for
/// that document uses it consistently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespace {
    uri: String,
    dialect: Dialect,
}

impl Namespace {
    /// Resolve a candidate URI against [`KNOWN_NAMESPACES`].
    ///
    /// Exact string match only; returns `None` for unknown URIs.
    pub fn from_uri(uri: &str) -> Option<Self> {
        KNOWN_NAMESPACES
            .iter()
            .find(|(known, _)| *known == uri)
            .map(|(known, dialect)| Namespace {
                uri: (*known).to_string(),
                dialect: *dialect,
            })
    }

    /// The namespace URI as declared by the document.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The schema generation this URI identifies.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
