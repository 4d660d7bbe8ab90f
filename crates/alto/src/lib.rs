//! alto: Parse ALTO OCR XML and extract derived values.
//!
//! This is the public API facade crate for alto-rs. It decodes input bytes,
//! parses the XML tree, resolves the ALTO namespace dialect, and exposes the
//! field extractors (text, word confidence, region boxes, element counts,
//! processing metadata).
//!
//! # Architecture
//!
//! - **alto-core**: Backend-independent data types (dialect table, tallies,
//!   boxes, metadata)
//! - **alto** (this crate): XML parsing, namespace resolution, extractors
//!
//! # Example
//!
//! ```
//! let xml = r#"<alto xmlns="http://www.loc.gov/standards/alto/ns-v3#">
//!     <Layout><Page><PrintSpace><TextBlock>
//!         <TextLine><String CONTENT="Hello" WC="0.9"/></TextLine>
//!     </TextBlock></PrintSpace></Page></Layout>
//! </alto>"#;
//! let doc = alto::Alto::parse(xml).unwrap();
//! assert_eq!(doc.mean_confidence(), 90.0);
//! assert!(doc.text().contains("Hello"));
//! ```

mod confidence;
mod document;
mod encoding;
mod metadata;
mod regions;
mod statistics;
mod text;

pub use alto_core::{
    AltoError, ConfidenceTally, Dialect, DocumentMetadata, ElementCounts, FolderTally,
    KNOWN_NAMESPACES, NOT_DEFINED, Namespace, ProcessingStep, RegionBox, RegionKind, SoftwareInfo,
};
pub use document::Alto;
pub use encoding::decode;
