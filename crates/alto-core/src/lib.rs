//! alto-core: Backend-independent data types for alto-rs.
//!
//! This crate provides the foundational types (namespace dialects, confidence
//! tallies, region bounding boxes, element counts, processing metadata) used
//! by alto-rs. It has no required dependencies — all functionality is pure Rust.

pub mod confidence;
pub mod error;
pub mod geometry;
pub mod metadata;
pub mod namespace;
pub mod statistics;

pub use confidence::{ConfidenceTally, FolderTally};
pub use error::AltoError;
pub use geometry::{RegionBox, RegionKind};
pub use metadata::{DocumentMetadata, NOT_DEFINED, ProcessingStep, SoftwareInfo};
pub use namespace::{Dialect, KNOWN_NAMESPACES, Namespace};
pub use statistics::ElementCounts;
