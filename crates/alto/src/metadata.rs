//! Description and OCRProcessing metadata extraction.

use alto_core::{DocumentMetadata, ProcessingStep, SoftwareInfo};
use roxmltree::{Document, Node};

use crate::document::{child, child_text};

/// Read the `<Description>` block: source image identification, measurement
/// unit, and the three OCRProcessing step reports. Absent elements simply
/// leave their fields `None`.
pub(crate) fn extract(doc: &Document, ns: Option<&str>) -> DocumentMetadata {
    let mut meta = DocumentMetadata::default();

    let root = doc.root_element();
    let Some(description) = child(root, ns, "Description") else {
        return meta;
    };

    meta.measurement_unit = child_text(description, ns, "MeasurementUnit");

    if let Some(source) = child(description, ns, "sourceImageInformation") {
        meta.file_name = child_text(source, ns, "fileName");
        meta.file_identifier = child_text(source, ns, "fileIdentifier");
        meta.document_identifier = child_text(source, ns, "documentIdentifier");
    }

    if let Some(ocr) = child(description, ns, "OCRProcessing") {
        meta.ocr_processing_id = ocr.attribute("ID").map(str::to_string);
        meta.pre_processing = step(ocr, ns, "preProcessingStep");
        meta.ocr_processing = step(ocr, ns, "ocrProcessingStep");
        meta.post_processing = step(ocr, ns, "postProcessingStep");
    }

    meta
}

fn step(ocr: Node, ns: Option<&str>, tag: &str) -> ProcessingStep {
    let Some(node) = child(ocr, ns, tag) else {
        return ProcessingStep::default();
    };
    ProcessingStep {
        date_time: child_text(node, ns, "processingDateTime"),
        agency: child_text(node, ns, "processingAgency"),
        description: child_text(node, ns, "processingStepDescription"),
        settings: child_text(node, ns, "processingStepSettings"),
        software: software(node, ns),
    }
}

fn software(step: Node, ns: Option<&str>) -> SoftwareInfo {
    let Some(node) = child(step, ns, "processingSoftware") else {
        return SoftwareInfo::default();
    };
    SoftwareInfo {
        creator: child_text(node, ns, "softwareCreator"),
        name: child_text(node, ns, "softwareName"),
        version: child_text(node, ns, "softwareVersion"),
        description: child_text(node, ns, "applicationDescription"),
    }
}
