//! Processing metadata types.
//!
//! ALTO's `<Description>` block records where a document image came from and
//! which pre-/OCR-/post-processing steps produced the text. All fields are
//! optional since real-world files routinely omit most of them; reports
//! print [`NOT_DEFINED`] in place of absent values.

/// Sentinel printed for metadata fields the document does not define.
pub const NOT_DEFINED: &str = "-- NOT_DEFINED --";

/// Software identification nested inside a processing step.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoftwareInfo {
    /// softwareCreator element text.
    pub creator: Option<String>,
    /// softwareName element text.
    pub name: Option<String>,
    /// softwareVersion element text.
    pub version: Option<String>,
    /// applicationDescription element text.
    pub description: Option<String>,
}

impl SoftwareInfo {
    /// Returns `true` if all fields are `None`.
    pub fn is_empty(&self) -> bool {
        self.creator.is_none()
            && self.name.is_none()
            && self.version.is_none()
            && self.description.is_none()
    }
}

/// One of the three processing-step blocks (pre / OCR / post).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessingStep {
    /// processingDateTime element text.
    pub date_time: Option<String>,
    /// processingAgency element text.
    pub agency: Option<String>,
    /// processingStepDescription element text.
    pub description: Option<String>,
    /// processingStepSettings element text.
    pub settings: Option<String>,
    /// Nested processingSoftware block.
    pub software: SoftwareInfo,
}

impl ProcessingStep {
    /// Returns `true` if no field of the step (including its software
    /// block) is present.
    pub fn is_empty(&self) -> bool {
        self.date_time.is_none()
            && self.agency.is_none()
            && self.description.is_none()
            && self.settings.is_none()
            && self.software.is_empty()
    }
}

/// The fixed set of metadata fields reported for one document.
///
/// Every field lookup is independent: a missing ancestor element leaves its
/// own fields `None` without affecting siblings.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentMetadata {
    /// sourceImageInformation / fileName.
    pub file_name: Option<String>,
    /// sourceImageInformation / fileIdentifier.
    pub file_identifier: Option<String>,
    /// sourceImageInformation / documentIdentifier.
    pub document_identifier: Option<String>,
    /// Description / MeasurementUnit.
    pub measurement_unit: Option<String>,
    /// OCRProcessing element's ID attribute.
    pub ocr_processing_id: Option<String>,
    /// preProcessingStep block.
    pub pre_processing: ProcessingStep,
    /// ocrProcessingStep block.
    pub ocr_processing: ProcessingStep,
    /// postProcessingStep block.
    pub post_processing: ProcessingStep,
}

impl DocumentMetadata {
    /// Returns `true` if the document defined none of the reported fields.
    pub fn is_empty(&self) -> bool {
        self.file_name.is_none()
            && self.file_identifier.is_none()
            && self.document_identifier.is_none()
            && self.measurement_unit.is_none()
            && self.ocr_processing_id.is_none()
            && self.pre_processing.is_empty()
            && self.ocr_processing.is_empty()
            && self.post_processing.is_empty()
    }
}
