use std::path::PathBuf;

use alto::{NOT_DEFINED, ProcessingStep};

use crate::cli::OutputFormat;
use crate::shared::process_documents;

pub fn run(
    inputs: &[PathBuf],
    xml_encoding: Option<&str>,
    file_encoding: &str,
    format: &OutputFormat,
) -> Result<(), i32> {
    process_documents(inputs, xml_encoding, file_encoding, |name, doc| {
        let meta = doc.metadata();
        match format {
            OutputFormat::Text => {
                println!("File: {name}");
                println!("<Description>");
                row("fileName", meta.file_name.as_deref());
                row("fileIdentifier", meta.file_identifier.as_deref());
                row("documentIdentifier", meta.document_identifier.as_deref());
                row("MeasurementUnit", meta.measurement_unit.as_deref());
                println!("<OCRProcessing>");
                row("ID", meta.ocr_processing_id.as_deref());
                step("preProcessingStep", &meta.pre_processing);
                step("ocrProcessingStep", &meta.ocr_processing);
                step("postProcessingStep", &meta.post_processing);
            }
            OutputFormat::Json => {
                let obj = serde_json::json!({
                    "file": name,
                    "metadata": meta,
                });
                println!("{}", serde_json::to_string(&obj).unwrap());
            }
        }
        Ok(())
    })
}

fn row(field: &str, value: Option<&str>) {
    println!("{field:<27}=   {}", value.unwrap_or(NOT_DEFINED));
}

fn step(section: &str, step: &ProcessingStep) {
    println!("<{section}>");
    row("processingDateTime", step.date_time.as_deref());
    row("processingAgency", step.agency.as_deref());
    row("processingStepDescription", step.description.as_deref());
    row("processingStepSettings", step.settings.as_deref());
    row("softwareCreator", step.software.creator.as_deref());
    row("softwareName", step.software.name.as_deref());
    row("softwareVersion", step.software.version.as_deref());
    row("applicationDescription", step.software.description.as_deref());
}
