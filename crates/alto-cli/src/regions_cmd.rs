use std::path::PathBuf;

use alto::RegionKind;

use crate::cli::OutputFormat;
use crate::shared::process_documents;

/// Shared driver for the `illustrations` and `graphics` subcommands; the
/// two differ only in the element kind they report.
pub fn run(
    inputs: &[PathBuf],
    xml_encoding: Option<&str>,
    file_encoding: &str,
    format: &OutputFormat,
    kind: RegionKind,
) -> Result<(), i32> {
    process_documents(inputs, xml_encoding, file_encoding, |name, doc| {
        let boxes = doc.region_boxes(kind)?;
        match format {
            OutputFormat::Text => {
                for b in &boxes {
                    println!("File: {name}, {kind}: {b}");
                }
            }
            OutputFormat::Json => {
                let obj = serde_json::json!({
                    "file": name,
                    "kind": kind.tag_name(),
                    "regions": boxes,
                });
                println!("{}", serde_json::to_string(&obj).unwrap());
            }
        }
        Ok(())
    })
}
