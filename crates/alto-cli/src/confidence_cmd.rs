use std::path::PathBuf;

use alto::FolderTally;

use crate::cli::OutputFormat;
use crate::shared::process_documents;

pub fn run(
    inputs: &[PathBuf],
    xml_encoding: Option<&str>,
    file_encoding: &str,
    format: &OutputFormat,
) -> Result<(), i32> {
    let mut folder = FolderTally::new();

    process_documents(inputs, xml_encoding, file_encoding, |name, doc| {
        let mean = doc.mean_confidence();
        folder.add_file(mean);
        match format {
            OutputFormat::Text => {
                println!("File: {name}, Confidence: {mean:.2}");
            }
            OutputFormat::Json => {
                let obj = serde_json::json!({
                    "file": name,
                    "confidence": mean,
                });
                println!("{}", serde_json::to_string(&obj).unwrap());
            }
        }
        Ok(())
    })?;

    // The folder summary only makes sense once there is something to average.
    if folder.files() >= 2 {
        match format {
            OutputFormat::Text => {
                println!("Confidence of folder: {:.2}", folder.mean_percent());
            }
            // Nested under its own key so consumers of the per-file object
            // stream can tell the trailing summary apart.
            OutputFormat::Json => {
                let obj = serde_json::json!({
                    "folder": {
                        "files": folder.files(),
                        "confidence": folder.mean_percent(),
                    },
                });
                println!("{}", serde_json::to_string(&obj).unwrap());
            }
        }
    }

    Ok(())
}
