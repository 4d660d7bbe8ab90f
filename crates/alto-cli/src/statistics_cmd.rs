use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::shared::process_documents;

pub fn run(
    inputs: &[PathBuf],
    xml_encoding: Option<&str>,
    file_encoding: &str,
    format: &OutputFormat,
) -> Result<(), i32> {
    process_documents(inputs, xml_encoding, file_encoding, |name, doc| {
        let counts = doc.counts();
        match format {
            OutputFormat::Text => {
                println!("File: {name}, Statistics:");
                println!("{counts}");
            }
            OutputFormat::Json => {
                let obj = serde_json::json!({
                    "file": name,
                    "statistics": counts,
                });
                println!("{}", serde_json::to_string(&obj).unwrap());
            }
        }
        Ok(())
    })
}
