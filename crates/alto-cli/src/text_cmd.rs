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
        let text = doc.text();
        match format {
            // Only the extracted text goes to stdout; the output must stay
            // pipeable as plain text with no per-file framing.
            OutputFormat::Text => {
                println!("{text}");
            }
            OutputFormat::Json => {
                let obj = serde_json::json!({
                    "file": name,
                    "text": text,
                });
                println!("{}", serde_json::to_string(&obj).unwrap());
            }
        }
        Ok(())
    })
}
