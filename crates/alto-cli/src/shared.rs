use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use alto::{Alto, AltoError};
use walkdir::WalkDir;

/// Resolve the INPUT arguments into a flat list of candidate files.
///
/// File arguments are taken as-is; directory arguments are walked
/// recursively and contribute every `.xml` / `.alto` file in sorted order;
/// `-` stands for standard input. A missing path or an unreadable walk
/// entry is reported on stderr and marks the run failed, but never stops
/// collection of the remaining inputs.
pub fn collect_inputs(inputs: &[PathBuf]) -> (Vec<PathBuf>, bool) {
    let mut files = Vec::new();
    let mut failed = false;
    for input in inputs {
        if input.as_os_str() == "-" || input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        if entry.file_type().is_file() && is_alto_candidate(entry.path()) {
                            files.push(entry.into_path());
                        }
                    }
                    Err(e) => {
                        eprintln!("Error: {e}");
                        failed = true;
                    }
                }
            }
        } else {
            eprintln!("Error: no such file or directory: {}", input.display());
            failed = true;
        }
    }
    (files, failed)
}

fn is_alto_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xml") || e.eq_ignore_ascii_case("alto"))
}

/// Run `on_document` over every resolved input file.
///
/// Per-file failures (missing input, unreadable file, bad encoding,
/// malformed XML, a failing extraction) are printed to stderr and poison
/// the exit status, but the batch keeps going. A file whose namespace is
/// not a recognized ALTO dialect is only a warning: it is skipped without
/// affecting the exit status.
pub fn process_documents<F>(
    inputs: &[PathBuf],
    xml_encoding: Option<&str>,
    file_encoding: &str,
    mut on_document: F,
) -> Result<(), i32>
where
    F: FnMut(&str, &Alto) -> Result<(), AltoError>,
{
    let (files, mut failed) = collect_inputs(inputs);

    for path in &files {
        let stdin = path.as_os_str() == "-";
        let name = if stdin {
            "stdin".to_string()
        } else {
            path.display().to_string()
        };

        let read = if stdin { read_stdin() } else { fs::read(path) };
        let bytes = match read {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error: {name}: {e}");
                failed = true;
                continue;
            }
        };
        let text = match alto::decode(&bytes, xml_encoding, Some(file_encoding)) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: {name}: {e}");
                failed = true;
                continue;
            }
        };
        let doc = match Alto::parse(&text) {
            Ok(doc) => doc,
            Err(e) if e.is_warning() => {
                eprintln!("Warning: {name}: {e}, skipping");
                continue;
            }
            Err(e) => {
                eprintln!("Error: {name}: {e}");
                failed = true;
                continue;
            }
        };

        if let Err(e) = on_document(&name, &doc) {
            eprintln!("Error: {name}: {e}");
            failed = true;
        }
    }

    if failed { Err(1) } else { Ok(()) }
}

fn read_stdin() -> std::io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    std::io::stdin().lock().read_to_end(&mut bytes)?;
    Ok(bytes)
}
