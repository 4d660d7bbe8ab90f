//! Integration tests for the `text` subcommand.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const NS: &str = "http://www.loc.gov/standards/alto/ns-v3#";

fn cmd() -> Command {
    Command::cargo_bin("alto-tools").unwrap()
}

fn alto_page(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<alto xmlns="{NS}"><Layout><Page><PrintSpace><TextBlock>{body}</TextBlock></PrintSpace></Page></Layout></alto>"#
    )
}

#[test]
fn extracts_space_separated_words_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.xml");
    fs::write(
        &path,
        alto_page(concat!(
            r#"<TextLine><String CONTENT="Stille"/><String CONTENT="Gedanken"/></TextLine>"#,
            r#"<TextLine><String CONTENT="zweite"/><String CONTENT="Zeile"/></TextLine>"#,
        )),
    )
    .unwrap();

    cmd()
        .arg("text")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Stille Gedanken "))
        .stdout(predicate::str::contains("\nzweite Zeile "));
}

#[test]
fn stdout_carries_only_the_extracted_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.xml");
    fs::write(
        &path,
        alto_page(r#"<TextLine><String CONTENT="plain"/></TextLine>"#),
    )
    .unwrap();

    cmd()
        .arg("text")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("File:").not())
        .stdout("\nplain \n");
}

#[test]
fn hyphenated_words_are_merged_across_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.xml");
    fs::write(
        &path,
        alto_page(concat!(
            r#"<TextLine><String CONTENT="exam" SUBS_TYPE="HypPart1" SUBS_CONTENT="example"/></TextLine>"#,
            r#"<TextLine><String CONTENT="ple" SUBS_TYPE="HypPart2" SUBS_CONTENT="example"/></TextLine>"#,
        )),
    )
    .unwrap();

    cmd()
        .arg("text")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("example "))
        .stdout(predicate::str::contains("exam\n").not());
}

#[test]
fn file_encoding_option_decodes_latin1_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.xml");
    let xml = alto_page(r#"<TextLine><String CONTENT="Grüße"/></TextLine>"#);
    let latin1: Vec<u8> = xml
        .chars()
        .map(|c| if c == 'ü' { 0xfc } else if c == 'ß' { 0xdf } else { c as u8 })
        .collect();
    fs::write(&path, latin1).unwrap();

    cmd()
        .arg("text")
        .arg(&path)
        .args(["--file-encoding", "ISO-8859-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grüße"));
}

#[test]
fn xml_encoding_auto_sniffs_the_declaration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("declared.xml");
    let xml = format!(
        r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<alto xmlns="{NS}"><Layout><TextLine><String CONTENT="Grüße"/></TextLine></Layout></alto>"#
    );
    let latin1: Vec<u8> = xml
        .chars()
        .map(|c| if c == 'ü' { 0xfc } else if c == 'ß' { 0xdf } else { c as u8 })
        .collect();
    fs::write(&path, latin1).unwrap();

    cmd()
        .arg("text")
        .arg(&path)
        .args(["--xml-encoding", "auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grüße"));
}

#[test]
fn dash_reads_the_document_from_stdin() {
    cmd()
        .args(["text", "-"])
        .write_stdin(alto_page(r#"<TextLine><String CONTENT="piped"/></TextLine>"#))
        .assert()
        .success()
        .stdout(predicate::str::contains("piped "));
}

#[test]
fn unknown_encoding_label_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.xml");
    fs::write(&path, alto_page("")).unwrap();

    cmd()
        .arg("text")
        .arg(&path)
        .args(["--file-encoding", "NOT-A-CHARSET"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn json_format_emits_file_and_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.xml");
    fs::write(
        &path,
        alto_page(r#"<TextLine><String CONTENT="hello"/></TextLine>"#),
    )
    .unwrap();

    let output = cmd()
        .arg("text")
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let obj: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(obj["text"].as_str().unwrap().contains("hello "));
    assert!(obj["file"].as_str().unwrap().ends_with("page.xml"));
}
