//! Integration tests for the `statistics` subcommand.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const NS: &str = "http://www.loc.gov/standards/alto/ns-v3#";

fn cmd() -> Command {
    Command::cargo_bin("alto-tools").unwrap()
}

#[test]
fn counts_all_five_element_kinds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.xml");
    fs::write(
        &path,
        format!(
            r#"<alto xmlns="{NS}"><Layout><Page>
                <Illustration ID="i1"/>
                <TextLine><String CONTENT="a"><Glyph CONTENT="a"/></String></TextLine>
                <TextLine><String CONTENT="b"/><String CONTENT="c"/></TextLine>
            </Page></Layout></alto>"#
        ),
    )
    .unwrap();

    cmd()
        .arg("statistics")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics:"))
        .stdout(predicate::str::contains("# of <TextLine> elements: 2"))
        .stdout(predicate::str::contains("# of <String> elements: 3"))
        .stdout(predicate::str::contains("# of <Glyph> elements: 1"))
        .stdout(predicate::str::contains("# of <Illustration> elements: 1"))
        .stdout(predicate::str::contains("# of <GraphicalElement> elements: 0"));
}

#[test]
fn empty_document_reports_zero_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.xml");
    fs::write(&path, format!(r#"<alto xmlns="{NS}"><Layout/></alto>"#)).unwrap();

    cmd()
        .arg("statistics")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# of <TextLine> elements: 0"));
}

#[test]
fn json_format_has_numeric_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.xml");
    fs::write(
        &path,
        format!(
            r#"<alto xmlns="{NS}"><Layout><TextLine><String CONTENT="x"/></TextLine></Layout></alto>"#
        ),
    )
    .unwrap();

    let output = cmd()
        .arg("statistics")
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let obj: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(obj["statistics"]["text_lines"], 1);
    assert_eq!(obj["statistics"]["strings"], 1);
    assert_eq!(obj["statistics"]["glyphs"], 0);
}
