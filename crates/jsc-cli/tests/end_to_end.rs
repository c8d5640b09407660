//! End-to-end test: synthetic corpus on disk, built-in adapter, both
//! report artifacts written and carrying the expected scores.

use std::fs;
use std::path::Path;

use jsc_cli::run::{run, RunArgs};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("has parent")).expect("mkdir");
    fs::write(path, content).expect("write");
}

fn fixture() -> TempDir {
    let tmp = TempDir::new().expect("tempdir");
    let root = tmp.path();

    write(root, "test-schema.json", "{}");
    write(
        root,
        "tests/draft7/type.json",
        r#"[
            {
                "description": "integer type",
                "schema": {"type": "integer"},
                "tests": [
                    {"description": "an integer", "data": 1, "valid": true},
                    {"description": "a string", "data": "x", "valid": false}
                ]
            }
        ]"#,
    );
    write(
        root,
        "tests/draft7/ref-remote.json",
        r#"[
            {
                "description": "remote ref",
                "schema": {"$ref": "http://localhost:1234/integer.json"},
                "tests": [
                    {"description": "an integer", "data": 7, "valid": true},
                    {"description": "a string", "data": "seven", "valid": false}
                ]
            }
        ]"#,
    );
    write(root, "remotes/integer.json", r#"{"type": "integer"}"#);
    tmp
}

#[test]
fn test_run_writes_both_reports() {
    let corpus = fixture();
    let out = TempDir::new().expect("tempdir");

    run(&RunArgs {
        corpus_root: corpus.path().to_path_buf(),
        out_dir: out.path().to_path_buf(),
        drafts: vec![],
    })
    .expect("run");

    let markdown = fs::read_to_string(out.path().join("report.md")).expect("report.md");
    assert!(markdown.contains("# Overall comparison"));
    assert!(markdown.contains("Jsonschema"));
    assert!(markdown.contains("DRAFT_07"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("report.json")).expect("json"))
            .expect("parse");

    let rows = json["summary"]["implementations"].as_array().expect("rows");
    assert_eq!(rows.len(), 1);
    let overall = &rows[0]["Overall"];
    // 4 required cases, all classified correctly by the built-in adapter.
    assert_eq!(overall["requiredTotal"], 4);
    assert_eq!(overall["requiredPass"], 4);
    assert_eq!(overall["score"], 100.0);

    let suites = json["perDraft"]["Jsonschema"]["DRAFT_07"]
        .as_array()
        .expect("suites");
    assert_eq!(suites.len(), 2);
    assert_eq!(suites[0]["suite"], "ref-remote.json");
    assert_eq!(suites[0]["total"], 2);
}

#[test]
fn test_run_with_draft_filter_excluding_everything() {
    let corpus = fixture();
    let out = TempDir::new().expect("tempdir");

    run(&RunArgs {
        corpus_root: corpus.path().to_path_buf(),
        out_dir: out.path().to_path_buf(),
        drafts: vec!["DRAFT_2020_12".into()],
    })
    .expect("run");

    // A completed run always produces reports, even with nothing measured.
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("report.json")).expect("json"))
            .expect("parse");
    let rows = json["summary"]["implementations"].as_array().expect("rows");
    assert_eq!(rows[0]["Overall"]["requiredTotal"], 0);
}

#[test]
fn test_run_fails_on_missing_corpus() {
    let out = TempDir::new().expect("tempdir");
    let result = run(&RunArgs {
        corpus_root: out.path().join("nope"),
        out_dir: out.path().to_path_buf(),
        drafts: vec![],
    });
    assert!(result.is_err());
}
