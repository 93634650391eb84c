//! Integration tests for the notesim CLI

mod common;

use common::{create_notes, notesim, write_note};
use predicates::prelude::*;
use tempfile::tempdir;

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    notesim(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: notesim"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("keywords"))
        .stdout(predicate::str::contains("sections"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    notesim(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("notesim"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = tempdir().unwrap();
    notesim(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("notesim --help"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    let dir = tempdir().unwrap();
    notesim(dir.path())
        .args(["--format", "yaml", "sections", "a.md"])
        .assert()
        .code(2);
}

#[test]
fn test_json_format_reports_bad_flag_as_envelope() {
    let dir = tempdir().unwrap();
    let output = notesim(dir.path())
        .args(["--format", "json", "sections", "a.md", "--bogus"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["type"], "usage_error");
    assert_eq!(value["error"]["code"], 2);
}

// ============================================================================
// compare: failures
// ============================================================================

#[test]
fn test_compare_missing_target() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());

    notesim(dir.path())
        .args(["compare", "notes/missing.md", "notes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("target file not found"));
}

#[test]
fn test_compare_missing_target_json_envelope() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());

    let output = notesim(dir.path())
        .args(["--format", "json", "compare", "notes/missing.md", "notes"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "target_not_found");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_compare_no_candidates() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "target.md", "# Graphs\nNodes.");
    write_note(dir.path(), "other/readme.txt", "Nodes.");

    notesim(dir.path())
        .args(["compare", "target.md", "other", "nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("neither a file nor a directory"))
        .stderr(predicate::str::contains("no valid comparison files found"));
}

#[test]
fn test_compare_requires_paths() {
    let dir = tempdir().unwrap();
    notesim(dir.path())
        .args(["compare", "target.md"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());
    write_note(dir.path(), "notesim.toml", "cosine_weight = 1.5\n");

    notesim(dir.path())
        .args(["compare", "notes/target.md", "notes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cosine_weight"));
}

#[cfg(not(feature = "embeddings"))]
#[test]
fn test_embedding_without_backend() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());

    notesim(dir.path())
        .args(["compare", "notes/target.md", "notes", "--embedding"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("embedding backend unavailable"));
}

// ============================================================================
// compare: output
// ============================================================================

#[test]
fn test_compare_human_ranking() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());

    notesim(dir.path())
        .args(["compare", "notes/target.md", "notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing target file with 2 files..."))
        .stderr(predicate::str::contains("Processing 2 comparison files..."))
        .stdout(predicate::str::contains("Target file: notes/target.md"))
        .stdout(predicate::str::contains("Comparison results with 2 files"))
        .stdout(predicate::str::contains("1. close.md"))
        .stdout(predicate::str::contains("2. far.md"))
        .stdout(predicate::str::contains("Most similar sections in this file:"))
        .stdout(predicate::str::contains("'Graph theory'"));
}

#[test]
fn test_compare_json_report() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());

    let output = notesim(dir.path())
        .args(["--format", "json", "compare", "notes/target.md", "notes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["phase"], "done");
    assert_eq!(report["strategy"], "tfidf");

    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["path"], "notes/close.md");
    assert_eq!(results[1]["path"], "notes/far.md");

    let first = results[0]["combined_similarity"].as_f64().unwrap();
    let second = results[1]["combined_similarity"].as_f64().unwrap();
    assert!(first > second);

    let sections = results[0]["sections"].as_array().unwrap();
    assert_eq!(sections[0]["heading"], "Graph theory");
    assert_eq!(sections[1]["heading"], "Cooking");
}

#[test]
fn test_compare_explicit_target_listed_as_candidate() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());

    let output = notesim(dir.path())
        .args([
            "--format",
            "json",
            "compare",
            "notes/target.md",
            "notes/target.md",
            "notes/far.md",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results = stdout_json(&output)["results"].as_array().unwrap().clone();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["path"], "notes/far.md");
}

#[test]
fn test_compare_limit() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());

    let output = notesim(dir.path())
        .args([
            "--format",
            "json",
            "compare",
            "notes/target.md",
            "notes",
            "--limit",
            "1",
        ])
        .output()
        .unwrap();

    let results = stdout_json(&output)["results"].as_array().unwrap().clone();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["path"], "notes/close.md");
}

#[test]
fn test_compare_records() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());

    notesim(dir.path())
        .args(["--format", "records", "compare", "notes/target.md", "notes"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H notesim=1 records=1 mode=compare target=\"notes/target.md\" strategy=tfidf results=2",
        ))
        .stdout(predicate::str::contains("R 1 \"notes/close.md\""))
        .stdout(predicate::str::contains("S 1 \"Graph theory\""));
}

#[test]
fn test_compare_code_only_target_finds_nothing() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());
    write_note(dir.path(), "code.md", "```code```");

    notesim(dir.path())
        .args(["compare", "code.md", "notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No similar files found."));
}

#[test]
fn test_compare_quiet_hides_progress() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());

    notesim(dir.path())
        .args(["-q", "compare", "notes/target.md", "notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing target file").not())
        .stderr(predicate::str::contains("Calculating document similarity").not());
}

// ============================================================================
// keywords and sections
// ============================================================================

#[test]
fn test_keywords_json() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "note.md", "# Intro\nThe cat sat on the mat.");

    let output = notesim(dir.path())
        .args(["--format", "json", "keywords", "note.md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["pseudo_document"], "Intro intro cat sat mat");
    assert_eq!(value["keywords"][0]["term"], "Intro");
    assert_eq!(value["top_n"], 20);
}

#[test]
fn test_keywords_human() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "note.md", "그래프 그래프 노드 graph");

    notesim(dir.path())
        .args(["keywords", "note.md", "--top-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pseudo-document (top 3 terms):"))
        .stdout(predicate::str::contains("그래프 그래프 노드 graph"));
}

#[test]
fn test_keywords_huge_top_n() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "note.md", "graph graph node");

    notesim(dir.path())
        .args(["keywords", "note.md", "--top-n", &usize::MAX.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph graph node"));
}

#[test]
fn test_keywords_missing_file() {
    let dir = tempdir().unwrap();
    notesim(dir.path())
        .args(["keywords", "nope.md"])
        .assert()
        .code(3);
}

#[test]
fn test_sections_fence_modes() {
    let dir = tempdir().unwrap();
    write_note(
        dir.path(),
        "note.md",
        "Preface.\n# Setup\n```sh\n# not a heading\n```\n# Usage\nRun it.\n",
    );

    let output = notesim(dir.path())
        .args(["--format", "json", "sections", "note.md"])
        .output()
        .unwrap();
    let headings: Vec<String> = stdout_json(&output)["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["heading"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(headings, vec!["Introduction", "Setup", "not a heading", "Usage"]);

    let output = notesim(dir.path())
        .args(["--format", "json", "sections", "note.md", "--fence-aware"])
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["fence_aware"], true);
    let headings: Vec<&str> = value["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["heading"].as_str().unwrap())
        .collect();
    assert_eq!(headings, vec!["Introduction", "Setup", "Usage"]);
}

#[test]
fn test_compare_zero_limit_is_usage_error() {
    let dir = tempdir().unwrap();
    create_notes(dir.path());

    notesim(dir.path())
        .args(["compare", "notes/target.md", "notes", "--limit", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--limit must be at least 1"));
}
