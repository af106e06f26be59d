//! Tests for the summary export: fixed filenames, text content, JSON shape

mod common;

use pathfinder::pathway::resolver::resolve;
use pathfinder::report::export::{
    summary_text, write_json_summary, write_text_summary, JSON_FILENAME, TEXT_FILENAME,
};

#[test]
fn test_text_export_uses_fixed_filename() {
    let dir = tempfile::tempdir().unwrap();
    let answers = common::complete_answers();
    let view = resolve(&answers);

    let path = write_text_summary(&answers, &view, dir.path()).unwrap();
    assert_eq!(path, dir.path().join(TEXT_FILENAME));
    assert!(path.exists(), "Export must create the file");
}

#[test]
fn test_text_export_contains_profile_and_recommendations() {
    let dir = tempfile::tempdir().unwrap();
    let answers = common::complete_answers();
    let view = resolve(&answers);

    let path = write_text_summary(&answers, &view, dir.path()).unwrap();
    let contents = std::fs::read_to_string(path).unwrap();

    assert!(contents.contains("Germany"), "Home country appears in the profile");
    assert!(contents.contains("EQF level 6"));
    assert!(
        contents.contains("Bachelor level or equivalent"),
        "Derived equivalent-level label is part of the export"
    );
    assert!(contents.contains("France"), "Every destination is exported");
    assert!(contents.contains("Qualification routes:"));
    assert!(contents.contains("Helpful tips"));
}

#[test]
fn test_text_export_handles_empty_answers() {
    let answers = pathfinder::pathway::Answers::new();
    let view = resolve(&answers);

    let text = summary_text(&answers, &view);
    assert!(text.contains("not specified yet"));
    // Default fallback destinations are all present.
    for name in ["Germany", "France", "Italy"] {
        assert!(text.contains(name), "{name} missing from fallback export");
    }
}

#[test]
fn test_json_export_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let answers = common::complete_answers();
    let view = resolve(&answers);

    let path = write_json_summary(&answers, &view, dir.path()).unwrap();
    assert_eq!(path, dir.path().join(JSON_FILENAME));

    let contents = std::fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(value["profile"]["home_country"], "Germany");
    assert_eq!(value["recommendations"]["equivalent_label"], "Bachelor level or equivalent");
    assert_eq!(
        value["recommendations"]["blocks"].as_array().unwrap().len(),
        1
    );
    assert!(value["metadata"]["timestamp"].is_string());
}

#[test]
fn test_export_overwrites_previous_summary() {
    let dir = tempfile::tempdir().unwrap();
    let answers = common::complete_answers();
    let view = resolve(&answers);

    write_text_summary(&answers, &view, dir.path()).unwrap();
    let second = write_text_summary(&answers, &view, dir.path()).unwrap();
    assert!(second.exists(), "Re-export replaces the fixed-name file");
}
