//! Tests for CLI argument parsing and the non-interactive binary path

use clap::Parser;
use pathfinder::cli::Cli;
use pathfinder::pathway::{CostPreference, Country, EqfBand, FundingProfile, Sector, StudyMode};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["pathfinder"]);

    assert!(cli.country.is_none());
    assert!(cli.level.is_none());
    assert!(cli.destination.is_empty());
    assert!(!cli.no_confirm, "Default no_confirm should be false");
    assert!(!cli.export, "Default export should be false");
    assert!(!cli.json, "Default json should be false");
    assert_eq!(cli.output_dir, std::path::PathBuf::from("."));
}

#[test]
fn test_cli_typed_flags() {
    let cli = Cli::parse_from([
        "pathfinder",
        "--country",
        "germany",
        "--level",
        "eqf6",
        "--study-mode",
        "full-time-campus",
        "--funding",
        "grants",
        "--cost",
        "balanced",
    ]);

    assert_eq!(cli.country, Some(Country::Germany));
    assert_eq!(cli.level, Some(EqfBand::Eqf6));
    assert_eq!(cli.study_mode, Some(StudyMode::FullTimeCampus));
    assert_eq!(cli.funding, Some(FundingProfile::Grants));
    assert_eq!(cli.cost, Some(CostPreference::Balanced));
}

#[test]
fn test_cli_comma_delimited_lists() {
    let cli = Cli::parse_from([
        "pathfinder",
        "--destination",
        "france,italy",
        "--interest",
        "technology,healthcare",
        "--support",
        "low-income,first-generation",
    ]);

    assert_eq!(cli.destination, vec!["france", "italy"]);
    assert_eq!(cli.interest, vec![Sector::Technology, Sector::Healthcare]);
    assert_eq!(cli.support.len(), 2);
}

#[test]
fn test_cli_rejects_unknown_level_token() {
    let result = Cli::try_parse_from(["pathfinder", "--level", "eqf9"]);
    assert!(result.is_err(), "eqf9 is not a valid band");
}

// ============================================================================
// Answers building
// ============================================================================

#[test]
fn test_answers_from_flags() {
    let cli = Cli::parse_from([
        "pathfinder",
        "--country",
        "spain",
        "--destination",
        "france,not-sure",
        "--interest",
        "business",
    ]);

    let answers = cli.answers().unwrap();
    assert_eq!(answers.home_country, Some(Country::Spain));
    assert!(answers.destinations.contains(&Country::France));
    assert!(
        answers.not_sure_destination,
        "'not-sure' in the destination list sets the sentinel"
    );
    assert!(answers.interests.contains(&Sector::Business));
}

#[test]
fn test_answers_rejects_unknown_destination() {
    let cli = Cli::parse_from(["pathfinder", "--destination", "narnia"]);
    let err = cli.answers().unwrap_err();
    assert!(err.to_string().contains("narnia"));
}

// ============================================================================
// Binary smoke tests (non-interactive paths only)
// ============================================================================

#[test]
fn test_binary_no_confirm_prints_recommendations() {
    let output = assert_cmd::Command::cargo_bin("pathfinder")
        .unwrap()
        .args([
            "--no-confirm",
            "--country",
            "germany",
            "--level",
            "eqf6",
            "--study-mode",
            "full-time-campus",
            "--destination",
            "france",
            "--funding",
            "grants",
            "--cost",
            "balanced",
            "--interest",
            "technology",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.contains("France"));
    assert!(stdout.contains("Bachelor level or equivalent"));
}

#[test]
fn test_binary_no_confirm_requires_gated_fields() {
    assert_cmd::Command::cargo_bin("pathfinder")
        .unwrap()
        .args(["--no-confirm", "--country", "germany"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("--level is required"));
}

#[test]
fn test_binary_levels_subcommand() {
    assert_cmd::Command::cargo_bin("pathfinder")
        .unwrap()
        .args(["levels"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Bachelor"));
}

#[test]
fn test_binary_levels_filter() {
    assert_cmd::Command::cargo_bin("pathfinder")
        .unwrap()
        .args(["levels", "--filter", "doctorate"])
        .assert()
        .success()
        .stdout(predicates::str::contains("PhD"));
}

#[test]
fn test_binary_export_writes_summary_file() {
    let dir = tempfile::tempdir().unwrap();

    assert_cmd::Command::cargo_bin("pathfinder")
        .unwrap()
        .args([
            "--no-confirm",
            "--export",
            "--country",
            "ireland",
            "--level",
            "eqf3",
            "--study-mode",
            "apprenticeship",
            "--funding",
            "work-and-study",
            "--cost",
            "lower-cost",
            "--interest",
            "healthcare",
        ])
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success();

    let exported = dir.path().join("pathway-summary.txt");
    assert!(exported.exists(), "--export must write the summary file");
    let contents = std::fs::read_to_string(exported).unwrap();
    // Empty destinations fall back to the default three countries.
    assert!(contents.contains("Germany"));
    assert!(contents.contains("Italy"));
}
