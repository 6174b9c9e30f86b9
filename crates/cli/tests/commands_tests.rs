//! Integration tests for the harness commands.
//!
//! Inputs are written to temp files the way a user would pass them on the
//! command line, then run through the command bodies.

use std::io::Write;

use assert_matches::assert_matches;
use lostfound_cli::commands::{load_json, run_contact, run_filter, run_validate};
use lostfound_cli::config::CliConfig;
use lostfound_cli::error::CliError;
use lostfound_core::contact::ContactAction;
use lostfound_core::types::Date;
use lostfound_core::validation::FormField;
use lostfound_core::{FilterCriteria, FormKind, FormValues, ItemRecord};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    file.write_all(contents.as_bytes())
        .expect("temp file should be writable");
    file
}

fn today() -> Date {
    Date::from_ymd_opt(2024, 5, 12).unwrap()
}

// ---------------------------------------------------------------------------
// Test: filter from files
// ---------------------------------------------------------------------------

#[test]
fn filter_scenario_from_json_files() {
    let items_file = write_temp(
        r#"[
            {"title": "Red Wallet", "category": "Wallet", "location": "Library", "postedDate": "2024-05-01"},
            {"title": "Blue Bottle", "category": "Bottle", "location": "Cafeteria", "postedDate": "2024-05-10"}
        ]"#,
    );
    let criteria_file = write_temp(r#"{"keyword": "blue"}"#);

    let items: Vec<ItemRecord> = load_json(items_file.path()).unwrap();
    let criteria: FilterCriteria = load_json(criteria_file.path()).unwrap();
    let output = run_filter(&items, &criteria, today());

    assert_eq!(output["count"], 1);
    assert_eq!(output["label"], "Showing 1 items");
    assert_eq!(output["visible"][0]["title"], "Blue Bottle");
    assert_eq!(output["visible"][0]["postedDate"], "2024-05-10");
}

#[test]
fn malformed_json_reports_path() {
    let file = write_temp("[{\"title\": ");
    let err = load_json::<Vec<ItemRecord>>(file.path()).unwrap_err();
    assert_matches!(&err, CliError::Json { path, .. } if path == file.path());
    assert!(err.to_string().starts_with("Invalid JSON in "));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("items.json");
    assert_matches!(
        load_json::<Vec<ItemRecord>>(&missing),
        Err(CliError::Read { .. })
    );
}

// ---------------------------------------------------------------------------
// Test: validate from files
// ---------------------------------------------------------------------------

#[test]
fn validate_reads_values_file() {
    let file = write_temp(
        r#"{"itemName": "Keys", "category": "Keys", "email": "k@gmail.com"}"#,
    );
    let values: FormValues = load_json(file.path()).unwrap();
    let result = run_validate(FormKind::Found, &values, today());
    assert!(!result.ok);
    assert_eq!(result.failed_field, Some(FormField::Email));
}

// ---------------------------------------------------------------------------
// Test: session-dependent contact
// ---------------------------------------------------------------------------

#[test]
fn contact_depends_on_configured_student() {
    let guest = CliConfig::default();
    assert_matches!(run_contact(&guest), ContactAction::LoginPrompt { .. });

    let student = CliConfig {
        student_id: Some("0351234".into()),
        today: None,
    };
    assert_matches!(run_contact(&student), ContactAction::Mailto { .. });
}
