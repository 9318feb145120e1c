use scrubber::{load_table, scrub_files, Cell, CsvParser, DedupeMode, ScrubError, ScrubOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CLIENTS: &str = "\
First Name,Email Address,Plan
Ann,Ann.Smith+news@Gmail.com,gold
Bob,bob@example.org,silver
Cid,,bronze
Dee,\"dee@example.org, dee.alt@example.org\",gold
Eve,annsmith@gmail.com,silver
Fay,FAY@Example.org,gold
Gus,not provided,silver
Hal,hal@bücher.example,gold
";

const SUPPRESSIONS: &str = "\
email,status
fay@example.org,unsubscribed
dee.alt@example.org,bounced
hal@xn--bcher-kva.example,unsubscribed
";

fn write_inputs(dir: &TempDir) -> (PathBuf, PathBuf) {
    let client = dir.path().join("clients.csv");
    let suppression = dir.path().join("suppressions.csv");
    fs::write(&client, CLIENTS).unwrap();
    fs::write(&suppression, SUPPRESSIONS).unwrap();
    (client, suppression)
}

// Non-ASCII domains fall outside the token grammar, so Hal's cell holds no address.
#[test]
fn test_scrub_files_end_to_end() {
    let dir = TempDir::new().unwrap();
    let (client, suppression) = write_inputs(&dir);

    let report = scrub_files(
        Some(client.as_path()),
        Some(suppression.as_path()),
        &ScrubOptions::default(),
    )
    .unwrap();

    let parser = CsvParser::new();
    let kept = String::from_utf8(parser.write_table(&report.kept).unwrap()).unwrap();
    let removed = String::from_utf8(parser.write_table(&report.removed).unwrap()).unwrap();

    assert_eq!(
        kept,
        "First Name,Email Address,Plan\n\
         Ann,Ann.Smith+news@Gmail.com,gold\n\
         Bob,bob@example.org,silver\n\
         Eve,annsmith@gmail.com,silver\n"
    );
    assert_eq!(
        removed,
        "Reason,First Name,Email Address,Plan\n\
         empty_or_invalid_email,Cid,,bronze\n\
         suppression_match,Dee,\"dee@example.org, dee.alt@example.org\",gold\n\
         suppression_match,Fay,FAY@Example.org,gold\n\
         empty_or_invalid_email,Gus,not provided,silver\n\
         empty_or_invalid_email,Hal,hal@bücher.example,gold\n"
    );

    let summary = &report.summary;
    assert_eq!(summary.rows_before, 8);
    assert_eq!(summary.removed_total, 5);
    assert_eq!(summary.removed_suppression, 2);
    assert_eq!(summary.removed_invalid, 3);
    assert_eq!(summary.removed_duplicate, 0);
    assert_eq!(summary.kept, 3);
}

#[test]
fn test_dot_collapse_finds_gmail_duplicate() {
    let dir = TempDir::new().unwrap();
    let (client, suppression) = write_inputs(&dir);
    let options = ScrubOptions {
        collapse_dots: true,
        ..Default::default()
    };

    let report = scrub_files(Some(client.as_path()), Some(suppression.as_path()), &options).unwrap();

    // Ann.Smith+news@gmail.com and annsmith@gmail.com now share a primary address
    assert_eq!(report.summary.removed_duplicate, 1);
    assert_eq!(report.summary.kept, 2);
    assert!(report
        .message()
        .ends_with("- Gmail canonicalization: plus=ON, dots=ON"));
}

#[test]
fn test_prune_mode_accounting() {
    let dir = TempDir::new().unwrap();
    let (client, suppression) = write_inputs(&dir);
    let options = ScrubOptions {
        collapse_dots: true,
        dedupe_mode: DedupeMode::Prune,
        ..Default::default()
    };

    let report = scrub_files(Some(client.as_path()), Some(suppression.as_path()), &options).unwrap();
    let summary = &report.summary;

    assert_eq!(summary.pruned_duplicates, 1);
    assert_eq!(summary.removed_duplicate, 0);
    assert_eq!(
        summary.rows_before,
        summary.kept + summary.removed_total + summary.pruned_duplicates
    );
    assert!(report.removed.rows().iter().all(|row| row[2].to_string() != "annsmith@gmail.com"));
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_workbook_cells() {
    let table = load_table(&fixture("clients.xlsx")).unwrap();

    assert_eq!(table.headers(), ["First Name", "Email", "Score"]);
    // The blank fourth sheet row is skipped
    assert_eq!(table.len(), 4);
    assert_eq!(table.rows()[0][2], Cell::Number(42.0));
    assert_eq!(table.rows()[1][1], Cell::Missing);
    assert_eq!(table.rows()[1][2], Cell::Number(7.5));
    assert_eq!(table.rows()[2][0], Cell::Text("Cid".into()));
    assert_eq!(table.rows()[2][2], Cell::Missing);
}

#[test]
fn test_scrub_workbook_against_csv() {
    let dir = TempDir::new().unwrap();
    let suppression = dir.path().join("suppressions.csv");
    fs::write(&suppression, "email\ns@sup.com\n").unwrap();

    let report = scrub_files(
        Some(fixture("clients.xlsx").as_path()),
        Some(suppression.as_path()),
        &ScrubOptions::default(),
    )
    .unwrap();

    let kept = String::from_utf8(CsvParser::new().write_table(&report.kept).unwrap()).unwrap();
    assert_eq!(
        kept,
        "First Name,Email,Score\n\
         Ann,Ann.Smith+news@Gmail.com,42\n\
         Cid,cid@example.org,\n"
    );
    assert_eq!(report.summary.rows_before, 4);
    assert_eq!(report.summary.removed_invalid, 1);
    assert_eq!(report.summary.removed_suppression, 1);
}

#[test]
fn test_workbook_without_extension_is_detected() {
    let dir = TempDir::new().unwrap();
    let export = dir.path().join("clients-export");
    fs::copy(fixture("clients.xlsx"), &export).unwrap();

    let table = load_table(&export).unwrap();
    assert_eq!(table.len(), 4);
}

#[test]
fn test_corrupt_workbook_is_unexpected_failure() {
    let dir = TempDir::new().unwrap();
    let (_, suppression) = write_inputs(&dir);
    let workbook = dir.path().join("clients.xlsx");
    fs::write(&workbook, b"PK\x03\x04").unwrap();

    let err = scrub_files(
        Some(workbook.as_path()),
        Some(suppression.as_path()),
        &ScrubOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ScrubError::Spreadsheet(_)));
    assert!(!err.is_expected());
    assert!(err.user_message().starts_with("Unexpected failure: "));
}
