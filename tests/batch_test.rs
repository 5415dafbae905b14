use dc_validator::{run_batch, BatchOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const VALID: &str = r#"
dublin_core:
  title:
    - value: "Doc"
  identifier:
    - value: "LOCAL-1"
"#;

const INVALID: &str = "dublin_core: {}\n";

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_batch_mixed_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "alpha.yaml", VALID);
    write(dir.path(), "beta.yaml", INVALID);
    write(dir.path(), "gamma.yaml", "not: [valid");
    write(dir.path(), "notes.txt", "ignored");

    let report = run_batch(dir.path(), &BatchOptions::default()).unwrap();

    assert_eq!(report.summary.total_files, 3);
    assert_eq!(report.summary.passed, 1);
    assert_eq!(report.summary.failed, 2);

    // Sorted order: results line up with file names.
    let paths: Vec<&str> = report
        .results
        .iter()
        .map(|r| r.file_path.as_str())
        .collect();
    assert!(paths[0].ends_with("alpha.yaml"));
    assert!(paths[1].ends_with("beta.yaml"));
    assert!(paths[2].ends_with("gamma.yaml"));
}

#[test]
fn test_batch_custom_pattern() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "record_1.yml", VALID);
    write(dir.path(), "record_2.yml", VALID);
    write(dir.path(), "other.yaml", INVALID);

    let options = BatchOptions {
        pattern: "record_*.yml".to_string(),
        ..Default::default()
    };
    let report = run_batch(dir.path(), &options).unwrap();

    assert_eq!(report.summary.total_files, 2);
    assert_eq!(report.summary.failed, 0);
    assert!((report.summary.success_rate - 100.0).abs() < 1e-9);
}

#[test]
fn test_batch_recursive_search() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "top.yaml", VALID);
    let nested = dir.path().join("archive").join("2024");
    fs::create_dir_all(&nested).unwrap();
    write(&nested, "deep.yaml", VALID);

    let flat = run_batch(dir.path(), &BatchOptions::default()).unwrap();
    assert_eq!(flat.summary.total_files, 1);

    let recursive = run_batch(
        dir.path(),
        &BatchOptions {
            recursive: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(recursive.summary.total_files, 2);
}

#[test]
fn test_batch_fail_fast() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a_bad.yaml", INVALID);
    write(dir.path(), "b_good.yaml", VALID);
    write(dir.path(), "c_good.yaml", VALID);

    let report = run_batch(
        dir.path(),
        &BatchOptions {
            fail_fast: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(report.summary.total_files, 1);
    assert_eq!(report.summary.failed, 1);
}

#[test]
fn test_batch_unreadable_file_is_failed_entry() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "good.yaml", VALID);
    // Not valid UTF-8, so reading the file itself fails.
    fs::write(dir.path().join("binary.yaml"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let report = run_batch(dir.path(), &BatchOptions::default()).unwrap();

    assert_eq!(report.summary.total_files, 2);
    assert_eq!(report.summary.passed, 1);
    assert_eq!(report.summary.failed, 1);

    let bad = report
        .results
        .iter()
        .find(|r| r.file_path.ends_with("binary.yaml"))
        .unwrap();
    assert_eq!(bad.error_type.as_deref(), Some("IoError"));
}

#[test]
fn test_batch_report_serializes() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "alpha.yaml", VALID);
    write(dir.path(), "beta.yaml", INVALID);

    let report = run_batch(dir.path(), &BatchOptions::default()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string_pretty(&report).unwrap()).unwrap();

    assert_eq!(json["summary"]["total_files"], 2);
    assert_eq!(json["summary"]["passed"], 1);
    assert_eq!(json["results"][0]["validation_status"], "PASSED");
    assert_eq!(json["results"][1]["validation_status"], "FAILED");
}

#[test]
fn test_batch_empty_match_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "notes.txt", "no yaml here");

    let report = run_batch(dir.path(), &BatchOptions::default()).unwrap();
    assert_eq!(report.summary.total_files, 0);
    assert_eq!(report.summary.failed, 0);
}
