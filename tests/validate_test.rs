use dc_validator::core::sample::SAMPLE_DOCUMENT;
use dc_validator::{validate_file, validate_source, ValidationStatus};
use std::fs;
use tempfile::TempDir;

fn write_doc(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_end_to_end_valid_document() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "record.yaml", SAMPLE_DOCUMENT);

    let report = validate_file(&path);

    assert_eq!(report.validation_status, ValidationStatus::Passed);
    assert_eq!(report.file_path, path.display().to_string());
    assert_eq!(
        report.file_size_bytes,
        Some(SAMPLE_DOCUMENT.len() as u64)
    );
    assert!(report.error.is_none());
    assert!(report.issues.is_empty());

    let summary = report.summary.as_ref().unwrap();
    assert_eq!(summary.element_counts.title, 2);
    assert_eq!(summary.element_counts.subject, 4);
    assert_eq!(summary.element_counts.relation, 0);
    assert_eq!(summary.populated_elements, 13);
    assert_eq!(summary.total_elements, 24);
    assert!(summary.has_additional_metadata);
    assert!(summary.has_metadata_record);
}

#[test]
fn test_end_to_end_yaml_syntax_error() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "broken.yaml", "dublin_core:\n  title: [unclosed\n");

    let report = validate_file(&path);

    assert_eq!(report.validation_status, ValidationStatus::Failed);
    assert_eq!(report.error_type.as_deref(), Some("YamlError"));
    assert!(report.summary.is_none());
}

#[test]
fn test_end_to_end_schema_error_on_unknown_key() {
    let dir = TempDir::new().unwrap();
    let yaml = r#"
dublin_core:
  title:
    - value: "Doc"
      subtitle: "not a valid qualifier"
  identifier:
    - value: "X"
"#;
    let path = write_doc(&dir, "unknown_key.yaml", yaml);

    let report = validate_file(&path);

    assert_eq!(report.validation_status, ValidationStatus::Failed);
    assert_eq!(report.error_type.as_deref(), Some("SchemaError"));
    assert!(report.error.as_deref().unwrap().contains("subtitle"));
}

#[test]
fn test_end_to_end_semantic_issues_are_collected() {
    let dir = TempDir::new().unwrap();
    let yaml = r#"
dublin_core:
  title:
    - value: "Doc"
  creator:
    - name: "Dr. Smith"
      orcid: "not-an-orcid"
  identifier:
    - value: "not-a-doi"
      type: "DOI"
  date:
    - value: "2024-02-30"
      scheme: "W3CDTF"
"#;
    let path = write_doc(&dir, "issues.yaml", yaml);

    let report = validate_file(&path);

    assert_eq!(report.validation_status, ValidationStatus::Failed);
    assert_eq!(report.error_type.as_deref(), Some("ValidationError"));
    assert_eq!(report.issues.len(), 3);

    let fields: Vec<&str> = report.issues.iter().map(|i| i.field.as_str()).collect();
    assert!(fields.contains(&"dublin_core.creator[0].orcid"));
    assert!(fields.contains(&"dublin_core.identifier[0].value"));
    assert!(fields.contains(&"dublin_core.date[0].value"));

    // Counts are still reported for documents that parsed.
    assert!(report.summary.is_some());
}

#[test]
fn test_missing_file_is_a_failed_report_not_a_panic() {
    let report = validate_file(std::path::Path::new("/no/such/file.yaml"));
    assert_eq!(report.validation_status, ValidationStatus::Failed);
    assert_eq!(report.error_type.as_deref(), Some("FileNotFound"));
}

#[test]
fn test_saved_report_json_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "record.yaml", SAMPLE_DOCUMENT);

    let report = validate_file(&path);
    let out_path = dir.path().join("report.json");
    fs::write(&out_path, serde_json::to_string_pretty(&report).unwrap()).unwrap();

    let raw = fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(parsed["validation_status"], "PASSED");
    assert_eq!(parsed["element_counts"]["creator"], 2);
    assert_eq!(parsed["populated_elements"], 13);
    assert!(parsed.get("error").is_none());
}

#[test]
fn test_in_memory_source_label() {
    let report = validate_source(SAMPLE_DOCUMENT, "<example>");
    assert_eq!(report.file_path, "<example>");
    assert_eq!(report.file_size_bytes, None);
    assert!(report.validation_status.is_passed());
}
