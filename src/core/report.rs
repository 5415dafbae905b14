//! Validation reports.
//!
//! `validate_file` and `validate_source` are total: every failure mode is
//! folded into a FAILED report instead of an `Err`, so callers (single-file
//! and batch alike) always get something they can render or serialize.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::validator::{check_document, parse_document, Issue};
use crate::domain::model::DublinCore;
use crate::utils::error::DcError;

pub const ELEMENT_COUNT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    #[serde(rename = "PASSED")]
    Passed,
    #[serde(rename = "FAILED")]
    Failed,
}

impl ValidationStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, ValidationStatus::Passed)
    }
}

/// Occurrence counts for the 15 Dublin Core elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementCounts {
    pub title: usize,
    pub creator: usize,
    pub subject: usize,
    pub description: usize,
    pub publisher: usize,
    pub contributor: usize,
    pub date: usize,
    #[serde(rename = "type")]
    pub resource_type: usize,
    pub format: usize,
    pub identifier: usize,
    pub source: usize,
    pub language: usize,
    pub relation: usize,
    pub coverage: usize,
    pub rights: usize,
}

impl ElementCounts {
    pub fn from_dublin_core(dc: &DublinCore) -> Self {
        fn len<T>(list: &Option<Vec<T>>) -> usize {
            list.as_ref().map(|l| l.len()).unwrap_or(0)
        }
        ElementCounts {
            title: len(&dc.title),
            creator: len(&dc.creator),
            subject: len(&dc.subject),
            description: len(&dc.description),
            publisher: len(&dc.publisher),
            contributor: len(&dc.contributor),
            date: len(&dc.date),
            resource_type: len(&dc.resource_type),
            format: len(&dc.format),
            identifier: len(&dc.identifier),
            source: len(&dc.source),
            language: len(&dc.language),
            relation: len(&dc.relation),
            coverage: len(&dc.coverage),
            rights: len(&dc.rights),
        }
    }

    /// (element name, count) pairs in canonical Dublin Core order.
    pub fn as_pairs(&self) -> [(&'static str, usize); ELEMENT_COUNT] {
        [
            ("title", self.title),
            ("creator", self.creator),
            ("subject", self.subject),
            ("description", self.description),
            ("publisher", self.publisher),
            ("contributor", self.contributor),
            ("date", self.date),
            ("type", self.resource_type),
            ("format", self.format),
            ("identifier", self.identifier),
            ("source", self.source),
            ("language", self.language),
            ("relation", self.relation),
            ("coverage", self.coverage),
            ("rights", self.rights),
        ]
    }

    pub fn total(&self) -> usize {
        self.as_pairs().iter().map(|(_, c)| c).sum()
    }

    pub fn populated(&self) -> usize {
        self.as_pairs().iter().filter(|(_, c)| *c > 0).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub total_elements: usize,
    pub populated_elements: usize,
    pub completeness_percentage: f64,
    pub element_counts: ElementCounts,
    pub has_additional_metadata: bool,
    pub has_metadata_record: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub validation_status: ValidationStatus,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
    // A flattened None adds no fields, so FAILED reports stay minimal.
    #[serde(flatten)]
    pub summary: Option<DocumentSummary>,
}

impl FileReport {
    fn from_error(label: &str, err: &DcError) -> Self {
        FileReport {
            validation_status: ValidationStatus::Failed,
            file_path: label.to_string(),
            file_size_bytes: None,
            error: Some(err.to_string()),
            error_type: Some(err.kind().to_string()),
            issues: Vec::new(),
            summary: None,
        }
    }
}

/// Validates YAML text. `label` identifies the source in the report
/// (a file path, or a marker like `<example>` for in-memory input).
pub fn validate_source(source: &str, label: &str) -> FileReport {
    let doc = match parse_document(source) {
        Ok(doc) => doc,
        Err(e) => return FileReport::from_error(label, &e),
    };

    let issues = check_document(&doc);
    let counts = ElementCounts::from_dublin_core(&doc.dublin_core);
    let summary = DocumentSummary {
        total_elements: counts.total(),
        populated_elements: counts.populated(),
        completeness_percentage: counts.populated() as f64 / ELEMENT_COUNT as f64 * 100.0,
        element_counts: counts,
        has_additional_metadata: doc.additional_metadata.is_some(),
        has_metadata_record: doc.metadata_record.is_some(),
    };

    if issues.is_empty() {
        FileReport {
            validation_status: ValidationStatus::Passed,
            file_path: label.to_string(),
            file_size_bytes: None,
            error: None,
            error_type: None,
            issues,
            summary: Some(summary),
        }
    } else {
        FileReport {
            validation_status: ValidationStatus::Failed,
            file_path: label.to_string(),
            file_size_bytes: None,
            error: Some(format!("{} validation issue(s) found", issues.len())),
            error_type: Some("ValidationError".to_string()),
            issues,
            summary: Some(summary),
        }
    }
}

pub fn validate_file(path: &Path) -> FileReport {
    let label = path.display().to_string();

    if !path.is_file() {
        return FileReport::from_error(
            &label,
            &DcError::FileNotFound {
                path: label.clone(),
            },
        );
    }

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => return FileReport::from_error(&label, &DcError::IoError(e)),
    };

    let mut report = validate_source(&source, &label);
    report.file_size_bytes = std::fs::metadata(path).ok().map(|m| m.len());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"
dublin_core:
  title:
    - value: "Test Document"
      type: "main"
      language: "en"
  creator:
    - name: "Dr. Test Author"
      type: "personal"
      orcid: "0000-0002-1825-0097"
  identifier:
    - value: "https://doi.org/10.1000/test"
      type: "DOI"
      scheme: "URI"
  date:
    - value: "2024-01-01"
      type: "created"
      scheme: "W3CDTF"
  language:
    - value: "en"
      scheme: "ISO 639-1"
      name: "English"
"#;

    #[test]
    fn test_passing_report() {
        let report = validate_source(VALID, "<test>");
        assert!(report.validation_status.is_passed());
        assert!(report.error.is_none());

        let summary = report.summary.unwrap();
        assert_eq!(summary.total_elements, 5);
        assert_eq!(summary.populated_elements, 5);
        assert!((summary.completeness_percentage - 5.0 / 15.0 * 100.0).abs() < 1e-9);
        assert_eq!(summary.element_counts.title, 1);
        assert!(!summary.has_additional_metadata);
    }

    #[test]
    fn test_semantic_failure_keeps_summary() {
        let yaml = r#"
dublin_core:
  title:
    - value: "T"
  identifier:
    - value: "bogus"
      type: "DOI"
"#;
        let report = validate_source(yaml, "<test>");
        assert_eq!(report.validation_status, ValidationStatus::Failed);
        assert_eq!(report.error_type.as_deref(), Some("ValidationError"));
        assert_eq!(report.issues.len(), 1);
        assert!(report.summary.is_some());
    }

    #[test]
    fn test_syntax_failure_report() {
        let report = validate_source("dublin_core: [unclosed", "<test>");
        assert_eq!(report.error_type.as_deref(), Some("YamlError"));
        assert!(report.summary.is_none());
    }

    #[test]
    fn test_missing_file_report() {
        let report = validate_file(Path::new("/nonexistent/doc.yaml"));
        assert_eq!(report.error_type.as_deref(), Some("FileNotFound"));
    }

    #[test]
    fn test_file_report_includes_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();

        let report = validate_file(file.path());
        assert!(report.validation_status.is_passed());
        assert_eq!(report.file_size_bytes, Some(VALID.len() as u64));
    }

    #[test]
    fn test_report_json_shape() {
        let report = validate_source(VALID, "<test>");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["validation_status"], "PASSED");
        // Summary fields are flattened to the top level.
        assert_eq!(json["element_counts"]["title"], 1);
        assert_eq!(json["populated_elements"], 5);
        assert!(json.get("error").is_none());
    }
}
