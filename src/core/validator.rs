//! Document parsing and the semantic validation pass.
//!
//! Parsing is two-stage so reports can tell a malformed file apart from a
//! well-formed file that does not fit the schema: YAML syntax errors map to
//! `YamlError`, typed deserialization failures to `SchemaError`. The
//! semantic pass then walks a parsed document and collects every remaining
//! issue (formats, lengths, vocabulary cross-checks) with a field locator.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::formats;
use crate::domain::model::*;
use crate::domain::schemes::{DateScheme, DcmiType, IdentifierType, LanguageScheme, TypeScheme};
use crate::utils::error::{DcError, Result};

/// A single semantic problem, located by a path into the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub field: String,
    pub message: String,
}

impl Issue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn parse_document(source: &str) -> Result<DublinCoreDocument> {
    // Syntax first, so a stray tab is not reported as a schema mismatch.
    let value: serde_yaml::Value = serde_yaml::from_str(source)?;
    serde_yaml::from_value(value).map_err(|e| DcError::SchemaError(e.to_string()))
}

/// Walks the document and collects every semantic issue.
pub fn check_document(doc: &DublinCoreDocument) -> Vec<Issue> {
    let mut issues = Vec::new();
    let dc = &doc.dublin_core;

    // Required elements
    if is_missing(&dc.title) {
        issues.push(Issue::new(
            "dublin_core.title",
            "At least one title element is required",
        ));
    }
    if is_missing(&dc.identifier) {
        issues.push(Issue::new(
            "dublin_core.identifier",
            "At least one identifier element is required",
        ));
    }

    for (i, el) in iter_elements(&dc.title) {
        let path = format!("dublin_core.title[{i}]");
        check_value_len(&mut issues, &path, "value", &el.value, 1000);
    }

    for (i, el) in iter_elements(&dc.creator) {
        let path = format!("dublin_core.creator[{i}]");
        check_value_len(&mut issues, &path, "name", &el.name, 500);
        check_opt_len(&mut issues, &path, "affiliation", &el.affiliation, 500);
        if let Some(orcid) = &el.orcid {
            if !formats::is_valid_orcid(orcid) {
                issues.push(Issue::new(format!("{path}.orcid"), "Invalid ORCID format"));
            }
        }
    }

    for (i, el) in iter_elements(&dc.subject) {
        let path = format!("dublin_core.subject[{i}]");
        check_value_len(&mut issues, &path, "value", &el.value, 500);
        check_opt_len(&mut issues, &path, "note", &el.note, 200);
        check_url(&mut issues, &path, "uri", &el.uri);
    }

    for (i, el) in iter_elements(&dc.description) {
        let path = format!("dublin_core.description[{i}]");
        check_value_len(&mut issues, &path, "value", &el.value, 5000);
    }

    for (i, el) in iter_elements(&dc.publisher) {
        let path = format!("dublin_core.publisher[{i}]");
        check_value_len(&mut issues, &path, "name", &el.name, 500);
        check_opt_len(&mut issues, &path, "location", &el.location, 200);
        check_url(&mut issues, &path, "website", &el.website);
    }

    for (i, el) in iter_elements(&dc.contributor) {
        let path = format!("dublin_core.contributor[{i}]");
        check_value_len(&mut issues, &path, "name", &el.name, 500);
        check_opt_len(&mut issues, &path, "affiliation", &el.affiliation, 500);
    }

    for (i, el) in iter_elements(&dc.date) {
        let path = format!("dublin_core.date[{i}]");
        if el.value.is_empty() {
            issues.push(Issue::new(format!("{path}.value"), "Value cannot be empty"));
        }
        check_opt_len(&mut issues, &path, "note", &el.note, 200);
        if el.scheme == Some(DateScheme::W3cdtf) && !formats::is_iso8601_date(&el.value) {
            issues.push(Issue::new(
                format!("{path}.value"),
                "Invalid ISO 8601 date format for W3CDTF scheme",
            ));
        }
    }

    for (i, el) in iter_elements(&dc.resource_type) {
        let path = format!("dublin_core.type[{i}]");
        check_value_len(&mut issues, &path, "value", &el.value, 200);
        check_url(&mut issues, &path, "uri", &el.uri);
        if el.scheme == Some(TypeScheme::DcmiTypeVocabulary) && !DcmiType::is_member(&el.value) {
            issues.push(Issue::new(
                format!("{path}.value"),
                format!("Invalid DCMI Type: {}", el.value),
            ));
        }
    }

    for (i, el) in iter_elements(&dc.format) {
        let path = format!("dublin_core.format[{i}]");
        check_value_len(&mut issues, &path, "value", &el.value, 200);
    }

    for (i, el) in iter_elements(&dc.identifier) {
        let path = format!("dublin_core.identifier[{i}]");
        check_value_len(&mut issues, &path, "value", &el.value, 500);
        check_opt_len(&mut issues, &path, "note", &el.note, 200);
        match el.identifier_type {
            Some(IdentifierType::Doi) if !formats::is_valid_doi(&el.value) => {
                issues.push(Issue::new(format!("{path}.value"), "Invalid DOI format"));
            }
            Some(IdentifierType::Isbn) if !formats::is_valid_isbn(&el.value) => {
                issues.push(Issue::new(format!("{path}.value"), "Invalid ISBN format"));
            }
            Some(IdentifierType::Issn) if !formats::is_valid_issn(&el.value) => {
                issues.push(Issue::new(format!("{path}.value"), "Invalid ISSN format"));
            }
            _ => {}
        }
    }

    for (i, el) in iter_elements(&dc.source) {
        let path = format!("dublin_core.source[{i}]");
        check_value_len(&mut issues, &path, "value", &el.value, 1000);
        check_opt_len(&mut issues, &path, "identifier", &el.identifier, 500);
    }

    for (i, el) in iter_elements(&dc.language) {
        let path = format!("dublin_core.language[{i}]");
        check_language(&mut issues, &path, el);
    }

    for (i, el) in iter_elements(&dc.relation) {
        let path = format!("dublin_core.relation[{i}]");
        check_value_len(&mut issues, &path, "value", &el.value, 500);
        check_opt_len(&mut issues, &path, "description", &el.description, 500);
    }

    for (i, el) in iter_elements(&dc.coverage) {
        let path = format!("dublin_core.coverage[{i}]");
        check_value_len(&mut issues, &path, "value", &el.value, 500);
        check_opt_len(&mut issues, &path, "description", &el.description, 500);
        if let Some(coords) = &el.coordinates {
            if !formats::is_valid_coordinates(coords) {
                issues.push(Issue::new(
                    format!("{path}.coordinates"),
                    "Invalid coordinate format",
                ));
            }
        }
    }

    for (i, el) in iter_elements(&dc.rights) {
        let path = format!("dublin_core.rights[{i}]");
        check_value_len(&mut issues, &path, "value", &el.value, 1000);
        check_opt_len(&mut issues, &path, "description", &el.description, 500);
        check_opt_len(&mut issues, &path, "note", &el.note, 200);
        check_url(&mut issues, &path, "uri", &el.uri);
    }

    if let Some(extra) = &doc.additional_metadata {
        check_additional_metadata(&mut issues, extra);
    }
    if let Some(record) = &doc.metadata_record {
        check_metadata_record(&mut issues, record);
    }

    issues
}

fn check_language(issues: &mut Vec<Issue>, path: &str, el: &LanguageElement) {
    let len = el.value.chars().count();
    if !(2..=3).contains(&len) {
        issues.push(Issue::new(
            format!("{path}.value"),
            "Language codes must be 2 or 3 characters",
        ));
    } else {
        // Scheme-specific length rules only apply once the generic bound holds.
        match el.scheme {
            Some(LanguageScheme::Iso639_1) if len != 2 => {
                issues.push(Issue::new(
                    format!("{path}.value"),
                    "ISO 639-1 codes must be 2 characters",
                ));
            }
            Some(LanguageScheme::Iso639_2) | Some(LanguageScheme::Iso639_3) if len != 3 => {
                issues.push(Issue::new(
                    format!("{path}.value"),
                    "ISO 639-2/639-3 codes must be 3 characters",
                ));
            }
            _ => {}
        }
    }
    if el.value.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push(Issue::new(
            format!("{path}.value"),
            "Language codes must be lowercase",
        ));
    }
    check_opt_len(issues, path, "name", &el.name, 100);
    check_opt_len(issues, path, "note", &el.note, 200);
}

fn check_additional_metadata(issues: &mut Vec<Issue>, extra: &AdditionalMetadata) {
    if let Some(funding) = &extra.funding {
        for (i, f) in funding.iter().enumerate() {
            let path = format!("additional_metadata.funding[{i}]");
            check_value_len(issues, &path, "agency", &f.agency, 300);
            check_opt_len(issues, &path, "grant_number", &f.grant_number, 100);
        }
    }
    if let Some(tech) = &extra.technical {
        let path = "additional_metadata.technical";
        check_opt_len(issues, path, "creation_software", &tech.creation_software, 200);
        check_opt_len(issues, path, "figures_software", &tech.figures_software, 200);
        check_opt_len(
            issues,
            path,
            "data_analysis_software",
            &tech.data_analysis_software,
            200,
        );
    }
    if let Some(pres) = &extra.preservation {
        let path = "additional_metadata.preservation";
        if let Some(checksum) = &pres.checksum {
            if !formats::is_valid_checksum(checksum) {
                issues.push(Issue::new(
                    format!("{path}.checksum"),
                    "Invalid checksum format (expected algorithm:hexdigest)",
                ));
            }
        }
        check_opt_len(issues, path, "migration_path", &pres.migration_path, 200);
    }
}

fn check_metadata_record(issues: &mut Vec<Issue>, record: &MetadataRecord) {
    let path = "metadata_record";
    for (field, value) in [
        ("created_date", &record.created_date),
        ("last_modified", &record.last_modified),
    ] {
        if let Some(ts) = value {
            if !formats::is_utc_timestamp(ts) {
                issues.push(Issue::new(
                    format!("{path}.{field}"),
                    "Expected UTC timestamp (YYYY-MM-DDTHH:MM:SSZ)",
                ));
            }
        }
    }
    check_opt_len(issues, path, "created_by", &record.created_by, 200);
    check_opt_len(issues, path, "modified_by", &record.modified_by, 200);
    check_opt_len(issues, path, "record_identifier", &record.record_identifier, 100);
    check_opt_len(issues, path, "schema_version", &record.schema_version, 100);
    if let Some(encoding) = &record.encoding {
        if encoding != "UTF-8" {
            issues.push(Issue::new(
                format!("{path}.encoding"),
                "Encoding must be UTF-8",
            ));
        }
    }
}

fn iter_elements<T>(list: &Option<Vec<T>>) -> impl Iterator<Item = (usize, &T)> {
    list.as_deref().unwrap_or(&[]).iter().enumerate()
}

fn check_value_len(issues: &mut Vec<Issue>, path: &str, field: &str, value: &str, max: usize) {
    if value.is_empty() {
        issues.push(Issue::new(
            format!("{path}.{field}"),
            "Value cannot be empty",
        ));
    } else if value.chars().count() > max {
        issues.push(Issue::new(
            format!("{path}.{field}"),
            format!("Value exceeds maximum length of {max} characters"),
        ));
    }
}

fn check_opt_len(
    issues: &mut Vec<Issue>,
    path: &str,
    field: &str,
    value: &Option<String>,
    max: usize,
) {
    if let Some(v) = value {
        if v.chars().count() > max {
            issues.push(Issue::new(
                format!("{path}.{field}"),
                format!("Value exceeds maximum length of {max} characters"),
            ));
        }
    }
}

fn check_url(issues: &mut Vec<Issue>, path: &str, field: &str, value: &Option<String>) {
    if let Some(v) = value {
        if Url::parse(v).is_err() {
            issues.push(Issue::new(format!("{path}.{field}"), "Invalid URL"));
        }
    }
}

fn is_missing<T>(list: &Option<Vec<T>>) -> bool {
    list.as_ref().map(|l| l.is_empty()).unwrap_or(true)
}
