//! Typed model for a Dublin Core metadata document.
//!
//! Field names follow the YAML layout one-to-one. Every struct rejects
//! unknown keys, so a typo in an element qualifier is caught at parse time
//! instead of being silently ignored. Free-form fields that carry a format
//! constraint (ORCID, DOI, dates, coordinates, URLs) stay `String` here and
//! are checked by the semantic pass in `core::validator`.

use serde::{Deserialize, Serialize};

use crate::domain::schemes::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleElement {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub title_type: Option<TitleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatorElement {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub creator_type: Option<AgentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CreatorRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectElement {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<SubjectScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptionElement {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub description_type: Option<DescriptionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublisherElement {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub publisher_type: Option<PublisherType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<PublisherRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContributorElement {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub contributor_type: Option<AgentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ContributorRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateElement {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub date_type: Option<DateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<DateScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeElement {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<TypeScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatElement {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub format_type: Option<FormatType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<FormatScheme>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentifierElement {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<IdentifierType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<IdentifierScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceElement {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageElement {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<LanguageScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationElement {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<RelationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageElement {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub coverage_type: Option<CoverageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<CoverageScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RightsElement {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rights_type: Option<RightsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FundingElement {
    pub agency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QualityElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_review: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_type: Option<ReviewType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editorial_board_approved: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechnicalElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_software: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figures_software: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_analysis_software: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreservationElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preservation_level: Option<PreservationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdditionalMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<Vec<FundingElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<TechnicalElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preservation: Option<PreservationElement>,
}

/// Metadata about the metadata record itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

/// The 15 Dublin Core elements, each repeatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DublinCore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<TitleElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Vec<CreatorElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Vec<SubjectElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<DescriptionElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Vec<PublisherElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Vec<ContributorElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Vec<DateElement>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<Vec<TypeElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Vec<FormatElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<IdentifierElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Vec<SourceElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Vec<LanguageElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<Vec<RelationElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Vec<CoverageElement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<Vec<RightsElement>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DublinCoreDocument {
    pub dublin_core: DublinCore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_metadata: Option<AdditionalMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_record: Option<MetadataRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let yaml = r#"
dublin_core:
  title:
    - value: "Test Document"
      type: "main"
      language: "en"
  identifier:
    - value: "LOCAL-001"
      type: "local"
"#;
        let doc: DublinCoreDocument = serde_yaml::from_str(yaml).unwrap();
        let titles = doc.dublin_core.title.unwrap();
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].value, "Test Document");
        assert_eq!(titles[0].title_type, Some(TitleType::Main));
        assert!(doc.additional_metadata.is_none());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let yaml = r#"
dublin_core:
  title:
    - value: "Test"
      typo_field: "oops"
"#;
        assert!(serde_yaml::from_str::<DublinCoreDocument>(yaml).is_err());
    }

    #[test]
    fn test_type_element_uses_reserved_key() {
        let yaml = r#"
dublin_core:
  type:
    - value: "Dataset"
      scheme: "DCMI Type Vocabulary"
"#;
        let doc: DublinCoreDocument = serde_yaml::from_str(yaml).unwrap();
        let types = doc.dublin_core.resource_type.unwrap();
        assert_eq!(types[0].scheme, Some(TypeScheme::DcmiTypeVocabulary));
    }
}
