//! Controlled vocabularies for Dublin Core qualifiers.
//!
//! Every closed value set from the element definitions lives here as a serde
//! enum, so membership is enforced at deserialization time and an unexpected
//! term surfaces as a schema error naming the offending field.

use serde::{Deserialize, Serialize};

/// ISO 639-1 two-letter language codes (common subset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Ru,
    Ja,
    Zh,
    Ar,
    Hi,
    Ko,
    Nl,
    Sv,
    No,
    Da,
    Fi,
    Pl,
    Cs,
    Hu,
}

/// ISO 3166-1 country codes (subset, both alpha-2 and a few alpha-3 aliases).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountryCode {
    US,
    USA,
    GB,
    UK,
    CA,
    AU,
    DE,
    FR,
    ES,
    IT,
    JP,
    CN,
    IN,
    BR,
    MX,
    RU,
    /// Special case for the European Union.
    EU,
}

/// DCMI Type Vocabulary terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DcmiType {
    Collection,
    Dataset,
    Event,
    Image,
    InteractiveResource,
    MovingImage,
    PhysicalObject,
    Service,
    Software,
    Sound,
    StillImage,
    Text,
}

impl DcmiType {
    /// Checks a free-form type value against the vocabulary.
    pub fn is_member(value: &str) -> bool {
        matches!(
            value,
            "Collection"
                | "Dataset"
                | "Event"
                | "Image"
                | "InteractiveResource"
                | "MovingImage"
                | "PhysicalObject"
                | "Service"
                | "Software"
                | "Sound"
                | "StillImage"
                | "Text"
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectScheme {
    #[serde(rename = "LCSH")]
    Lcsh,
    #[serde(rename = "MeSH")]
    Mesh,
    #[serde(rename = "DDC")]
    Ddc,
    #[serde(rename = "UDC")]
    Udc,
    #[serde(rename = "LCC")]
    Lcc,
    #[serde(rename = "AGROVOC")]
    Agrovoc,
    #[serde(rename = "AAT")]
    Aat,
    #[serde(rename = "keyword")]
    Keyword,
    #[serde(rename = "local")]
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateScheme {
    #[serde(rename = "W3CDTF")]
    W3cdtf,
    #[serde(rename = "DCMI Period")]
    DcmiPeriod,
    #[serde(rename = "TGN")]
    Tgn,
    #[serde(rename = "local")]
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierScheme {
    #[serde(rename = "URI")]
    Uri,
    #[serde(rename = "URN")]
    Urn,
    #[serde(rename = "DOI")]
    Doi,
    #[serde(rename = "ISBN")]
    Isbn,
    #[serde(rename = "ISSN")]
    Issn,
    Handle,
    #[serde(rename = "local")]
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleType {
    Main,
    Alternative,
    Translated,
    Subtitle,
    Uniform,
    Abbreviated,
    Expanded,
}

/// Shared by creator and contributor `type` qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    Personal,
    Corporate,
    Conference,
    Family,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatorRole {
    #[serde(rename = "author")]
    Author,
    #[serde(rename = "principal investigator")]
    PrincipalInvestigator,
    #[serde(rename = "co-investigator")]
    CoInvestigator,
    #[serde(rename = "researcher")]
    Researcher,
    #[serde(rename = "analyst")]
    Analyst,
    #[serde(rename = "institutional author")]
    InstitutionalAuthor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributorRole {
    #[serde(rename = "editor")]
    Editor,
    #[serde(rename = "translator")]
    Translator,
    #[serde(rename = "illustrator")]
    Illustrator,
    #[serde(rename = "data collector")]
    DataCollector,
    #[serde(rename = "advisor")]
    Advisor,
    #[serde(rename = "reviewer")]
    Reviewer,
    #[serde(rename = "sponsor")]
    Sponsor,
    #[serde(rename = "funder")]
    Funder,
    #[serde(rename = "distributor")]
    Distributor,
    #[serde(rename = "graphics design")]
    GraphicsDesign,
    #[serde(rename = "data analyst")]
    DataAnalyst,
    #[serde(rename = "peer reviewer")]
    PeerReviewer,
    #[serde(rename = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DescriptionType {
    Abstract,
    Summary,
    TableOfContents,
    Methods,
    Purpose,
    Scope,
    Provenance,
    Review,
    Version,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublisherType {
    Commercial,
    University,
    Government,
    Society,
    Individual,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublisherRole {
    #[serde(rename = "publisher")]
    Publisher,
    #[serde(rename = "co-publisher")]
    CoPublisher,
    #[serde(rename = "distributor")]
    Distributor,
    #[serde(rename = "sponsor")]
    Sponsor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateType {
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "valid")]
    Valid,
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "issued")]
    Issued,
    #[serde(rename = "modified")]
    Modified,
    #[serde(rename = "submitted")]
    Submitted,
    #[serde(rename = "accepted")]
    Accepted,
    #[serde(rename = "copyrighted")]
    Copyrighted,
    #[serde(rename = "collected")]
    Collected,
    #[serde(rename = "published")]
    Published,
    #[serde(rename = "temporal_coverage")]
    TemporalCoverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeScheme {
    #[serde(rename = "DCMI Type Vocabulary")]
    DcmiTypeVocabulary,
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "AAT")]
    Aat,
    #[serde(rename = "MARC Genre Terms")]
    MarcGenreTerms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatType {
    MediaType,
    Extent,
    Medium,
    Dimensions,
    FileSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatScheme {
    #[serde(rename = "IMT")]
    Imt,
    #[serde(rename = "local")]
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierType {
    #[serde(rename = "DOI")]
    Doi,
    #[serde(rename = "ISBN")]
    Isbn,
    #[serde(rename = "ISSN")]
    Issn,
    #[serde(rename = "URI")]
    Uri,
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "URN")]
    Urn,
    Handle,
    #[serde(rename = "PMID")]
    Pmid,
    #[serde(rename = "PMC")]
    Pmc,
    #[serde(rename = "arXiv")]
    ArXiv,
    #[serde(rename = "local")]
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Dataset,
    Publication,
    Website,
    Database,
    Collection,
    PublicationSeries,
    ConferenceProceedings,
    Report,
    Thesis,
    RemoteSensingData,
    FieldData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageScheme {
    #[serde(rename = "ISO 639-1")]
    Iso639_1,
    #[serde(rename = "ISO 639-2")]
    Iso639_2,
    #[serde(rename = "ISO 639-3")]
    Iso639_3,
    #[serde(rename = "RFC 3066")]
    Rfc3066,
    #[serde(rename = "local")]
    Local,
}

/// DCMI relation refinements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationType {
    IsVersionOf,
    HasVersion,
    IsReplacedBy,
    Replaces,
    IsRequiredBy,
    Requires,
    IsPartOf,
    HasPart,
    IsReferencedBy,
    References,
    IsFormatOf,
    HasFormat,
    ConformsTo,
    IsBasedOn,
    IsBasisFor,
    Continues,
    IsContinuedBy,
    Accompanies,
    IsAccompaniedBy,
    IsSupplementTo,
    IsSupplementedBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageType {
    Spatial,
    Temporal,
    Jurisdiction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageScheme {
    #[serde(rename = "TGN")]
    Tgn,
    #[serde(rename = "LCSH")]
    Lcsh,
    GeoNames,
    #[serde(rename = "ISO 3166")]
    Iso3166,
    #[serde(rename = "WGS84")]
    Wgs84,
    #[serde(rename = "W3CDTF")]
    W3cdtf,
    #[serde(rename = "local")]
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RightsType {
    Copyright,
    License,
    AccessRights,
    UseRestrictions,
    DataRights,
    Embargo,
    TermsOfUse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewType {
    #[serde(rename = "single-blind")]
    SingleBlind,
    #[serde(rename = "double-blind")]
    DoubleBlind,
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "post-publication")]
    PostPublication,
    #[serde(rename = "editorial")]
    Editorial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreservationLevel {
    #[serde(rename = "bit-level")]
    BitLevel,
    #[serde(rename = "logical")]
    Logical,
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "none")]
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_lowercase() {
        let code: LanguageCode = serde_yaml::from_str("en").unwrap();
        assert_eq!(code, LanguageCode::En);
        assert!(serde_yaml::from_str::<LanguageCode>("EN").is_err());
    }

    #[test]
    fn test_dcmi_membership() {
        assert!(DcmiType::is_member("Dataset"));
        assert!(DcmiType::is_member("InteractiveResource"));
        assert!(!DcmiType::is_member("dataset"));
        assert!(!DcmiType::is_member("Painting"));
    }

    #[test]
    fn test_spaced_renames() {
        let role: CreatorRole = serde_yaml::from_str("principal investigator").unwrap();
        assert_eq!(role, CreatorRole::PrincipalInvestigator);

        let scheme: TypeScheme = serde_yaml::from_str("DCMI Type Vocabulary").unwrap();
        assert_eq!(scheme, TypeScheme::DcmiTypeVocabulary);
    }

    #[test]
    fn test_relation_camel_case() {
        let rel: RelationType = serde_yaml::from_str("isPartOf").unwrap();
        assert_eq!(rel, RelationType::IsPartOf);
        assert!(serde_yaml::from_str::<RelationType>("is_part_of").is_err());
    }
}
