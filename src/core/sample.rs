//! Reference document for the `example` subcommand.

/// A complete Dublin Core record that exercises most supported elements and
/// validates cleanly.
pub const SAMPLE_DOCUMENT: &str = r#"dublin_core:
  title:
    - value: "Sample Research Dataset: Climate Change Impact on Coastal Ecosystems"
      type: "main"
      language: "en"
    - value: "Impacto del Cambio Climático en Ecosistemas Costeros: Conjunto de Datos de Investigación"
      type: "translated"
      language: "es"

  creator:
    - name: "Dr. Jane Smith"
      type: "personal"
      orcid: "0000-0002-1825-0097"
      affiliation: "University of Marine Sciences"
      role: "principal investigator"
    - name: "Dr. Robert Johnson"
      type: "personal"
      affiliation: "Coastal Research Institute"
      role: "co-investigator"

  subject:
    - value: "Climate change"
      scheme: "LCSH"
    - value: "Coastal ecology"
      scheme: "LCSH"
    - value: "Marine biology"
      scheme: "LCSH"
    - value: "Environmental monitoring"
      scheme: "keyword"

  description:
    - value: "This dataset contains comprehensive measurements of coastal ecosystem parameters collected over a 5-year period to assess climate change impacts. Includes water temperature, salinity, pH levels, species abundance, and biodiversity indices from 15 monitoring stations along the Pacific coast."
      type: "abstract"
      language: "en"

  publisher:
    - name: "University of Marine Sciences Data Repository"
      type: "university"
      location: "California, USA"
      website: "https://data.umarine.edu"

  contributor:
    - name: "Marine Data Consortium"
      type: "corporate"
      role: "data collector"
    - name: "Dr. Maria Garcia"
      type: "personal"
      role: "data analyst"

  date:
    - value: "2024-01-15"
      type: "created"
      scheme: "W3CDTF"
    - value: "2024-02-01"
      type: "available"
      scheme: "W3CDTF"
    - value: "2019/2023"
      type: "temporal_coverage"
      scheme: "W3CDTF"

  type:
    - value: "Dataset"
      scheme: "DCMI Type Vocabulary"

  format:
    - value: "text/csv"
      type: "media_type"
      scheme: "IMT"
    - value: "2.5 GB"
      type: "file_size"

  identifier:
    - value: "https://doi.org/10.5555/example.dataset.2024"
      type: "DOI"
      scheme: "URI"
    - value: "UMDS-2024-001"
      type: "local"

  language:
    - value: "en"
      scheme: "ISO 639-1"
      name: "English"

  coverage:
    - value: "Pacific Coast, California, USA"
      type: "spatial"
      scheme: "TGN"
      coordinates: "lat: 32.7157-37.8044, lon: -117.1611--122.4194"
    - value: "2019-01-01/2023-12-31"
      type: "temporal"
      scheme: "W3CDTF"

  rights:
    - value: "Creative Commons Attribution 4.0 International License"
      type: "license"
      uri: "https://creativecommons.org/licenses/by/4.0/"

additional_metadata:
  funding:
    - agency: "National Science Foundation"
      grant_number: "OCE-1234567"
      country: "US"
    - agency: "California Ocean Protection Council"
      grant_number: "OPC-ENV-2019-05"
      country: "US"

  quality:
    peer_review: true
    review_type: "double-blind"

  technical:
    creation_software: "R 4.3.0, Python 3.9"
    data_analysis_software: "R packages: tidyverse, vegan, ggplot2"

metadata_record:
  created_date: "2024-01-15T10:30:00Z"
  created_by: "Dr. Jane Smith"
  record_identifier: "UMDS-META-2024-001"
  schema_version: "Dublin Core 1.1 Extended"
  encoding: "UTF-8"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::validate_source;

    #[test]
    fn test_sample_document_validates() {
        let report = validate_source(SAMPLE_DOCUMENT, "<example>");
        assert!(
            report.validation_status.is_passed(),
            "sample document failed: {:?} {:?}",
            report.error,
            report.issues
        );

        let summary = report.summary.unwrap();
        assert_eq!(summary.populated_elements, 13);
        assert!(summary.has_additional_metadata);
        assert!(summary.has_metadata_record);
    }
}
