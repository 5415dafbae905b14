//! Format predicates for ISO-standard identifier and date strings.
//!
//! Acceptance patterns match the published standards subset the validator
//! supports: ISO 8601 (W3CDTF dates), ISO 26324 (DOI), ISO 2108 (ISBN),
//! ISO 3297 (ISSN) and ISO 27729 (ORCID).

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static ISO8601_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\d{4}-\d{2}-\d{2}$",
        r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z?$",
        r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z?$",
        // YYYY/YYYY periods and date ranges
        r"^\d{4}/\d{4}$",
        r"^\d{4}-\d{2}-\d{2}/\d{4}-\d{2}-\d{2}$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern"))
    .collect()
});

static PLAIN_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static pattern"));

static DOI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?(dx\.)?doi\.org/10\.\d{4,}/[^\s]+$|^10\.\d{4,}/[^\s]+$")
        .expect("static pattern")
});

static ISBN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(97[89])?\d{9}[\dX]$").expect("static pattern"));

static ISSN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ISSN\s?\d{4}-\d{3}[\dX]$").expect("static pattern"));

static ORCID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0000-000[1-3]-\d{4}-\d{3}[\dX]$").expect("static pattern"));

static COORDINATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^lat:\s*-?\d+\.?\d*-?-?\d+\.?\d*,\s*lon:\s*-?\d+\.?\d*-?-?\d+\.?\d*$")
        .expect("static pattern")
});

static CHECKSUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(md5|sha1|sha256|sha512):[a-fA-F0-9]+$").expect("static pattern"));

static UTC_TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").expect("static pattern"));

/// ISO 8601 / W3CDTF date, period (`YYYY/YYYY`) or date range.
///
/// Plain `YYYY-MM-DD` values must also name a real calendar day, so
/// `2024-02-30` is rejected even though it fits the shape.
pub fn is_iso8601_date(value: &str) -> bool {
    if !ISO8601_PATTERNS.iter().any(|p| p.is_match(value)) {
        return false;
    }
    if PLAIN_DATE.is_match(value) {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
    }
    true
}

pub fn is_valid_doi(value: &str) -> bool {
    DOI.is_match(value)
}

/// ISBN-10 or ISBN-13, hyphens and spaces ignored.
pub fn is_valid_isbn(value: &str) -> bool {
    let clean: String = value.chars().filter(|c| *c != '-' && !c.is_whitespace()).collect();
    ISBN.is_match(&clean)
}

pub fn is_valid_issn(value: &str) -> bool {
    ISSN.is_match(value)
}

pub fn is_valid_orcid(value: &str) -> bool {
    ORCID.is_match(value)
}

/// Geographic coordinate range string, e.g.
/// `lat: 32.7157-37.8044, lon: -117.1611--122.4194`.
pub fn is_valid_coordinates(value: &str) -> bool {
    COORDINATES.is_match(value)
}

/// `<algorithm>:<hex digest>` with md5/sha1/sha256/sha512.
pub fn is_valid_checksum(value: &str) -> bool {
    CHECKSUM.is_match(value)
}

/// Record-keeping timestamp: `YYYY-MM-DDTHH:MM:SSZ`.
pub fn is_utc_timestamp(value: &str) -> bool {
    UTC_TIMESTAMP.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso8601_dates() {
        assert!(is_iso8601_date("2024-01-15"));
        assert!(is_iso8601_date("2024-01-15T10:30:00Z"));
        assert!(is_iso8601_date("2024-01-15T10:30:00.123Z"));
        assert!(is_iso8601_date("2019/2023"));
        assert!(is_iso8601_date("2019-01-01/2023-12-31"));
        assert!(!is_iso8601_date("January 15, 2024"));
        assert!(!is_iso8601_date("2024-1-5"));
    }

    #[test]
    fn test_calendar_validity() {
        assert!(!is_iso8601_date("2024-13-45"));
        assert!(!is_iso8601_date("2023-02-29"));
        assert!(is_iso8601_date("2024-02-29"));
    }

    #[test]
    fn test_doi() {
        assert!(is_valid_doi("10.1000/test"));
        assert!(is_valid_doi("https://doi.org/10.5555/example.dataset.2024"));
        assert!(is_valid_doi("http://dx.doi.org/10.1234/abc"));
        assert!(!is_valid_doi("doi:10.1000/test"));
        assert!(!is_valid_doi("10.12/too-short-prefix"));
    }

    #[test]
    fn test_isbn() {
        assert!(is_valid_isbn("978-3-16-148410-0"));
        assert!(is_valid_isbn("0306406152"));
        assert!(is_valid_isbn("043942089X"));
        assert!(!is_valid_isbn("12345"));
        assert!(!is_valid_isbn("978-3-16-148410-0-9"));
    }

    #[test]
    fn test_issn() {
        assert!(is_valid_issn("ISSN 2049-3630"));
        assert!(is_valid_issn("ISSN 1234-567X"));
        assert!(is_valid_issn("issn 2049-3630"));
        assert!(!is_valid_issn("2049-3630"));
    }

    #[test]
    fn test_orcid() {
        assert!(is_valid_orcid("0000-0002-1825-0097"));
        assert!(is_valid_orcid("0000-0001-5109-370X"));
        assert!(!is_valid_orcid("0000-0009-1825-0097"));
        assert!(!is_valid_orcid("0000-0002-1825-009"));
    }

    #[test]
    fn test_coordinates() {
        assert!(is_valid_coordinates(
            "lat: 32.7157-37.8044, lon: -117.1611--122.4194"
        ));
        assert!(!is_valid_coordinates("32.7157, -117.1611"));
    }

    #[test]
    fn test_checksum() {
        assert!(is_valid_checksum("sha256:deadbeef0123456789abcdef"));
        assert!(is_valid_checksum("md5:d41d8cd98f00b204e9800998ecf8427e"));
        assert!(!is_valid_checksum("crc32:12345678"));
        assert!(!is_valid_checksum("sha256:nothex"));
    }

    #[test]
    fn test_utc_timestamp() {
        assert!(is_utc_timestamp("2024-01-15T10:30:00Z"));
        assert!(!is_utc_timestamp("2024-01-15T10:30:00"));
        assert!(!is_utc_timestamp("2024-01-15"));
    }
}
