//! Batch validation over a directory of YAML files.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::report::{validate_file, FileReport};
use crate::utils::error::{DcError, Result};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Glob-style file name pattern (`*` and `?` wildcards).
    pub pattern: String,
    pub recursive: bool,
    /// Stop at the first failing file instead of sweeping the whole set.
    pub fail_fast: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            pattern: "*.yaml".to_string(),
            recursive: false,
            fail_fast: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_files: usize,
    pub passed: usize,
    pub failed: usize,
    pub success_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub results: Vec<FileReport>,
}

/// Converts a glob-style name pattern to an anchored regex.
fn pattern_to_regex(pattern: &str) -> Result<Regex> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push('^');
    for c in pattern.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            c => expr.push_str(&regex::escape(&c.to_string())),
        }
    }
    expr.push('$');
    Regex::new(&expr).map_err(|e| DcError::InvalidConfigValueError {
        field: "pattern".to_string(),
        value: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Collects matching files in deterministic (sorted) order.
pub fn discover_files(directory: &Path, options: &BatchOptions) -> Result<Vec<PathBuf>> {
    let matcher = pattern_to_regex(&options.pattern)?;
    let max_depth = if options.recursive { usize::MAX } else { 1 };

    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map(|name| matcher.is_match(name))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    Ok(files)
}

pub fn run_batch(directory: &Path, options: &BatchOptions) -> Result<BatchReport> {
    let files = discover_files(directory, options)?;
    tracing::info!("Found {} files to validate", files.len());

    let mut results = Vec::with_capacity(files.len());
    for file in &files {
        tracing::debug!("Validating {}", file.display());
        let report = validate_file(file);
        let failed = !report.validation_status.is_passed();
        results.push(report);

        if failed && options.fail_fast {
            tracing::warn!("Stopping batch run after first failure (--fail-fast)");
            break;
        }
    }

    let failed = results
        .iter()
        .filter(|r| !r.validation_status.is_passed())
        .count();
    let passed = results.len() - failed;
    let success_rate = if results.is_empty() {
        0.0
    } else {
        passed as f64 / results.len() as f64 * 100.0
    };

    Ok(BatchReport {
        summary: BatchSummary {
            total_files: results.len(),
            passed,
            failed,
            success_rate,
        },
        results,
    })
}
