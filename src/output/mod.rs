//! Terminal rendering for validation reports.
//!
//! Formatters build plain strings so they stay testable without a TTY.
//! Color is applied through a single gate and disabled by `--no-color`
//! or the NO_COLOR environment variable.

use owo_colors::OwoColorize;

use crate::core::batch::BatchSummary;
use crate::core::report::{ElementCounts, FileReport};
use crate::utils::error::Result;

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Renderer { color }
    }

    /// Honors `--no-color` and the NO_COLOR convention.
    pub fn from_env(no_color_flag: bool) -> Self {
        let color = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Renderer { color }
    }

    fn green(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn red(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn yellow(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn dimmed(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn status_banner(&self, report: &FileReport) -> String {
        if report.validation_status.is_passed() {
            format!("Validation Status: {}", self.green("PASSED"))
        } else {
            format!("Validation Status: {}", self.red("FAILED"))
        }
    }

    pub fn render_summary(&self, report: &FileReport, show_details: bool) -> String {
        let mut out = String::new();
        out.push_str(&self.status_banner(report));
        out.push('\n');

        if let Some(error) = &report.error {
            let kind = report.error_type.as_deref().unwrap_or("Unknown");
            out.push_str(&self.red(&format!("Error ({kind}): {error}\n")));
            for issue in &report.issues {
                out.push_str(&format!("  - {}: {}\n", issue.field, issue.message));
            }
        }

        if let Some(summary) = &report.summary {
            out.push('\n');
            out.push_str(&format!("File Path:           {}\n", report.file_path));
            if let Some(size) = report.file_size_bytes {
                out.push_str(&format!("File Size:           {size} bytes\n"));
            }
            out.push_str(&format!("Total Elements:      {}\n", summary.total_elements));
            out.push_str(&format!(
                "Populated Elements:  {}\n",
                summary.populated_elements
            ));
            out.push_str(&format!(
                "Completeness:        {:.1}%\n",
                summary.completeness_percentage
            ));
            out.push_str(&format!(
                "Additional Metadata: {}\n",
                if summary.has_additional_metadata { "Yes" } else { "No" }
            ));
            out.push_str(&format!(
                "Metadata Record:     {}\n",
                if summary.has_metadata_record { "Yes" } else { "No" }
            ));

            if show_details {
                out.push('\n');
                out.push_str(&self.render_element_table(&summary.element_counts));
            }
        }

        out
    }

    /// Per-element count table with populated markers.
    pub fn render_element_table(&self, counts: &ElementCounts) -> String {
        let mut out = String::new();
        out.push_str("Dublin Core Elements\n");
        out.push_str("--------------------------------\n");
        for (element, count) in counts.as_pairs() {
            let marker = if count > 0 {
                self.green("✓")
            } else {
                self.dimmed("○")
            };
            out.push_str(&format!("{element:<14} {count:>5}   {marker}\n"));
        }
        out
    }

    pub fn render_json<T: serde::Serialize>(&self, report: &T, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    /// One-line per-file result for batch runs.
    pub fn render_batch_line(&self, report: &FileReport) -> String {
        if report.validation_status.is_passed() {
            format!("{} {}", self.green("✓"), report.file_path)
        } else {
            let error = report.error.as_deref().unwrap_or("unknown error");
            format!("{} {}: {}", self.red("✗"), report.file_path, error)
        }
    }

    pub fn render_batch_summary(&self, summary: &BatchSummary) -> String {
        let mut out = String::new();
        out.push_str("Batch Validation Summary\n");
        out.push_str("--------------------------------\n");
        out.push_str(&format!("Total Files:  {}\n", summary.total_files));
        out.push_str(&format!(
            "Passed:       {}\n",
            self.green(&summary.passed.to_string())
        ));
        let failed = if summary.failed > 0 {
            self.red(&summary.failed.to_string())
        } else {
            summary.failed.to_string()
        };
        out.push_str(&format!("Failed:       {failed}\n"));
        out.push_str(&format!("Success Rate: {:.1}%\n", summary.success_rate));
        out
    }

    pub fn notice(&self, text: &str) -> String {
        self.yellow(text)
    }
}
