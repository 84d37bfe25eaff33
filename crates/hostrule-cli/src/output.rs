//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use hostrule_domain::{Conversion, Platform};
use hostrule_engine::ConversionStats;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const PREVIEW_WIDTH: usize = 48;

/// Where a platform's active template comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateSource {
    /// Shipped with the platform
    BuiltIn,
    /// Stored by the user
    User,
    /// Nothing configured
    Unset,
}

impl TemplateSource {
    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateSource::BuiltIn => "built-in",
            TemplateSource::User => "user",
            TemplateSource::Unset => "unset",
        }
    }
}

/// One row of `template list`.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateRow {
    /// Platform id
    pub platform: String,
    /// Template origin
    pub source: TemplateSource,
    /// Active template text
    pub template: Option<String>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a conversion result.
    ///
    /// Returns `None` when nothing should be printed (quiet mode and a sentinel result).
    /// Text mode prints sentinel messages exactly like rendered output.
    pub fn format_conversion(
        &self,
        conversion: &Conversion,
        platform: &Platform,
        stats: Option<&ConversionStats>,
    ) -> Result<Option<String>> {
        match self.format {
            OutputFormat::Text => Ok(Some(conversion.as_text().to_string())),
            OutputFormat::Quiet => Ok(conversion
                .is_rendered()
                .then(|| conversion.as_text().to_string())),
            OutputFormat::Json => {
                let mut value = serde_json::json!({
                    "status": conversion.status(),
                    "platform": platform.id(),
                    "output": conversion.as_text(),
                });
                if let Some(stats) = stats {
                    value["stats"] = serde_json::json!({
                        "lines": stats.lines,
                        "host_entries": stats.host_entries,
                        "duplicates_dropped": stats.duplicates_dropped,
                    });
                }
                Ok(Some(serde_json::to_string_pretty(&value)?))
            }
        }
    }

    /// Format conversion counters as a status line.
    pub fn stats_line(&self, stats: &ConversionStats) -> String {
        self.info(&format!(
            "{} line(s), {} host entr{}, {} duplicate(s) dropped",
            stats.lines,
            stats.host_entries,
            if stats.host_entries == 1 { "y" } else { "ies" },
            stats.duplicates_dropped
        ))
    }

    /// Format the template listing.
    pub fn format_templates(&self, rows: &[TemplateRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|r| r.platform.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Text => Ok(self.format_templates_table(rows)),
        }
    }

    /// Format the template listing as a table.
    fn format_templates_table(&self, rows: &[TemplateRow]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Platform", "Source", "Template"]);

        for row in rows {
            let text = row
                .template
                .as_deref()
                .map(preview)
                .unwrap_or_else(|| "-".to_string());
            builder.push_record([row.platform.as_str(), row.source.as_str(), text.as_str()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Single-line preview of a possibly multi-line template.
fn preview(template: &str) -> String {
    if template.is_empty() {
        return "(empty)".to_string();
    }

    let first_line = template.lines().next().unwrap_or_default();
    let multiline = template.contains('\n');
    let truncated: String = first_line.chars().take(PREVIEW_WIDTH).collect();

    if multiline || truncated.len() < first_line.len() {
        format!("{truncated}…")
    } else {
        truncated
    }
}
