//! Shareable comparison reports: pretty JSON for files, colored text for terminals.
use std::fmt::{self, Write as _};

use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use crate::compare::{diff, ComparisonStats, DiffEntry, DiffStatus};
use crate::path::Path;
use crate::search::search;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// keep the per-path classification in the report
    pub include_paths: bool,
    pub query: Option<String>,
}

/// Search hits for the same query on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHighlights {
    pub query: String,
    pub left: Vec<Path>,
    pub right: Vec<Path>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub left_json: Value,
    pub right_json: Value,
    pub statistics: ComparisonStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differences: Option<Vec<DiffEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchHighlights>,
    pub timestamp: DateTime<Utc>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl SearchHighlights {
    /// Search both trees concurrently.
    pub fn collect(left: &Value, right: &Value, query: &str) -> Self {
        let (left, right) = rayon::join(|| search(left, query), || search(right, query));
        Self { query: query.to_owned(), left, right }
    }
}

impl ComparisonReport {
    pub fn build(left: Value, right: Value, options: &ReportOptions) -> Self {
        Self::build_at(left, right, options, Utc::now())
    }

    pub fn build_at(
        left: Value,
        right: Value,
        options: &ReportOptions,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let structural = diff(&left, &right);
        let statistics = structural.stats();
        let search = options
            .query
            .as_deref()
            .filter(|query| !query.is_empty())
            .map(|query| SearchHighlights::collect(&left, &right, query));
        Self {
            left_json: left,
            right_json: right,
            statistics,
            differences: options.include_paths.then(|| structural.entries().to_vec()),
            search,
            timestamp,
        }
    }

    /// `json_comparison_report_<timestamp>.json`, safe on every filesystem.
    pub fn default_file_name(&self) -> String {
        let stamp = self
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace(':', "-");
        format!("json_comparison_report_{stamp}.json")
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{}", "Comparison Statistics".bold())?;
        let rows = self.statistics.labelled();
        let width = rows.iter().map(|(label, _)| label.len() + 1).max().unwrap_or(0);
        for (label, value) in rows {
            let label = format!("{label}:");
            writeln!(out, "  {label:<width$}  {}", value.to_string().bold())?;
        }

        if let Some(entries) = &self.differences {
            writeln!(out)?;
            writeln!(out, "{}", "Paths".bold())?;
            for entry in entries {
                writeln!(out, "  {}", render_entry(entry))?;
            }
        }

        if let Some(hits) = &self.search {
            writeln!(out)?;
            writeln!(out, "{} {:?}", "Search".bold(), hits.query)?;
            for (side, paths) in [("left", &hits.left), ("right", &hits.right)] {
                writeln!(out, "  {side}: {} match(es)", paths.len())?;
                for path in paths {
                    writeln!(out, "    {}", display_path(path).magenta())?;
                }
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn display_path(path: &Path) -> String {
    if path.is_root() { "(root)".to_owned() } else { path.to_string() }
}

fn render_entry(entry: &DiffEntry) -> String {
    let path = display_path(&entry.path);
    match entry.status {
        DiffStatus::Matching => format!("= {path}").green().to_string(),
        DiffStatus::Different => format!("~ {path}").yellow().to_string(),
        DiffStatus::OnlyLeft => format!("- {path}").red().to_string(),
        DiffStatus::OnlyRight => format!("+ {path}").cyan().to_string(),
    }
}
