use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output of the extraction stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Lower-cased, unique, ascending.
    pub emails: Vec<String>,
    /// Raw pattern matches before normalization and dedup.
    pub matches_found: usize,
    pub characters_scanned: usize,
}

impl ExtractionResult {
    pub fn duplicates_removed(&self) -> usize {
        self.matches_found - self.emails.len()
    }
}

/// Write-once report artifact.
#[derive(Debug, Clone)]
pub struct Report {
    pub generated_at: DateTime<Local>,
    pub emails: Vec<String>,
}

impl Report {
    pub fn new(emails: Vec<String>) -> Self {
        Self::with_timestamp(emails, Local::now())
    }

    pub fn with_timestamp(emails: Vec<String>, generated_at: DateTime<Local>) -> Self {
        Self {
            generated_at,
            emails,
        }
    }

    pub fn total(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// 本地時間，精確到秒
    pub fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!("unknown report format: {}", other)),
        }
    }
}

/// What a completed run hands back to the caller.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: Report,
    pub output_path: String,
}
