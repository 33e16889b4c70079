use crate::domain::model::{Report, ReportFormat};
use crate::utils::error::{EtlError, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;

const BANNER_WIDTH: usize = 55;
const SUMMARY_WIDTH: usize = 45;

pub const NONE_FOUND_REPORT: &str = "No email addresses were found in the input file.";
pub const NONE_FOUND_SUMMARY: &str = "No emails were found in the input file.";

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    total: usize,
    emails: &'a [String],
}

#[derive(Serialize)]
struct CsvRow<'a> {
    index: usize,
    email: &'a str,
}

pub fn render(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => render_json(report),
        ReportFormat::Csv => render_csv(report),
    }
}

/// Banner, header block, numbered entries, closing banner.
pub fn render_text(report: &Report) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    // String 的 fmt::Write 不會失敗
    let _ = writeln!(out, "{}", banner);
    let _ = writeln!(out, "  EXTRACTED EMAIL ADDRESSES");
    let _ = writeln!(out, "  Generated : {}", report.timestamp());
    let _ = writeln!(out, "  Total     : {} unique email(s) found", report.total());
    let _ = writeln!(out, "{}", banner);
    out.push('\n');

    if report.is_empty() {
        let _ = writeln!(out, "  {}", NONE_FOUND_REPORT);
    } else {
        for (i, email) in report.emails.iter().enumerate() {
            let _ = writeln!(out, "  {:>3}.  {}", i + 1, email);
        }
    }

    out.push('\n');
    let _ = writeln!(out, "{}", banner);
    out
}

pub fn render_json(report: &Report) -> Result<String> {
    let payload = JsonReport {
        generated_at: report.timestamp(),
        total: report.total(),
        emails: &report.emails,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

pub fn render_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if report.is_empty() {
        writer.write_record(["index", "email"])?;
    }
    for (i, email) in report.emails.iter().enumerate() {
        writer.serialize(CsvRow {
            index: i + 1,
            email,
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// Console view: same numbering and order, no timestamp or banner.
pub fn write_summary<W: Write>(report: &Report, out: &mut W) -> std::io::Result<()> {
    let rule = "─".repeat(SUMMARY_WIDTH);

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "  📧  Emails found : {}", report.total())?;
    writeln!(out, "{}", rule)?;

    if report.is_empty() {
        writeln!(out, "  {}", NONE_FOUND_SUMMARY)?;
    } else {
        for (i, email) in report.emails.iter().enumerate() {
            writeln!(out, "  {:>3}.  {}", i + 1, email)?;
        }
    }

    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    Ok(())
}
