//! Report renderers.
//!
//! Five formats over the same record sequence: [`simple`] (aligned plain
//! table, the default), [`ansi`] (colored table with a summary line),
//! [`json`], [`markdown`] and [`csv`]. Renderers write to any sink so the
//! report can go to stdout or a file.

use std::io::Write;

use anyhow::Result;

use crate::models::PackageCompat;

pub mod ansi;
pub mod csv;
pub mod json;
pub mod markdown;
pub mod simple;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Simple,
    Ansi,
    Json,
    Markdown,
    Csv,
}

/// Render `records` in the requested format.
pub fn render(format: ReportFormat, records: &[PackageCompat], out: &mut dyn Write) -> Result<()> {
    match format {
        ReportFormat::Simple => simple::render(records, out)?,
        ReportFormat::Ansi => ansi::render(records, out)?,
        ReportFormat::Json => json::render(records, out)?,
        ReportFormat::Markdown => markdown::render(records, out)?,
        ReportFormat::Csv => csv::render(records, out)?,
    }
    Ok(())
}

/// Raw license string for display; empty means nothing was declared.
pub(crate) fn license_label(record: &PackageCompat) -> &str {
    if record.info.license.is_empty() {
        "unknown"
    } else {
        &record.info.license
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{LicenseCategory, PackageCompat, PackageInfo};

    pub fn sample_records() -> Vec<PackageCompat> {
        vec![
            PackageCompat {
                info: PackageInfo {
                    name: "requests".to_string(),
                    version: "2.28.1".to_string(),
                    license: "Apache 2.0".to_string(),
                    homepage: Some("https://requests.readthedocs.io".to_string()),
                    author: Some("Kenneth Reitz".to_string()),
                },
                category: LicenseCategory::Permissive,
                license_compat: true,
            },
            PackageCompat {
                info: PackageInfo {
                    name: "mystery".to_string(),
                    version: "0.1.0".to_string(),
                    license: String::new(),
                    homepage: None,
                    author: None,
                },
                category: LicenseCategory::Unknown,
                license_compat: false,
            },
        ]
    }
}
