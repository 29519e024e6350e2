use crate::constants::REPORT_TITLE;
use crate::error::{RankingError, Result};
use crate::types::RankedRecord;
use askama::Template;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Static ranking page. Every interpolated value is HTML-escaped; the radar
/// hyperlink markup around the ASN column lives in the template itself.
#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate<'a> {
    pub title: &'a str,
    pub rows: &'a [RankedRecord],
    pub repository_url: &'a str,
    pub asn_source: &'a str,
    pub universities_source: &'a str,
}

/// Locations shown in the report footer
#[derive(Debug, Clone, Copy)]
pub struct ReportLinks<'a> {
    pub repository_url: &'a str,
    pub asn_source: &'a str,
    pub universities_source: &'a str,
}

pub fn render_report(rows: &[RankedRecord], links: ReportLinks<'_>) -> Result<String> {
    let template = ReportTemplate {
        title: REPORT_TITLE,
        rows,
        repository_url: links.repository_url,
        asn_source: links.asn_source,
        universities_source: links.universities_source,
    };
    Ok(template.render()?)
}

/// Writes the document to `path`, replacing any existing file.
#[instrument(skip(path, html), fields(path = %path.display()))]
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    let write_error = |source: std::io::Error| RankingError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(html.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    info!(bytes = html.len(), "Wrote report");
    Ok(())
}
