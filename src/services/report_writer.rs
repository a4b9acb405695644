use std::fs;
use std::path::{Path, PathBuf};
use chrono::Local;
use crate::errors::{SeolyzerError, SeolyzerResult};
use crate::structs::audit_report::AuditReport;

/// Persists one audit run as a timestamped pretty-printed JSON file.
pub struct ReportWriter;

impl ReportWriter {
    pub fn save(report: &AuditReport) -> SeolyzerResult<PathBuf> {
        Self::save_in(report, Path::new("."))
    }

    pub fn save_in(report: &AuditReport, dir: &Path) -> SeolyzerResult<PathBuf> {
        let file_name = format!("seo_report_{}.json", Local::now().format("%Y%m%d_%H%M%S"));
        let path = dir.join(file_name);

        let json = report.to_json()?;
        fs::write(&path, json)
            .map_err(|e| SeolyzerError::report_error(&path.display().to_string(), &e.to_string()))?;

        Ok(path)
    }
}
