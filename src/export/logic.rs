// src/export/logic.rs

use crate::core::calculator::monthly::summarize;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::store::RecordStore;
use crate::ui::messages::warning;
use crate::utils::date::YearMonth;
use std::path::{Path, PathBuf};
use tracing::debug;

/// High-level export logic for one calendar month.
pub struct ExportLogic;

impl ExportLogic {
    /// Default output name: `synthese_YYYY-MM.<ext>` inside `dir`.
    pub fn default_path(dir: &Path, month: YearMonth, format: ExportFormat) -> PathBuf {
        dir.join(format!("synthese_{}.{}", month, format.as_str()))
    }

    /// Export the records of `month`.
    ///
    /// Returns the written path, or `None` when the month holds no records
    /// (nothing is written in that case).
    pub fn export<S: RecordStore + ?Sized>(
        store: &S,
        month: YearMonth,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let records = store.load()?;
        let summary = summarize(&records, month);

        if summary.records.is_empty() {
            warning(format!("No records found for {}.", month));
            return Ok(None);
        }

        if summary.open_count() > 0 {
            warning(format!(
                "{} open session(s) in {} count as 0 hours.",
                summary.open_count(),
                month
            ));
        }

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        debug!(
            %month,
            format = format.as_str(),
            records = summary.records.len(),
            total = summary.total_hours,
            "exporting month"
        );

        match format {
            ExportFormat::Pdf => export_pdf(&summary, path)?,
            ExportFormat::Csv => export_csv(&summary, path)?,
            ExportFormat::Json => export_json(&summary, path)?,
        }

        Ok(Some(path.to_path_buf()))
    }
}
