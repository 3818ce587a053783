// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, records_to_table, report_title, total_line};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::month_summary::MonthSummary;
use crate::ui::messages::info;
use std::path::Path;

/// Monthly report: one row per record, then the monthly total.
pub(crate) fn export_pdf(summary: &MonthSummary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = records_to_table(&summary.records);

    let mut pdf = PdfManager::new();
    pdf.write_report(&report_title(summary), &headers, &data_vec, &total_line(summary));

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
