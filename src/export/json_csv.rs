// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{MonthExport, get_headers, records_to_table};
use crate::export::notify_export_success;
use crate::models::month_summary::MonthSummary;
use crate::ui::messages::info;
use crate::utils::time::format_hours;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(summary: &MonthSummary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&MonthExport::from(summary))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the report columns and a trailing total row.
pub(crate) fn export_csv(summary: &MonthSummary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(get_headers())?;

    for row in records_to_table(&summary.records) {
        wtr.write_record(&row)?;
    }

    wtr.write_record([
        "Total mensuel".to_string(),
        String::new(),
        String::new(),
        String::new(),
        format_hours(summary.total_hours),
    ])?;

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
