// src/export/model.rs

use crate::models::month_summary::MonthSummary;
use crate::models::record::SessionRecord;
use crate::utils::time::{display_time, format_hours};
use serde::Serialize;

/// Flat record shape for the JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: u32,
    pub date: String,
    pub start: String,
    pub end: Option<String>,
    pub break_minutes: u32,
    pub duration_hours: Option<f64>,
}

impl From<&SessionRecord> for RecordExport {
    fn from(r: &SessionRecord) -> Self {
        Self {
            id: r.id,
            date: r.date.format("%Y-%m-%d").to_string(),
            start: display_time(&r.start),
            end: r.end.as_ref().map(display_time),
            break_minutes: r.break_minutes,
            duration_hours: r.duration_hours,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct MonthExport {
    pub month: String,
    pub total_hours: f64,
    pub records: Vec<RecordExport>,
}

impl From<&MonthSummary> for MonthExport {
    fn from(s: &MonthSummary) -> Self {
        Self {
            month: s.month.to_string(),
            total_hours: s.total_hours,
            records: s.records.iter().map(RecordExport::from).collect(),
        }
    }
}

/// Header for CSV / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["Date", "Heure Début", "Heure Fin", "Pause (min)", "Durée (h)"]
}

pub(crate) fn record_to_row(r: &SessionRecord) -> Vec<String> {
    vec![
        r.date.format("%Y-%m-%d").to_string(),
        display_time(&r.start),
        r.end.as_ref().map(display_time).unwrap_or_else(|| "--:--".into()),
        r.break_minutes.to_string(),
        r.duration_hours.map(format_hours).unwrap_or_default(),
    ]
}

pub(crate) fn records_to_table(records: &[SessionRecord]) -> Vec<Vec<String>> {
    records.iter().map(record_to_row).collect()
}

pub(crate) fn report_title(summary: &MonthSummary) -> String {
    format!("Synthèse des heures de garde - {}", summary.month)
}

pub(crate) fn total_line(summary: &MonthSummary) -> String {
    format!("Total mensuel : {} heures", format_hours(summary.total_hours))
}
