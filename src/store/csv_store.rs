use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::SessionRecord;
use crate::utils::date::parse_date;
use crate::utils::time::{format_hours, format_time, parse_time};
use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Column labels of the data file, fixed by convention.
pub const HEADERS: [&str; 6] = [
    "ID",
    "Date",
    "Heure Début",
    "Heure Fin",
    "Pause (min)",
    "Durée (h)",
];

const COL_ID: usize = 0;
const COL_DATE: usize = 1;
const COL_START: usize = 2;
const COL_END: usize = 3;
const COL_BREAK: usize = 4;
const COL_DURATION: usize = 5;

/// CSV-backed store. Extra columns in an existing file are ignored on load
/// and dropped on the next save.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

/// Position of each known column in the file header, if present.
struct Layout([Option<usize>; 6]);

impl Layout {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut cols = [None; 6];
        for (i, h) in headers.iter().enumerate() {
            let h = h.trim_start_matches('\u{feff}').trim();
            if let Some(pos) = HEADERS.iter().position(|known| *known == h) {
                cols[pos] = Some(i);
            }
        }
        Self(cols)
    }

    fn cell<'r>(&self, row: &'r StringRecord, col: usize) -> &'r str {
        self.0[col].and_then(|i| row.get(i)).unwrap_or("").trim()
    }

    fn has(&self, col: usize) -> bool {
        self.0[col].is_some()
    }
}

/// Parsed row, id still optional until the whole file is seen.
struct RawRow {
    id: Option<u32>,
    record: SessionRecord,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with only the header row, unless it already exists.
    pub fn init(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&[])?;
        Ok(true)
    }

    fn parse_row(layout: &Layout, row: &StringRecord, line: usize) -> AppResult<RawRow> {
        let malformed = |reason: String| AppError::MalformedRecord { line, reason };

        let date_s = layout.cell(row, COL_DATE);
        let date =
            parse_date(date_s).ok_or_else(|| malformed(format!("invalid date '{date_s}'")))?;

        let start_s = layout.cell(row, COL_START);
        let start =
            parse_time(start_s).ok_or_else(|| malformed(format!("invalid start '{start_s}'")))?;

        let end_s = layout.cell(row, COL_END);
        let end = if end_s.is_empty() {
            None
        } else {
            Some(parse_time(end_s).ok_or_else(|| malformed(format!("invalid end '{end_s}'")))?)
        };

        let break_s = layout.cell(row, COL_BREAK);
        let break_minutes = if break_s.is_empty() {
            0
        } else {
            parse_count(break_s).ok_or_else(|| malformed(format!("invalid break '{break_s}'")))?
        };

        let dur_s = layout.cell(row, COL_DURATION);
        let duration_hours = if dur_s.is_empty() {
            None
        } else {
            Some(
                dur_s
                    .parse::<f64>()
                    .map_err(|_| malformed(format!("invalid duration '{dur_s}'")))?,
            )
        };

        let id_s = layout.cell(row, COL_ID);
        let id = if id_s.is_empty() {
            None
        } else {
            Some(parse_count(id_s).ok_or_else(|| malformed(format!("invalid id '{id_s}'")))?)
        };

        let mut record = SessionRecord {
            id: id.unwrap_or(0),
            date,
            start,
            end,
            break_minutes,
            duration_hours,
        };

        if record.end.is_some() && record.duration_hours.is_none() {
            debug!(line, "closed record without duration, recomputing");
            record.recompute()?;
        }

        Ok(RawRow { id, record })
    }
}

/// Non-negative integer cell; tolerates a float rendering such as `30.0`.
fn parse_count(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>() {
        return Some(n);
    }
    match s.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => Some(f as u32),
        _ => None,
    }
}

impl RecordStore for CsvStore {
    fn load(&self) -> AppResult<Vec<SessionRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "data file not found, starting empty");
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_path(&self.path)?;

        let layout = Layout::from_headers(rdr.headers()?);
        for required in [COL_DATE, COL_START] {
            if !layout.has(required) {
                return Err(AppError::MalformedRecord {
                    line: 1,
                    reason: format!("missing column '{}'", HEADERS[required]),
                });
            }
        }

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let row = result?;
            if row.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            let line = row.position().map_or(idx + 2, |p| p.line() as usize);
            rows.push(Self::parse_row(&layout, &row, line)?);
        }

        let mut seen = HashSet::new();
        let ids_usable = layout.has(COL_ID)
            && rows
                .iter()
                .all(|r| r.id.is_some_and(|id| id > 0 && seen.insert(id)));

        if !ids_usable && !rows.is_empty() {
            info!(
                path = %self.path.display(),
                count = rows.len(),
                "missing or duplicate identifiers, assigning 1..N in file order"
            );
        }

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                let mut record = raw.record;
                if !ids_usable {
                    record.id = (i + 1) as u32;
                }
                record
            })
            .collect())
    }

    fn save(&self, records: &[SessionRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = Writer::from_path(&self.path)?;
        wtr.write_record(HEADERS)?;

        for r in records {
            wtr.write_record([
                r.id.to_string(),
                r.date.format("%Y-%m-%d").to_string(),
                format_time(&r.start),
                r.end.as_ref().map(format_time).unwrap_or_default(),
                r.break_minutes.to_string(),
                r.duration_hours.map(format_hours).unwrap_or_default(),
            ])?;
        }

        wtr.flush()?;
        debug!(path = %self.path.display(), count = records.len(), "records saved");
        if records.iter().filter(|r| r.is_open()).count() > 1 {
            warn!("more than one open session stored");
        }
        Ok(())
    }
}
