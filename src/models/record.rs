use crate::core::calculator::duration::calculate_hours;
use crate::errors::AppResult;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One childcare interval, drop-off to pick-up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    pub id: u32,                     // ⇔ "ID"
    pub date: NaiveDate,             // ⇔ "Date" (YYYY-MM-DD)
    pub start: NaiveTime,            // ⇔ "Heure Début"
    pub end: Option<NaiveTime>,      // ⇔ "Heure Fin", empty while open
    pub break_minutes: u32,          // ⇔ "Pause (min)"
    pub duration_hours: Option<f64>, // ⇔ "Durée (h)", derived
}

impl SessionRecord {
    /// A closed record with its duration computed.
    pub fn closed(
        id: u32,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        break_minutes: u32,
    ) -> AppResult<Self> {
        let duration = calculate_hours(start, end, break_minutes)?;
        Ok(Self {
            id,
            date,
            start,
            end: Some(end),
            break_minutes,
            duration_hours: Some(duration),
        })
    }

    /// A drop-off: no end, no duration yet.
    pub fn open(id: u32, date: NaiveDate, start: NaiveTime) -> Self {
        Self {
            id,
            date,
            start,
            end: None,
            break_minutes: 0,
            duration_hours: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Pick-up: fill the end time and derive the duration.
    pub fn close(&mut self, end: NaiveTime, break_minutes: u32) -> AppResult<f64> {
        let duration = calculate_hours(self.start, end, break_minutes)?;
        self.end = Some(end);
        self.break_minutes = break_minutes;
        self.duration_hours = Some(duration);
        Ok(duration)
    }

    /// Re-derives `duration_hours` from the stored fields.
    pub fn recompute(&mut self) -> AppResult<()> {
        self.duration_hours = match self.end {
            Some(end) => Some(calculate_hours(self.start, end, self.break_minutes)?),
            None => None,
        };
        Ok(())
    }

    /// Hours counted toward totals (open records count as zero).
    pub fn hours(&self) -> f64 {
        self.duration_hours.unwrap_or(0.0)
    }
}

/// Next identifier: `max(existing) + 1`, or 1 on an empty store.
pub fn next_id(records: &[SessionRecord]) -> u32 {
    records.iter().map(|r| r.id).max().map_or(1, |m| m + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn open_then_close() {
        let mut r = SessionRecord::open(1, d(), t(8, 0));
        assert!(r.is_open());
        assert_eq!(r.hours(), 0.0);

        let h = r.close(t(17, 30), 30).unwrap();
        assert_eq!(h, 9.0);
        assert!(!r.is_open());
        assert_eq!(r.duration_hours, Some(9.0));
        assert_eq!(r.break_minutes, 30);
    }

    #[test]
    fn recompute_clears_duration_for_open_record() {
        let mut r = SessionRecord::open(3, d(), t(8, 0));
        r.duration_hours = Some(4.0);
        r.recompute().unwrap();
        assert_eq!(r.duration_hours, None);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id(&[]), 1);
        let records = vec![
            SessionRecord::open(4, d(), t(8, 0)),
            SessionRecord::closed(2, d(), t(8, 0), t(9, 0), 0).unwrap(),
        ];
        assert_eq!(next_id(&records), 5);
    }
}
