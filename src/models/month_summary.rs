use super::record::SessionRecord;
use crate::utils::date::YearMonth;

#[derive(Debug, Clone)]
pub struct MonthSummary {
    pub month: YearMonth,
    pub records: Vec<SessionRecord>, // sorted by date, then start
    pub total_hours: f64,            // rounded to 2 decimals
}

impl MonthSummary {
    pub fn open_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_open()).count()
    }
}
