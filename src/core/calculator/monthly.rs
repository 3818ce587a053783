use crate::models::month_summary::MonthSummary;
use crate::models::record::SessionRecord;
use crate::utils::date::YearMonth;
use crate::utils::time::round2;
use std::collections::BTreeSet;

/// Records of `month`, sorted by date then start time.
pub fn records_in_month(records: &[SessionRecord], month: YearMonth) -> Vec<SessionRecord> {
    let mut out: Vec<SessionRecord> = records
        .iter()
        .filter(|r| month.contains(&r.date))
        .cloned()
        .collect();
    out.sort_by_key(|r| (r.date, r.start));
    out
}

/// Sum of `duration_hours`, rounded to two decimals. Open records count as zero.
pub fn total_hours(records: &[SessionRecord]) -> f64 {
    round2(records.iter().map(SessionRecord::hours).sum())
}

pub fn summarize(records: &[SessionRecord], month: YearMonth) -> MonthSummary {
    let records = records_in_month(records, month);
    let total_hours = total_hours(&records);
    MonthSummary {
        month,
        records,
        total_hours,
    }
}

/// Months that hold at least one record, newest first.
pub fn available_months(records: &[SessionRecord]) -> Vec<YearMonth> {
    let set: BTreeSet<YearMonth> = records.iter().map(|r| YearMonth::of(&r.date)).collect();
    set.into_iter().rev().collect()
}
