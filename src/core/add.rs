use crate::errors::AppResult;
use crate::models::record::{SessionRecord, next_id};
use crate::store::RecordStore;
use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

/// High-level business logic for the `add` command: a full day in one go.
pub struct AddLogic;

impl AddLogic {
    pub fn apply<S: RecordStore + ?Sized>(
        store: &S,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        break_minutes: u32,
    ) -> AppResult<SessionRecord> {
        let mut records = store.load()?;

        let record = SessionRecord::closed(next_id(&records), date, start, end, break_minutes)?;
        debug!(id = record.id, %date, hours = ?record.duration_hours, "adding full day");

        records.push(record.clone());
        store.save(&records)?;

        Ok(record)
    }
}
