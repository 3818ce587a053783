use crate::errors::{AppError, AppResult};
use crate::models::record::{SessionRecord, next_id};
use crate::store::RecordStore;
use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

/// Quick drop-off: opens a session. Only one session may be open at a time.
pub struct DropOffLogic;

impl DropOffLogic {
    pub fn apply<S: RecordStore + ?Sized>(
        store: &S,
        date: NaiveDate,
        start: NaiveTime,
    ) -> AppResult<SessionRecord> {
        let mut records = store.load()?;

        if let Some(open) = records.iter().find(|r| r.is_open()) {
            return Err(AppError::OpenRecordExists(open.id));
        }

        let record = SessionRecord::open(next_id(&records), date, start);
        debug!(id = record.id, %date, %start, "session opened");

        records.push(record.clone());
        store.save(&records)?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn opens_a_session() {
        let store = MemoryStore::new();
        let d = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        let t = NaiveTime::from_hms_opt(7, 50, 0).unwrap();

        let r = DropOffLogic::apply(&store, d, t).unwrap();
        assert!(r.is_open());
        assert_eq!(r.duration_hours, None);
        assert_eq!(store.load().unwrap(), vec![r]);
    }

    #[test]
    fn refuses_second_open_session() {
        let store = MemoryStore::new();
        let d = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        let t = NaiveTime::from_hms_opt(7, 50, 0).unwrap();

        DropOffLogic::apply(&store, d, t).unwrap();
        let err = DropOffLogic::apply(&store, d, t).unwrap_err();
        assert!(matches!(err, AppError::OpenRecordExists(1)));
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
