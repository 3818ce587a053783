use crate::errors::{AppError, AppResult};
use crate::models::record::SessionRecord;
use crate::store::RecordStore;
use tracing::debug;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the record with `id`, returning it.
    pub fn apply<S: RecordStore + ?Sized>(store: &S, id: u32) -> AppResult<SessionRecord> {
        let mut records = store.load()?;

        let idx = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(AppError::RecordNotFound(id))?;

        let removed = records.remove(idx);
        store.save(&records)?;

        debug!(id, date = %removed.date, "record deleted");
        Ok(removed)
    }

    pub fn find<S: RecordStore + ?Sized>(store: &S, id: u32) -> AppResult<SessionRecord> {
        store
            .load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(AppError::RecordNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{NaiveDate, NaiveTime};

    fn sample() -> MemoryStore {
        let d = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        MemoryStore::with_records(vec![
            SessionRecord::closed(1, d, t(8), t(12), 0).unwrap(),
            SessionRecord::closed(2, d, t(13), t(17), 0).unwrap(),
        ])
    }

    #[test]
    fn deletes_by_id_and_keeps_other_ids() {
        let store = sample();
        let removed = DeleteLogic::apply(&store, 1).unwrap();
        assert_eq!(removed.id, 1);

        let left = store.load().unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, 2);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let store = sample();
        assert!(matches!(
            DeleteLogic::apply(&store, 42),
            Err(AppError::RecordNotFound(42))
        ));
        assert_eq!(store.load().unwrap().len(), 2);
    }
}
