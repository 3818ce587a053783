use crate::errors::{AppError, AppResult};
use crate::models::record::SessionRecord;
use crate::store::RecordStore;
use chrono::NaiveTime;
use tracing::{debug, warn};

/// Quick pick-up: closes the open session and derives its duration.
pub struct PickUpLogic;

impl PickUpLogic {
    pub fn apply<S: RecordStore + ?Sized>(
        store: &S,
        end: NaiveTime,
        break_minutes: u32,
    ) -> AppResult<SessionRecord> {
        let mut records = store.load()?;

        let open: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_open())
            .map(|(i, _)| i)
            .collect();

        if open.len() > 1 {
            let ids: Vec<u32> = open.iter().map(|&i| records[i].id).collect();
            warn!(?ids, "several open sessions found, closing the most recent");
        }

        let idx = open
            .into_iter()
            .max_by_key(|&i| (records[i].date, records[i].start))
            .ok_or(AppError::NoOpenRecord)?;

        let record = &mut records[idx];
        let hours = record.close(end, break_minutes)?;
        debug!(id = record.id, %end, hours, "session closed");
        let closed = record.clone();

        store.save(&records)?;
        Ok(closed)
    }
}
