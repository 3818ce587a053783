use super::RecordStore;
use crate::errors::AppResult;
use crate::models::record::SessionRecord;
use std::cell::RefCell;

/// Volatile store, handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<SessionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<SessionRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> AppResult<Vec<SessionRecord>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[SessionRecord]) -> AppResult<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
