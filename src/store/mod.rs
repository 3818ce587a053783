//! Record persistence.
//!
//! Every mutation reads the whole collection, changes it in memory and
//! writes the whole collection back. There is no locking: two processes
//! working on the same file overwrite each other and the last writer wins.
//! The tool is meant for a single user at a time.

mod csv_store;
mod memory;

pub use csv_store::{CsvStore, HEADERS};
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::record::SessionRecord;

pub trait RecordStore {
    /// All records, in stored order. A store that does not exist yet is empty.
    fn load(&self) -> AppResult<Vec<SessionRecord>>;

    /// Replace the stored collection with `records`.
    fn save(&self, records: &[SessionRecord]) -> AppResult<()>;
}
