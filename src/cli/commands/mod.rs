pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod drop;
pub mod export;
pub mod init;
pub mod list;
pub mod months;
pub mod pick;

use crate::config::Config;
use crate::store::CsvStore;

/// The store every command works on.
pub(crate) fn open_store(cfg: &Config) -> CsvStore {
    CsvStore::new(cfg.data_path())
}
