use crate::config::Config;
use crate::errors::AppResult;
use crate::store::CsvStore;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (kept if already present)
///  - the CSV data file with its header row (kept if already present)
pub fn handle(cfg: &Config, conf_path: &Path) -> AppResult<()> {
    info("Initializing nannylog…");

    if conf_path.exists() {
        info(format!("Config file  : {} (kept)", conf_path.display()));
    } else {
        cfg.save_to(conf_path)?;
        success(format!("Config file  : {}", conf_path.display()));
    }

    let store = CsvStore::new(cfg.data_path());
    if store.init()? {
        success(format!("Data file    : {}", store.path().display()));
    } else {
        info(format!("Data file    : {} (kept)", store.path().display()));
    }

    success("nannylog initialization completed!");
    Ok(())
}
