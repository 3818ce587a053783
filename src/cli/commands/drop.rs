use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dropoff::DropOffLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::{display_time, now_minute, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Drop { date: day, at } = cmd {
        let d = match day {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let start = parse_optional_time(at.as_ref())?.unwrap_or_else(now_minute);

        let store = open_store(cfg);
        let record = DropOffLogic::apply(&store, d, start)?;

        success(format!(
            "Drop-off #{} recorded on {} at {}.",
            record.id,
            d,
            display_time(&start)
        ));
    }

    Ok(())
}
