use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pickup::PickUpLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time::{display_time, format_hours, now_minute, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pick { at, break_minutes } = cmd {
        let end = parse_optional_time(at.as_ref())?.unwrap_or_else(now_minute);
        let pause = break_minutes.unwrap_or(cfg.default_break);

        let store = open_store(cfg);
        match PickUpLogic::apply(&store, end, pause) {
            Ok(record) => success(format!(
                "Pick-up #{} recorded: {} → {} (break {} min) = {} h",
                record.id,
                display_time(&record.start),
                display_time(&end),
                pause,
                format_hours(record.hours())
            )),
            Err(AppError::NoOpenRecord) => {
                warning("No open session: nothing to pick up. Use `drop` first.");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
