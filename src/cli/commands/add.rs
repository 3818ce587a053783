use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::{display_time, format_hours, parse_required_time};

/// Add a full day entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        break_minutes,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start = parse_required_time(start)?;
        let end = parse_required_time(end)?;
        let pause = break_minutes.unwrap_or(cfg.default_break);

        let store = open_store(cfg);
        let record = AddLogic::apply(&store, d, start, end, pause)?;

        success(format!(
            "Added #{} on {}: {} → {} (break {} min) = {} h",
            record.id,
            d,
            display_time(&start),
            display_time(&end),
            pause,
            format_hours(record.hours())
        ));
    }

    Ok(())
}
