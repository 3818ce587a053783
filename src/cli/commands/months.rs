use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::monthly::{available_months, summarize};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Months = cmd {
        let records = open_store(cfg).load()?;
        let months = available_months(&records);

        if months.is_empty() {
            info("No data yet. Start with `add` or `drop`.");
            return Ok(());
        }

        header("Months");
        let mut table = Table::new(vec![
            Column::new("Mois"),
            Column::new("Créneaux"),
            Column::new("Total (h)"),
        ]);
        for ym in months {
            let s = summarize(&records, ym);
            table.add_row(vec![
                ym.to_string(),
                s.records.len().to_string(),
                format_hours(s.total_hours),
            ]);
        }
        print!("{}", table.render('-'));
    }

    Ok(())
}
