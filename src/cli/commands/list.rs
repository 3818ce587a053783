use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::monthly::summarize;
use crate::errors::AppResult;
use crate::models::record::SessionRecord;
use crate::store::{HEADERS, RecordStore};
use crate::ui::messages::{header, info};
use crate::utils::date::YearMonth;
use crate::utils::table::{Column, Table};
use crate::utils::time::{display_time, format_hours};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, open } = cmd {
        let store = open_store(cfg);
        let records = store.load()?;

        if *open {
            let open_records: Vec<SessionRecord> =
                records.into_iter().filter(|r| r.is_open()).collect();
            if open_records.is_empty() {
                info("No open session.");
            } else {
                header("Open sessions");
                print!("{}", render(&open_records));
            }
            return Ok(());
        }

        let ym = match month {
            Some(m) => YearMonth::parse(m)?,
            None => YearMonth::current(),
        };

        let summary = summarize(&records, ym);
        if summary.records.is_empty() {
            info(format!("No sessions for {}.", ym));
            return Ok(());
        }

        header(format!("Month: {}", ym));
        print!("{}", render(&summary.records));
        println!(
            "\nTotal: {} h over {} session(s)",
            format_hours(summary.total_hours),
            summary.records.len()
        );
        if summary.open_count() > 0 {
            info(format!("{} session(s) still open.", summary.open_count()));
        }
    }

    Ok(())
}

fn render(records: &[SessionRecord]) -> String {
    let mut table = Table::new(HEADERS.iter().map(|h| Column::new(h)).collect());
    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.date.format("%Y-%m-%d").to_string(),
            display_time(&r.start),
            r.end.as_ref().map(display_time).unwrap_or_else(|| "--:--".into()),
            r.break_minutes.to_string(),
            r.duration_hours.map(format_hours).unwrap_or_default(),
        ]);
    }
    table.render('-')
}
