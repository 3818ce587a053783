use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::YearMonth;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        format,
        out,
        force,
    } = cmd
    {
        let ym = match month {
            Some(m) => YearMonth::parse(m)?,
            None => YearMonth::current(),
        };

        let path = match out {
            Some(p) => expand_tilde(p),
            None => ExportLogic::default_path(&cfg.report_path(), ym, *format),
        };

        let store = open_store(cfg);
        ExportLogic::export(&store, ym, *format, &path, *force)?;
    }
    Ok(())
}
