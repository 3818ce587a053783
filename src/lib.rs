//! nannylog library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (duration calculator, record store, exports).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, conf_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg, conf_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, conf_path),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Drop { .. } => cli::commands::drop::handle(&cli.command, cfg),
        Commands::Pick { .. } => cli::commands::pick::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Months => cli::commands::months::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Installs the stderr diagnostics subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "nannylog=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load config once
    let conf_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&conf_path)?;

    // 3️⃣ command-line override of the data file
    if let Some(custom) = &cli.file {
        cfg.data_file = custom.clone();
    }

    tracing::debug!(config = %conf_path.display(), data = %cfg.data_file, "configuration loaded");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &conf_path)
}
