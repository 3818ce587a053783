use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for nannylog
/// CLI application to track childcare sessions in a CSV file
#[derive(Parser)]
#[command(
    name = "nannylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track childcare drop-off/pick-up times, breaks and monthly totals",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a second child)
    #[arg(global = true, long = "file", value_name = "CSV")]
    pub file: Option<String>,

    /// Use an alternative configuration file
    #[arg(global = true, long = "config", value_name = "CONF")]
    pub config: Option<String>,

    /// Print diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Add a full day (drop-off and pick-up known)
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", value_name = "HH:MM", help = "Drop-off time")]
        start: String,

        #[arg(long = "out", value_name = "HH:MM", help = "Pick-up time")]
        end: String,

        #[arg(
            long = "break",
            value_name = "MIN",
            help = "Break in minutes, excluded from the duration"
        )]
        break_minutes: Option<u32>,
    },

    /// Drop-off now (or at the given time): opens a session
    Drop {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Date (default: today)")]
        date: Option<String>,

        #[arg(long = "at", value_name = "HH:MM", help = "Time (default: now)")]
        at: Option<String>,
    },

    /// Pick-up now (or at the given time): closes the open session
    Pick {
        #[arg(long = "at", value_name = "HH:MM", help = "Time (default: now)")]
        at: Option<String>,

        #[arg(long = "break", value_name = "MIN", help = "Break in minutes")]
        break_minutes: Option<u32>,
    },

    /// Delete a session by ID
    Del {
        id: u32,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List sessions of a month with the monthly total
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month (default: current)")]
        month: Option<String>,

        #[arg(long = "open", help = "Show only open sessions, all months")]
        open: bool,
    },

    /// List months holding sessions, newest first, with totals
    Months,

    /// Export a month as PDF report, CSV or JSON
    Export {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month (default: current)")]
        month: Option<String>,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(
            long = "out",
            value_name = "PATH",
            help = "Output file (default: <report_dir>/synthese_YYYY-MM.<ext>)"
        )]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// Create a backup copy of the data file
    Backup {
        #[arg(long = "to", value_name = "PATH")]
        to: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },
}
