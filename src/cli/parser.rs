use clap::{Parser, Subcommand};

/// Command-line interface definition for QuickCal
#[derive(Parser)]
#[command(
    name = "quickcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shows your next calendar event for today, status-bar style",
    long_about = None
)]
pub struct Cli {
    /// Override the calendar store path
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Evaluate as if the local time were "YYYY-MM-DD HH:MM"
    #[arg(global = true, long = "at", value_name = "DATETIME")]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty calendar store
    Init,

    /// Show the status label for right now
    Status {
        #[arg(long = "json", help = "Print the label and menu entries as JSON")]
        json: bool,
    },

    /// Show the label and the dropdown menu
    Menu,

    /// Keep the label up to date, refreshing periodically
    Watch {
        #[arg(
            long = "interval",
            value_name = "SECS",
            help = "Seconds between refreshes (default: refresh_interval_secs from config)"
        )]
        interval: Option<u64>,

        #[arg(
            long = "ticks",
            value_name = "N",
            help = "Stop after N refreshes, the initial one included"
        )]
        ticks: Option<u64>,
    },

    /// List the calendars available in the store
    Calendars,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
