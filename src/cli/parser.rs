use crate::export::ExportFormat;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for rTimegrid
#[derive(Parser)]
#[command(
    name = "rtimegrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekly staff timetable: attendance, leave and holidays as a colored week grid",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.rtimegrid/rtimegrid.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output (-q errors only, -qq nothing)
    #[arg(global = true, short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Dataset and month selection shared by every grid command.
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Dataset file (.json, .yaml or .yml)
    #[arg(long, short = 'd', value_name = "FILE")]
    pub data: String,

    /// Month to lay out (YYYY-MM); defaults to the current month
    #[arg(long, short = 'm', value_name = "YYYY-MM")]
    pub month: Option<String>,

    /// Only this week of the month (1-based, clamped to the month)
    #[arg(long, value_name = "N")]
    pub week: Option<i64>,

    /// First weekday of the week: 1=Sunday ... 7=Saturday
    #[arg(long = "week-start", value_name = "DAY")]
    pub week_start: Option<i64>,

    /// Leave out zero-time holiday/leave records
    #[arg(long = "no-markers")]
    pub no_markers: bool,

    /// Show calendar holidays on days without records
    #[arg(long = "calendar-holidays")]
    pub calendar_holidays: bool,

    /// Hide staff rows without data
    #[arg(long = "hide-empty")]
    pub hide_empty: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file (and optionally a sample dataset)
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,

        #[arg(long = "sample", value_name = "FILE", help = "Also write a demo dataset")]
        sample: Option<String>,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "edit", help = "Edit the configuration file (default editor: $EDITOR)")]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano or a custom path)")]
        editor: Option<String>,
    },

    /// Print the week grid for a month
    Show {
        #[command(flatten)]
        grid: GridArgs,
    },

    /// Report skipped and unusual records
    Check {
        #[command(flatten)]
        grid: GridArgs,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Totals and breakdowns for the month
    Report {
        #[command(flatten)]
        grid: GridArgs,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Export the week grid
    Export {
        #[command(flatten)]
        grid: GridArgs,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: derived name in --dir)")]
        file: Option<String>,

        #[arg(long, value_name = "DIR", help = "Output directory (default: export_dir from config)")]
        dir: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
