use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for duonotes
#[derive(Parser)]
#[command(
    name = "duonotes",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shared notes, bucket list, calendar and moods for two, with a 'what's new' feed",
    long_about = None
)]
pub struct Cli {
    /// Override the workbook directory (useful for tests or a second workbook)
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the workbook sheets
    Init {
        #[arg(long = "met-date", help = "Day you met (YYYY-MM-DD), shown as 'days together'")]
        met_date: Option<String>,

        #[arg(long = "timezone", help = "IANA timezone for all timestamps (e.g. Europe/Rome)")]
        timezone: Option<String>,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Show what's new since your last visit, plus the next event countdown
    Feed {
        #[arg(
            long = "since",
            value_name = "TIMESTAMP",
            help = "Last visit (YYYY-MM-DD HH:MM:SS); default: lookback window before now"
        )]
        since: Option<String>,

        #[arg(long = "as", value_name = "NAME", help = "Who is looking")]
        as_user: Option<String>,

        #[arg(
            long = "now",
            value_name = "TIMESTAMP",
            help = "Evaluate the feed as of this moment (YYYY-MM-DD HH:MM:SS)"
        )]
        now: Option<String>,

        #[arg(long = "all", help = "Show every new item instead of the latest per sheet")]
        all: bool,
    },

    /// Daily notes to each other
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// The shared bucket list
    Bucket {
        #[command(subcommand)]
        action: BucketAction,
    },

    /// The shared calendar
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Mood log
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },

    /// Delete a row from a sheet (notes, bucket, calendar, moods)
    Del {
        sheet: String,

        /// Row number as shown by the list commands
        row: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal log sheet
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },

    /// Export the feed (upcoming, past and new rows)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "TIMESTAMP")]
        since: Option<String>,

        #[arg(long, value_name = "TIMESTAMP")]
        now: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// Send a note
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        message: Option<String>,
    },
    /// List notes, newest first
    List,
}

#[derive(Subcommand)]
pub enum BucketAction {
    /// Add something new to the list
    Add {
        #[arg(long)]
        item: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },
    /// Show the bucket list
    List,
    /// Tick off an item
    Done { row: usize },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Plan an event
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        details: Option<String>,

        #[arg(long, help = "Packing list")]
        packing: Option<String>,
    },
    /// List upcoming events (or completed ones with --past)
    List {
        #[arg(long)]
        past: bool,

        #[arg(long, value_name = "TIMESTAMP")]
        now: Option<String>,
    },
    /// Mark an event as done
    Complete {
        row: usize,

        #[arg(long, help = "How it went")]
        note: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum MoodAction {
    /// Log how you feel
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        mood: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },
    /// List moods, newest first
    List,
}
