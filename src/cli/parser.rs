use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for pawlogger
/// CLI application to track puppy potty training with SQLite
#[derive(Parser)]
#[command(
    name = "pawlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple potty-training CLI: log puppy potty events, reminders, and progress using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom stores)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update, no simulated delays)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Fixed clock for tests ("YYYY-MM-DD HH:MM", local time)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the local store and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Log a potty event
    Add {
        /// Event kind: pee or poop
        kind: String,

        /// Event date (YYYY-MM-DD, default: today)
        #[arg(long = "date", help = "Event date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        /// Event time (HH:MM, default: now)
        #[arg(long = "at", help = "Event time (HH:MM, default: now)")]
        at: Option<String>,

        /// Where it happened (default: Outside, or Inside for accidents)
        #[arg(long = "location", help = "Where it happened")]
        location: Option<String>,

        /// Mark the event as a training accident
        #[arg(long = "accident", help = "Mark the event as a training accident")]
        accident: bool,

        /// Free-text notes
        #[arg(long = "notes", help = "Free-text notes")]
        notes: Option<String>,
    },

    /// Edit a logged event (only the given fields change)
    Edit {
        /// Id of the event to edit
        id: i64,

        #[arg(long = "kind", help = "New kind: pee or poop")]
        kind: Option<String>,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "at", help = "New time (HH:MM)")]
        at: Option<String>,

        #[arg(long = "location", help = "New location")]
        location: Option<String>,

        /// Mark as accident
        #[arg(long = "accident", help = "Mark as accident")]
        accident: bool,

        /// Mark as success
        #[arg(
            long = "no-accident",
            conflicts_with = "accident",
            help = "Mark as success"
        )]
        no_accident: bool,

        #[arg(long = "notes", help = "Replace notes")]
        notes: Option<String>,
    },

    /// Delete a logged event by id
    Del {
        /// Id of the event to delete
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List logged events, newest first, grouped by day
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end)"
        )]
        period: Option<String>,

        #[arg(long = "kind", help = "Filter by kind: pee or poop")]
        kind: Option<String>,

        #[arg(long = "accidents", help = "Show only accidents")]
        accidents: bool,
    },

    /// Show progress statistics
    Stats,

    /// Show and manage potty reminders
    Remind {
        #[arg(long = "add", value_name = "HH:MM", help = "Add a daily reminder time")]
        add: Option<String>,

        #[arg(
            long = "remove",
            value_name = "HH:MM",
            help = "Remove a daily reminder time"
        )]
        remove: Option<String>,

        #[arg(
            long = "interval",
            value_name = "MINUTES",
            help = "Set the regular reminder interval in minutes"
        )]
        interval: Option<u32>,

        #[arg(
            long = "post-meal",
            value_name = "on|off",
            help = "Toggle the after-meal reminder"
        )]
        post_meal: Option<String>,

        #[arg(
            long = "post-nap",
            value_name = "on|off",
            help = "Toggle the after-nap reminder"
        )]
        post_nap: Option<String>,

        #[arg(long = "watch", help = "Keep watching, re-checking once per minute")]
        watch: bool,
    },

    /// Manage the Pro subscription (mocked, no real payment)
    Account {
        #[arg(long = "status", help = "Show the current subscription status")]
        status: bool,

        #[arg(long = "upgrade", help = "Subscribe to Pro (simulated checkout)")]
        upgrade: bool,

        #[arg(long = "cancel", help = "Cancel at the end of the current period")]
        cancel: bool,

        #[arg(long = "reactivate", help = "Undo a pending cancellation")]
        reactivate: bool,
    },

    /// Manage the local store
    Store {
        #[arg(long = "info", help = "Show store information")]
        info: bool,

        #[arg(long = "vacuum", help = "Optimize the store using VACUUM")]
        vacuum: bool,
    },

    /// Export the event history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Create a backup copy of the local store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
