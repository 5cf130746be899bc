//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track household spending against a monthly budget
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Self-hosted household budget tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data file path
    #[arg(long, default_value = "tally.json", global = true)]
    pub data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage expense records
    Expenses {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage income records
    Income {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Show or set the monthly budget
    Budget {
        #[command(subcommand)]
        action: Option<BudgetAction>,
    },

    /// Manage category names
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Aggregated reports over the ledgers
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Export, import, or clear the dataset
    Data {
        #[command(subcommand)]
        action: DataAction,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5678")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory with static web files to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Allowed CORS origin (repeat for multiple)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum RecordAction {
    /// Add a record
    Add {
        /// Amount (non-negative)
        amount: f64,

        /// Category name
        category: String,

        /// Free-text note
        #[arg(short, long)]
        description: Option<String>,

        /// Record date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List records, newest first
    List {
        /// Case-insensitive search over category and description
        #[arg(long)]
        search: Option<String>,

        /// Only records in this category
        #[arg(long)]
        category: Option<String>,

        /// Start date (YYYY-MM-DD, requires --to)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD, requires --from)
        #[arg(long)]
        to: Option<String>,

        /// Maximum rows to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Delete a record by id
    Delete {
        /// Record id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum BudgetAction {
    /// Show the budget and this month's spending against it
    Show,

    /// Set the monthly budget
    Set {
        /// Monthly budget amount (non-negative)
        amount: f64,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List categories for both ledgers
    List,

    /// Add a category
    Add {
        /// Ledger kind: expense or income
        kind: String,

        /// Category name
        name: String,
    },

    /// Remove a category
    Remove {
        /// Ledger kind: expense or income
        kind: String,

        /// Category name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ReportAction {
    /// Headline totals for a period
    Summary {
        /// Period preset: this-month, last-month, this-year, last-year,
        /// last-30-days, last-90-days, last-12-months, all
        #[arg(long, default_value = "this-month")]
        period: String,

        /// Custom start date (YYYY-MM-DD, requires --to)
        #[arg(long)]
        from: Option<String>,

        /// Custom end date (YYYY-MM-DD, requires --from)
        #[arg(long)]
        to: Option<String>,
    },

    /// Month-by-month expense and income totals
    Trend {
        /// Number of trailing months
        #[arg(short, long, default_value = "6")]
        months: u32,

        /// Custom start date (YYYY-MM-DD, requires --to)
        #[arg(long)]
        from: Option<String>,

        /// Custom end date (YYYY-MM-DD, requires --from)
        #[arg(long)]
        to: Option<String>,
    },

    /// Top categories by spend for a period
    Top {
        /// Ledger kind: expense or income
        #[arg(short, long, default_value = "expense")]
        kind: String,

        /// Period preset (same presets as summary)
        #[arg(long, default_value = "this-month")]
        period: String,

        /// Custom start date (YYYY-MM-DD, requires --to)
        #[arg(long)]
        from: Option<String>,

        /// Custom end date (YYYY-MM-DD, requires --from)
        #[arg(long)]
        to: Option<String>,

        /// Number of categories to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

#[derive(Subcommand)]
pub enum DataAction {
    /// Export the full dataset as JSON
    Export {
        /// Output file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a JSON dataset over the current one
    Import {
        /// JSON file to import
        file: PathBuf,
    },

    /// Delete all records and restore default categories
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
