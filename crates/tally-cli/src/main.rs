//! Tally CLI - Household budget tracker
//!
//! Usage:
//!   tally expenses add 12.50 groceries
//!   tally income add 2500 salary --date 2025-08-01
//!   tally budget set 1500
//!   tally report summary --period last-month
//!   tally serve --port 5678

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tally_core::RecordKind;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Expenses { action } => {
            let store = commands::open_store(&cli.data)?;
            run_record_action(&store, RecordKind::Expense, action)
        }
        Commands::Income { action } => {
            let store = commands::open_store(&cli.data)?;
            run_record_action(&store, RecordKind::Income, action)
        }
        Commands::Budget { action } => {
            let store = commands::open_store(&cli.data)?;
            match action {
                None | Some(BudgetAction::Show) => commands::cmd_budget_show(&store),
                Some(BudgetAction::Set { amount }) => commands::cmd_budget_set(&store, amount),
            }
        }
        Commands::Categories { action } => {
            let store = commands::open_store(&cli.data)?;
            match action {
                CategoryAction::List => commands::cmd_categories_list(&store),
                CategoryAction::Add { kind, name } => {
                    let kind: RecordKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                    commands::cmd_categories_add(&store, kind, &name)
                }
                CategoryAction::Remove { kind, name } => {
                    let kind: RecordKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                    commands::cmd_categories_remove(&store, kind, &name)
                }
            }
        }
        Commands::Report { action } => {
            let store = commands::open_store(&cli.data)?;
            match action {
                ReportAction::Summary { period, from, to } => {
                    commands::cmd_report_summary(&store, &period, from.as_deref(), to.as_deref())
                }
                ReportAction::Trend { months, from, to } => {
                    commands::cmd_report_trend(&store, months, from.as_deref(), to.as_deref())
                }
                ReportAction::Top {
                    kind,
                    period,
                    from,
                    to,
                    limit,
                } => {
                    let kind: RecordKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                    commands::cmd_report_top(
                        &store,
                        kind,
                        &period,
                        from.as_deref(),
                        to.as_deref(),
                        limit,
                    )
                }
            }
        }
        Commands::Data { action } => {
            let store = commands::open_store(&cli.data)?;
            match action {
                DataAction::Export { output } => {
                    commands::cmd_data_export(&store, output.as_deref())
                }
                DataAction::Import { file } => commands::cmd_data_import(&store, &file),
                DataAction::Clear { yes } => commands::cmd_data_clear(&store, yes),
            }
        }
        Commands::Serve {
            port,
            host,
            static_dir,
            allow_origins,
        } => commands::cmd_serve(&cli.data, &host, port, static_dir.as_deref(), allow_origins).await,
    }
}

fn run_record_action(
    store: &tally_core::Store,
    kind: RecordKind,
    action: RecordAction,
) -> Result<()> {
    match action {
        RecordAction::Add {
            amount,
            category,
            description,
            date,
        } => commands::cmd_records_add(
            store,
            kind,
            amount,
            &category,
            description.as_deref(),
            date.as_deref(),
        ),
        RecordAction::List {
            search,
            category,
            from,
            to,
            limit,
        } => commands::cmd_records_list(
            store,
            kind,
            search.as_deref(),
            category.as_deref(),
            from.as_deref(),
            to.as_deref(),
            limit,
        ),
        RecordAction::Delete { id } => commands::cmd_records_delete(store, kind, id),
    }
}
