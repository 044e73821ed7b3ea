//! Tally CLI - Personal income and expense tracker
//!
//! Usage:
//!   tally init                                Initialize database
//!   tally signup -u alice -p secret           Create an account
//!   tally expense add -u 1 -a 42.50 -c food   Record an expense
//!   tally forecast -u 1                       Project next month's spending

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
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
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Signup {
            username,
            password,
            email,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_signup(&db, &username, &password, email.as_deref())
        }
        Commands::Login { username, password } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_login(&db, &username, &password)
        }
        Commands::Income { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                IncomeAction::Add {
                    user,
                    amount,
                    source,
                    date,
                } => commands::cmd_income_add(&db, user, amount, source.as_deref(), date.as_deref()),
                IncomeAction::List { user } => commands::cmd_income_list(&db, user),
            }
        }
        Commands::Expense { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                ExpenseAction::Add {
                    user,
                    amount,
                    category,
                    note,
                    date,
                } => commands::cmd_expense_add(
                    &db,
                    user,
                    amount,
                    &category,
                    note.as_deref(),
                    date.as_deref(),
                ),
                ExpenseAction::List { user } => commands::cmd_expense_list(&db, user),
            }
        }
        Commands::Summary { user } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_summary(&db, user)
        }
        Commands::Forecast { user } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_forecast(&db, user)
        }
    }
}
