//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track income and expenses, forecast next month's spending
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Self-hosted personal income and expense tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Create a user account
    Signup {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,

        /// Email address (optional)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Verify credentials and print the account details
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Record or list incomes
    Income {
        #[command(subcommand)]
        action: IncomeAction,
    },

    /// Record or list expenses
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },

    /// Show income/expense totals and the category breakdown
    Summary {
        /// User id
        #[arg(short, long)]
        user: i64,
    },

    /// Project next month's spending from expense history
    Forecast {
        /// User id
        #[arg(short, long)]
        user: i64,
    },
}

#[derive(Subcommand)]
pub enum IncomeAction {
    /// Add an income record
    Add {
        /// User id
        #[arg(short, long)]
        user: i64,

        #[arg(short, long)]
        amount: f64,

        /// Where the money came from (salary, gift, ...)
        #[arg(short, long)]
        source: Option<String>,

        /// Record date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List income records
    List {
        /// User id
        #[arg(short, long)]
        user: i64,
    },
}

#[derive(Subcommand)]
pub enum ExpenseAction {
    /// Add an expense record
    Add {
        /// User id
        #[arg(short, long)]
        user: i64,

        #[arg(short, long)]
        amount: f64,

        /// Category: food, transport, rent, utilities, entertainment,
        /// education, health, shopping, savings, other
        #[arg(short, long)]
        category: String,

        /// Free-text note (optional)
        #[arg(short, long)]
        note: Option<String>,

        /// Record date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expense records
    List {
        /// User id
        #[arg(short, long)]
        user: i64,
    },
}
