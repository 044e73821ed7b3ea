//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `parse_date` - Shared --date flag handling
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use tally_core::db::Database;

/// Open the database, running migrations if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path.to_str().unwrap();
    tracing::debug!("Opening database at {}", path_str);
    Database::new(path_str).context("Failed to open database")
}

/// Parse an optional --date flag, defaulting to today
pub fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --date format (use YYYY-MM-DD)"),
        None => Ok(Utc::now().date_naive()),
    }
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Create an account: tally signup -u alice -p <password>");
    println!("  2. Record an expense: tally expense add -u 1 -a 42.50 -c food");

    Ok(())
}
