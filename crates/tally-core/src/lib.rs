//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance tracker:
//! - Database access and migrations
//! - User accounts with hashed credentials
//! - Income and expense record entry
//! - Income/expense summary reports
//! - Next-month expense forecasting

pub mod auth;
pub mod db;
pub mod error;
pub mod forecast;
pub mod models;

pub use db::Database;
pub use error::{Error, Result};
pub use forecast::{forecast, monthly_buckets, ExpenseStore, ForecastResult, PeriodBucket, TrendModel};
