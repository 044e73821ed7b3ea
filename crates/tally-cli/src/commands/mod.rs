//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_db) and the init command
//! - `users` - Account commands (signup, login)
//! - `entries` - Record entry commands (income/expense add and list)
//! - `reports` - Summary and forecast commands

pub mod core;
pub mod entries;
pub mod reports;
pub mod users;

// Re-export command functions for main.rs
pub use core::*;
pub use entries::*;
pub use reports::*;
pub use users::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
