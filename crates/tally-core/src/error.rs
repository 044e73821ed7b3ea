//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Invalid username or password")]
    InvalidCredentials,
}

pub type Result<T> = std::result::Result<T, Error>;
