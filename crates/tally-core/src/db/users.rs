//! Account creation and credential verification

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::auth::hash_password;
use crate::error::{Error, Result};
use crate::models::User;

fn map_user_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
    let created_at_str: String = row.get(3)?;
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Create a user account, returning the new user id
    ///
    /// The password is stored as a SHA-256 digest, never as plaintext.
    pub fn create_user(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<i64> {
        if username.trim().is_empty() {
            return Err(Error::InvalidData("username must not be empty".into()));
        }

        let conn = self.conn()?;

        // Check for an existing account first so the caller gets a
        // domain error rather than a raw constraint violation
        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM users WHERE username = ?",
                params![username],
                |row| row.get(0),
            )
            .optional()?;

        if existing.is_some() {
            return Err(Error::UsernameTaken(username.to_string()));
        }

        conn.execute(
            "INSERT INTO users (username, password_hash, email) VALUES (?, ?, ?)",
            params![username, hash_password(password), email],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Verify credentials and return the matching user
    ///
    /// Compares password digests in the query itself, so a wrong username
    /// and a wrong password are indistinguishable to the caller.
    pub fn authenticate_user(&self, username: &str, password: &str) -> Result<User> {
        let conn = self.conn()?;

        let user = conn
            .query_row(
                "SELECT id, username, email, created_at FROM users
                 WHERE username = ? AND password_hash = ?",
                params![username, hash_password(password)],
                map_user_row,
            )
            .optional()?;

        user.ok_or(Error::InvalidCredentials)
    }

    /// Look up a user by id
    pub fn get_user(&self, user_id: i64) -> Result<User> {
        let conn = self.conn()?;

        let user = conn
            .query_row(
                "SELECT id, username, email, created_at FROM users WHERE id = ?",
                params![user_id],
                map_user_row,
            )
            .optional()?;

        user.ok_or_else(|| Error::NotFound(format!("user {}", user_id)))
    }
}
