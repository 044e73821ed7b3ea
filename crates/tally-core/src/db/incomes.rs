//! Income record operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Income, NewIncome};

fn map_income_row(row: &rusqlite::Row) -> rusqlite::Result<Income> {
    let date_str: String = row.get(4)?;
    let created_at_str: String = row.get(5)?;
    Ok(Income {
        id: row.get(0)?,
        user_id: row.get(1)?,
        amount: row.get(2)?,
        source: row.get(3)?,
        date: chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Insert an income record, returning the new record id
    pub fn insert_income(&self, user_id: i64, income: &NewIncome) -> Result<i64> {
        if income.amount < 0.0 {
            return Err(Error::InvalidData(
                "income amount must be non-negative".into(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO incomes (user_id, amount, source, date) VALUES (?, ?, ?, ?)",
            params![
                user_id,
                income.amount,
                income.source,
                income.date.to_string()
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List a user's income records, oldest first
    pub fn list_incomes(&self, user_id: i64) -> Result<Vec<Income>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, user_id, amount, source, date, created_at
             FROM incomes WHERE user_id = ? ORDER BY date, id",
        )?;
        let rows = stmt.query_map(params![user_id], map_income_row)?;

        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Sum of all income amounts for a user
    pub fn total_income(&self, user_id: i64) -> Result<f64> {
        let conn = self.conn()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM incomes WHERE user_id = ?",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(total)
    }
}
