//! Expense record operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::forecast::ExpenseStore;
use crate::models::{Category, Expense, NewExpense};

fn map_expense_row(row: &rusqlite::Row) -> rusqlite::Result<Expense> {
    let category_str: String = row.get(3)?;
    let date_str: String = row.get(5)?;
    let created_at_str: String = row.get(6)?;
    Ok(Expense {
        id: row.get(0)?,
        user_id: row.get(1)?,
        amount: row.get(2)?,
        category: category_str.parse().unwrap_or(Category::Other),
        note: row.get(4)?,
        date: chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Insert an expense record, returning the new record id
    pub fn insert_expense(&self, user_id: i64, expense: &NewExpense) -> Result<i64> {
        if expense.amount < 0.0 {
            return Err(Error::InvalidData(
                "expense amount must be non-negative".into(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO expenses (user_id, amount, category, note, date) VALUES (?, ?, ?, ?, ?)",
            params![
                user_id,
                expense.amount,
                expense.category.as_str(),
                expense.note,
                expense.date.to_string()
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List a user's expense records, oldest first
    pub fn list_expenses(&self, user_id: i64) -> Result<Vec<Expense>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, user_id, amount, category, note, date, created_at
             FROM expenses WHERE user_id = ? ORDER BY date, id",
        )?;
        let rows = stmt.query_map(params![user_id], map_expense_row)?;

        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Sum of all expense amounts for a user
    pub fn total_expense(&self, user_id: i64) -> Result<f64> {
        let conn = self.conn()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM expenses WHERE user_id = ?",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(total)
    }
}

impl ExpenseStore for Database {
    fn list_expenses(&self, user_id: i64) -> Result<Vec<Expense>> {
        Database::list_expenses(self, user_id)
    }
}
