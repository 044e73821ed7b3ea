//! Income/expense totals and category breakdown

use rusqlite::params;

use super::Database;
use crate::error::Result;
use crate::models::{Category, CategoryTotal, SummaryReport};

impl Database {
    /// Totals, balance, and per-category expense breakdown for one user
    pub fn get_summary(&self, user_id: i64) -> Result<SummaryReport> {
        let total_income = self.total_income(user_id)?;
        let total_expense = self.total_expense(user_id)?;

        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT category, COALESCE(SUM(amount), 0), COUNT(*)
             FROM expenses WHERE user_id = ?
             GROUP BY category
             ORDER BY SUM(amount) DESC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            let category_str: String = row.get(0)?;
            Ok(CategoryTotal {
                category: category_str.parse().unwrap_or(Category::Other),
                total: row.get(1)?,
                record_count: row.get(2)?,
            })
        })?;
        let by_category = rows.collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(SummaryReport {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            by_category,
        })
    }
}
