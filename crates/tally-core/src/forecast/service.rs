//! Next-month expense projection

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregate::monthly_buckets;
use super::trend::TrendModel;
use crate::error::Result;
use crate::models::Expense;

/// Source of expense records for forecasting
///
/// Implemented by [`crate::Database`]; tests substitute an in-memory store.
pub trait ExpenseStore {
    /// All expense records for one user, in any order
    fn list_expenses(&self, user_id: i64) -> Result<Vec<Expense>>;
}

/// Outcome of a forecast request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForecastResult {
    /// Projected total for the month after the last observed one
    Predicted { amount: f64 },
    /// No expense history to project from
    InsufficientData,
}

/// Project next month's total spend for a user
///
/// Aggregates the user's expenses into monthly buckets, fits a quadratic
/// trend over (period index, total), and evaluates it one period past the
/// last observed month. A user with no expense records at all gets
/// [`ForecastResult::InsufficientData`]; a single month of history still
/// produces a (degenerate) projection. The projection is unclamped and may
/// be negative for a steeply declining series.
///
/// Read-only and stateless: nothing is cached between calls, and store
/// failures propagate unmodified.
pub fn forecast(store: &impl ExpenseStore, user_id: i64) -> Result<ForecastResult> {
    let expenses = store.list_expenses(user_id)?;
    if expenses.is_empty() {
        return Ok(ForecastResult::InsufficientData);
    }

    let buckets = monthly_buckets(&expenses);
    let points: Vec<(f64, f64)> = buckets
        .iter()
        .map(|b| (b.period_index as f64, b.total_amount))
        .collect();

    let model = match TrendModel::fit(&points) {
        Some(model) => model,
        None => return Ok(ForecastResult::InsufficientData),
    };

    let amount = model.predict(points.len() as f64);
    debug!(user_id, months = buckets.len(), amount, "computed expense forecast");

    Ok(ForecastResult::Predicted { amount })
}
