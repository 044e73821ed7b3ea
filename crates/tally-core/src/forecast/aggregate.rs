//! Monthly aggregation of expense records

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::models::Expense;

/// Total spend for one calendar month of expense activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodBucket {
    /// Sequential index over the distinct months present, oldest first
    pub period_index: usize,
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Sum of expense amounts in this month
    pub total_amount: f64,
}

impl PeriodBucket {
    /// "YYYY-MM" label for display
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Group expenses into consecutive monthly buckets, oldest first
///
/// Months with no expenses are absent rather than zero-filled, so period
/// indexes run 0..K over the K distinct months in the input regardless of
/// calendar gaps. Input order does not matter. An empty input produces an
/// empty sequence.
pub fn monthly_buckets(expenses: &[Expense]) -> Vec<PeriodBucket> {
    let mut totals: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for expense in expenses {
        let key = (expense.date.year(), expense.date.month());
        *totals.entry(key).or_insert(0.0) += expense.amount;
    }

    totals
        .into_iter()
        .enumerate()
        .map(|(period_index, ((year, month), total_amount))| PeriodBucket {
            period_index,
            year,
            month,
            total_amount,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::{NaiveDate, Utc};

    fn expense(amount: f64, date: &str) -> Expense {
        Expense {
            id: 0,
            user_id: 1,
            amount,
            category: Category::Other,
            note: None,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_input_empty_series() {
        assert!(monthly_buckets(&[]).is_empty());
    }

    #[test]
    fn test_single_month_single_bucket() {
        let expenses = vec![
            expense(100.0, "2024-01-05"),
            expense(50.0, "2024-01-20"),
            expense(25.0, "2024-01-31"),
        ];
        let buckets = monthly_buckets(&expenses);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].period_index, 0);
        assert_eq!(buckets[0].year, 2024);
        assert_eq!(buckets[0].month, 1);
        assert!((buckets[0].total_amount - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_months_sum_and_order() {
        let expenses = vec![
            expense(100.0, "2024-01-05"),
            expense(50.0, "2024-01-20"),
            expense(200.0, "2024-02-10"),
        ];
        let buckets = monthly_buckets(&expenses);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].period_index, 0);
        assert!((buckets[0].total_amount - 150.0).abs() < 1e-9);
        assert_eq!(buckets[1].period_index, 1);
        assert!((buckets[1].total_amount - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let mut expenses = vec![
            expense(30.0, "2024-03-01"),
            expense(10.0, "2023-11-15"),
            expense(20.0, "2024-01-09"),
            expense(5.0, "2023-11-02"),
        ];
        let forward = monthly_buckets(&expenses);
        expenses.reverse();
        let reversed = monthly_buckets(&expenses);

        assert_eq!(forward, reversed);
        assert_eq!(forward.len(), 3);
        assert_eq!(forward[0].label(), "2023-11");
        assert!((forward[0].total_amount - 15.0).abs() < 1e-9);
        assert_eq!(forward[2].label(), "2024-03");
    }

    #[test]
    fn test_calendar_gap_is_not_zero_filled() {
        // January and March, nothing in February
        let expenses = vec![expense(100.0, "2024-01-10"), expense(300.0, "2024-03-10")];
        let buckets = monthly_buckets(&expenses);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].period_index, 0);
        assert_eq!(buckets[1].period_index, 1);
        assert_eq!(buckets[1].month, 3);
    }

    #[test]
    fn test_year_boundary_ordering() {
        let expenses = vec![expense(10.0, "2024-01-05"), expense(20.0, "2023-12-28")];
        let buckets = monthly_buckets(&expenses);

        assert_eq!(buckets[0].label(), "2023-12");
        assert_eq!(buckets[1].label(), "2024-01");
    }
}
