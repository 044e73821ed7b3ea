//! Report command implementations (summary, forecast)

use anyhow::Result;
use tally_core::db::Database;
use tally_core::{forecast, monthly_buckets, ForecastResult};

pub fn cmd_summary(db: &Database, user_id: i64) -> Result<()> {
    let summary = db.get_summary(user_id)?;

    println!();
    println!("📌 Summary");
    println!("   ─────────────────────────────────────");
    println!("   Total income:  {:>12.2}", summary.total_income);
    println!("   Total expense: {:>12.2}", summary.total_expense);
    println!("   Balance:       {:>12.2}", summary.balance);

    if summary.by_category.is_empty() {
        return Ok(());
    }

    println!();
    println!("   Category-wise expense");
    println!("   {:13} │ {:>10} │ {:>5}", "Category", "Amount", "Count");
    println!("   ──────────────┼────────────┼───────");
    for cat in &summary.by_category {
        println!(
            "   {:13} │ {:>10.2} │ {:>5}",
            cat.category.as_str(),
            cat.total,
            cat.record_count
        );
    }

    Ok(())
}

pub fn cmd_forecast(db: &Database, user_id: i64) -> Result<()> {
    println!();
    println!("🔮 Expense Forecast");

    let result = forecast(db, user_id)?;

    let amount = match result {
        ForecastResult::Predicted { amount } => amount,
        ForecastResult::InsufficientData => {
            println!("   ⚠️  Not enough data to predict. Record some expenses first.");
            return Ok(());
        }
    };

    // Show the monthly series the projection was fitted over
    let buckets = monthly_buckets(&db.list_expenses(user_id)?);
    println!("   {:8} │ {:>10}", "Month", "Total");
    println!("   ─────────┼────────────");
    for bucket in &buckets {
        println!("   {:8} │ {:>10.2}", bucket.label(), bucket.total_amount);
    }

    println!();
    println!("   Next month estimated expense: {:.2}", amount);
    if buckets.len() < 3 {
        println!("   (estimate based on {} month(s) of history)", buckets.len());
    }

    Ok(())
}
