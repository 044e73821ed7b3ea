//! Record entry command implementations (income/expense add and list)

use anyhow::Result;
use tally_core::db::Database;
use tally_core::models::{Category, NewExpense, NewIncome};

use super::{parse_date, truncate};

pub fn cmd_income_add(
    db: &Database,
    user_id: i64,
    amount: f64,
    source: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let date = parse_date(date)?;
    let id = db.insert_income(
        user_id,
        &NewIncome {
            amount,
            source: source.map(str::to_string),
            date,
        },
    )?;

    println!("✅ Income added (record {}): {:.2} on {}", id, amount, date);
    Ok(())
}

pub fn cmd_income_list(db: &Database, user_id: i64) -> Result<()> {
    let incomes = db.list_incomes(user_id)?;

    println!();
    println!("💰 Incomes");
    if incomes.is_empty() {
        println!("   No income records yet.");
        return Ok(());
    }

    println!(
        "   {:>5} │ {:>10} │ {:10} │ {}",
        "ID", "Amount", "Date", "Source"
    );
    println!("   ──────┼────────────┼────────────┼─────────────────────");
    for income in &incomes {
        println!(
            "   {:>5} │ {:>10.2} │ {:10} │ {}",
            income.id,
            income.amount,
            income.date.to_string(),
            truncate(income.source.as_deref().unwrap_or("-"), 20)
        );
    }
    println!();
    println!("   Total: {:.2}", db.total_income(user_id)?);

    Ok(())
}

pub fn cmd_expense_add(
    db: &Database,
    user_id: i64,
    amount: f64,
    category: &str,
    note: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let category: Category = category.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let date = parse_date(date)?;
    let id = db.insert_expense(
        user_id,
        &NewExpense {
            amount,
            category,
            note: note.map(str::to_string),
            date,
        },
    )?;

    println!(
        "✅ Expense added (record {}): {:.2} [{}] on {}",
        id, amount, category, date
    );
    Ok(())
}

pub fn cmd_expense_list(db: &Database, user_id: i64) -> Result<()> {
    let expenses = db.list_expenses(user_id)?;

    println!();
    println!("💸 Expenses");
    if expenses.is_empty() {
        println!("   No expense records yet.");
        return Ok(());
    }

    println!(
        "   {:>5} │ {:>10} │ {:10} │ {:13} │ {}",
        "ID", "Amount", "Date", "Category", "Note"
    );
    println!("   ──────┼────────────┼────────────┼───────────────┼─────────────────────");
    for expense in &expenses {
        println!(
            "   {:>5} │ {:>10.2} │ {:10} │ {:13} │ {}",
            expense.id,
            expense.amount,
            expense.date.to_string(),
            expense.category.as_str(),
            truncate(expense.note.as_deref().unwrap_or("-"), 20)
        );
    }
    println!();
    println!("   Total: {:.2}", db.total_expense(user_id)?);

    Ok(())
}
