//! Domain models for Tally

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Rent,
    Utilities,
    Entertainment,
    Education,
    Health,
    Shopping,
    Savings,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 10] = [
        Self::Food,
        Self::Transport,
        Self::Rent,
        Self::Utilities,
        Self::Entertainment,
        Self::Education,
        Self::Health,
        Self::Shopping,
        Self::Savings,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Rent => "rent",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Education => "education",
            Self::Health => "health",
            Self::Shopping => "shopping",
            Self::Savings => "savings",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "rent" => Ok(Self::Rent),
            "utilities" => Ok(Self::Utilities),
            "entertainment" => Ok(Self::Entertainment),
            "education" => Ok(Self::Education),
            "health" => Ok(Self::Health),
            "shopping" => Ok(Self::Shopping),
            "savings" => Ok(Self::Savings),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An income record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    /// Where the money came from (salary, gift, ...)
    pub source: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A new income record to be entered (before DB insertion)
#[derive(Debug, Clone)]
pub struct NewIncome {
    pub amount: f64,
    pub source: Option<String>,
    pub date: NaiveDate,
}

/// An expense record
///
/// Immutable after entry; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub category: Category,
    pub note: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A new expense record to be entered (before DB insertion)
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: f64,
    pub category: Category,
    pub note: Option<String>,
    pub date: NaiveDate,
}

/// Income/expense totals for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_income: f64,
    pub total_expense: f64,
    /// total_income - total_expense
    pub balance: f64,
    /// Expense totals per category, largest first
    pub by_category: Vec<CategoryTotal>,
}

/// Expense total for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    pub record_count: i64,
}
