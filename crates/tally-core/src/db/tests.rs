//! Database tests

use super::*;
use crate::models::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_in_memory_db() {
        let db = Database::in_memory().unwrap();
        let result = db.get_user(1);
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_schema_exists() {
        let db = Database::in_memory().unwrap();
        let conn = db.conn().unwrap();

        let result: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('users') WHERE name IN ('id', 'username', 'password_hash', 'email', 'created_at')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(result, 5, "users table should have 5 expected columns");

        let result: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('incomes') WHERE name IN ('id', 'user_id', 'amount', 'source', 'date', 'created_at')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(result, 6, "incomes table should have 6 expected columns");

        let result: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('expenses') WHERE name IN ('id', 'user_id', 'amount', 'category', 'note', 'date', 'created_at')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(result, 7, "expenses table should have 7 expected columns");
    }

    #[test]
    fn test_signup_and_login() {
        let db = Database::in_memory().unwrap();

        let id = db
            .create_user("alice", "hunter2", Some("alice@example.com"))
            .unwrap();
        assert!(id > 0);

        let user = db.authenticate_user("alice", "hunter2").unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn test_duplicate_username_refused() {
        let db = Database::in_memory().unwrap();

        db.create_user("alice", "hunter2", None).unwrap();
        let result = db.create_user("alice", "different", None);
        assert!(matches!(result, Err(Error::UsernameTaken(_))));
    }

    #[test]
    fn test_wrong_password_refused() {
        let db = Database::in_memory().unwrap();

        db.create_user("alice", "hunter2", None).unwrap();
        let result = db.authenticate_user("alice", "wrong");
        assert!(matches!(result, Err(Error::InvalidCredentials)));

        let result = db.authenticate_user("nobody", "hunter2");
        assert!(matches!(result, Err(Error::InvalidCredentials)));
    }

    #[test]
    fn test_password_is_not_stored_plaintext() {
        let db = Database::in_memory().unwrap();
        db.create_user("alice", "hunter2", None).unwrap();

        let conn = db.conn().unwrap();
        let stored: String = conn
            .query_row(
                "SELECT password_hash FROM users WHERE username = 'alice'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_ne!(stored, "hunter2");
        assert_eq!(stored.len(), 64);
    }

    #[test]
    fn test_income_entry_and_listing() {
        let db = Database::in_memory().unwrap();
        let user_id = db.create_user("alice", "pw", None).unwrap();

        db.insert_income(
            user_id,
            &NewIncome {
                amount: 2500.0,
                source: Some("salary".into()),
                date: date("2024-02-01"),
            },
        )
        .unwrap();
        db.insert_income(
            user_id,
            &NewIncome {
                amount: 100.0,
                source: None,
                date: date("2024-01-15"),
            },
        )
        .unwrap();

        let incomes = db.list_incomes(user_id).unwrap();
        assert_eq!(incomes.len(), 2);
        // Oldest first
        assert_eq!(incomes[0].date, date("2024-01-15"));
        assert!((db.total_income(user_id).unwrap() - 2600.0).abs() < 1e-9);
    }

    #[test]
    fn test_expense_entry_and_listing() {
        let db = Database::in_memory().unwrap();
        let user_id = db.create_user("alice", "pw", None).unwrap();

        db.insert_expense(
            user_id,
            &NewExpense {
                amount: 45.0,
                category: Category::Food,
                note: Some("groceries".into()),
                date: date("2024-01-05"),
            },
        )
        .unwrap();

        let expenses = db.list_expenses(user_id).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, Category::Food);
        assert_eq!(expenses[0].note.as_deref(), Some("groceries"));
        assert_eq!(expenses[0].date, date("2024-01-05"));
    }

    #[test]
    fn test_negative_amount_refused() {
        let db = Database::in_memory().unwrap();
        let user_id = db.create_user("alice", "pw", None).unwrap();

        let result = db.insert_expense(
            user_id,
            &NewExpense {
                amount: -5.0,
                category: Category::Other,
                note: None,
                date: date("2024-01-05"),
            },
        );
        assert!(matches!(result, Err(Error::InvalidData(_))));

        let result = db.insert_income(
            user_id,
            &NewIncome {
                amount: -5.0,
                source: None,
                date: date("2024-01-05"),
            },
        );
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_records_are_scoped_per_user() {
        let db = Database::in_memory().unwrap();
        let alice = db.create_user("alice", "pw", None).unwrap();
        let bob = db.create_user("bob", "pw", None).unwrap();

        db.insert_expense(
            alice,
            &NewExpense {
                amount: 10.0,
                category: Category::Food,
                note: None,
                date: date("2024-01-05"),
            },
        )
        .unwrap();

        assert_eq!(db.list_expenses(alice).unwrap().len(), 1);
        assert!(db.list_expenses(bob).unwrap().is_empty());
    }

    #[test]
    fn test_summary_totals_and_breakdown() {
        let db = Database::in_memory().unwrap();
        let user_id = db.create_user("alice", "pw", None).unwrap();

        db.insert_income(
            user_id,
            &NewIncome {
                amount: 3000.0,
                source: Some("salary".into()),
                date: date("2024-01-01"),
            },
        )
        .unwrap();
        for (amount, category) in [
            (700.0, Category::Rent),
            (120.0, Category::Food),
            (80.0, Category::Food),
        ] {
            db.insert_expense(
                user_id,
                &NewExpense {
                    amount,
                    category,
                    note: None,
                    date: date("2024-01-10"),
                },
            )
            .unwrap();
        }

        let summary = db.get_summary(user_id).unwrap();
        assert!((summary.total_income - 3000.0).abs() < 1e-9);
        assert!((summary.total_expense - 900.0).abs() < 1e-9);
        assert!((summary.balance - 2100.0).abs() < 1e-9);

        // Largest category first
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].category, Category::Rent);
        assert!((summary.by_category[0].total - 700.0).abs() < 1e-9);
        assert_eq!(summary.by_category[1].category, Category::Food);
        assert_eq!(summary.by_category[1].record_count, 2);
    }

    #[test]
    fn test_empty_summary_is_zeroed() {
        let db = Database::in_memory().unwrap();
        let user_id = db.create_user("alice", "pw", None).unwrap();

        let summary = db.get_summary(user_id).unwrap();
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expense, 0.0);
        assert_eq!(summary.balance, 0.0);
        assert!(summary.by_category.is_empty());
    }
}
