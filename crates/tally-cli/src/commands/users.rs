//! Account command implementations (signup, login)

use anyhow::Result;
use tally_core::db::Database;
use tally_core::Error;

pub fn cmd_signup(
    db: &Database,
    username: &str,
    password: &str,
    email: Option<&str>,
) -> Result<()> {
    match db.create_user(username, password, email) {
        Ok(user_id) => {
            println!("✅ Account created for '{}' (user id {})", username, user_id);
            println!("   Log in with: tally login -u {} -p <password>", username);
            Ok(())
        }
        Err(Error::UsernameTaken(name)) => {
            println!("⚠️  Username '{}' already exists.", name);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn cmd_login(db: &Database, username: &str, password: &str) -> Result<()> {
    match db.authenticate_user(username, password) {
        Ok(user) => {
            println!("✅ Login successful!");
            println!("   User id: {}", user.id);
            println!("   Username: {}", user.username);
            if let Some(email) = &user.email {
                println!("   Email: {}", email);
            }
            Ok(())
        }
        Err(Error::InvalidCredentials) => {
            println!("❌ Invalid username or password.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
