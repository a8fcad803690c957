//! CLI administration tool for jokehub.
//!
//! Provides commands for managing accounts and sessions without requiring
//! HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create an account
//! cargo run --bin admin -- user create --username alice --email alice@example.com
//!
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # Delete an account (and its sessions)
//! cargo run --bin admin -- user delete alice
//!
//! # Remove expired sessions
//! cargo run --bin admin -- sessions purge
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite connection string, default `sqlite://jokehub.db`
//! - `AUTH_SIGNING_SECRET` (required): must match the server's secret so
//!   created passwords verify

use jokehub::application::services::AccountService;
use jokehub::domain::repositories::{SessionRepository, UserRepository};
use jokehub::infrastructure::persistence::{SqliteSessionRepository, SqliteUserRepository};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use std::sync::Arc;

/// CLI tool for managing jokehub.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage sessions
    Sessions {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new account
    Create {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        email: Option<String>,
    },

    /// List all accounts
    List,

    /// Delete an account by username or ID
    Delete {
        username_or_id: String,
    },
}

/// Session management subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// Remove expired sessions
    Purge,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://jokehub.db".to_string());
    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Sessions { action } => handle_session_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn account_service(pool: &SqlitePool) -> Result<AccountService> {
    let secret =
        std::env::var("AUTH_SIGNING_SECRET").context("AUTH_SIGNING_SECRET must be set")?;
    let pool = Arc::new(pool.clone());

    Ok(AccountService::new(
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteSessionRepository::new(pool)),
        secret,
        // TTL is irrelevant for admin commands; no sessions are created here.
        3600,
    ))
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create { username, email } => {
            create_user(pool, username, email).await?;
        }
        UserAction::List => {
            list_users(repo).await?;
        }
        UserAction::Delete { username_or_id } => {
            delete_user(repo, username_or_id).await?;
        }
    }

    Ok(())
}

/// Creates an account with interactive prompts.
///
/// The password is read from the terminal with confirmation and hashed the
/// same way the server hashes it, so the account can log in over HTTP.
async fn create_user(
    pool: &SqlitePool,
    username: Option<String>,
    email: Option<String>,
) -> Result<()> {
    println!("{}", "👤 Create Account".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let service = account_service(pool)?;
    let user = service
        .register(&username, &email, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    println!("{}", "✅ Account created successfully!".green().bold());
    println!("  ID:       {}", user.id.to_string().bright_black());
    println!("  Username: {}", user.username.cyan());
    println!("  Email:    {}", user.email.cyan());
    println!();

    Ok(())
}

/// Lists all accounts.
///
/// # Output Format
///
/// ```text
/// 📋 Accounts
///
///   ID  Username             Email                          Created
///   ─────────────────────────────────────────────────────────────────────
///   1   alice                alice@example.com              2026-01-15 10:30
/// ```
async fn list_users(repo: Arc<SqliteUserRepository>) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<30} {:<16}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(72).bright_black());

    for user in &users {
        println!(
            "  {:<4} {:<20} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.email,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes an account by username or ID with confirmation prompt.
///
/// Sessions go with the account via the foreign-key cascade.
async fn delete_user(repo: Arc<SqliteUserRepository>, username_or_id: String) -> Result<()> {
    println!("{}", "🗑️  Delete Account".bright_blue().bold());
    println!();

    let user = match username_or_id.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_username(&username_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let user = user.context("Account not found")?;

    println!("  Username: {}", user.username.cyan());
    println!("  Email:    {}", user.email);
    println!("  ID:       {}", user.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this account and its sessions?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.delete(user.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete account: {}", e))?;

    println!();
    println!("{}", "✅ Account deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches session management commands.
async fn handle_session_action(action: SessionAction, pool: &SqlitePool) -> Result<()> {
    let repo = SqliteSessionRepository::new(Arc::new(pool.clone()));

    match action {
        SessionAction::Purge => {
            let removed = repo
                .purge_expired(Utc::now())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to purge sessions: {}", e))?;

            println!(
                "{} {}",
                "✅ Expired sessions removed:".green().bold(),
                removed.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
