// file: src/database/mod.rs
use anyhow::{Context, Result};
use log::info;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePool, Sqlite};

// Declare submodules
pub mod events;
pub mod users;

use crate::error::AppResult;
use crate::models::{EventFilter, EventPatch, EventRecord, NewEvent};

/// Handle to the durable store. Constructed once at process start and passed
/// to every consumer; closed on shutdown. There is no process-global instance.
#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Opens (creating if missing) the database at `db_url`
    /// (e.g. `sqlite:calendar.db?mode=rwc`) and runs the schema.
    pub async fn new(db_url: &str) -> Result<Self> {
        let db_exists = Sqlite::database_exists(db_url)
            .await
            .context("Failed to check if database exists")?;
        if !db_exists {
            info!("Creating database");
            Sqlite::create_database(db_url)
                .await
                .context("Failed to create database")?;
        }

        let pool = SqlitePool::connect(db_url)
            .await
            .context("Failed to connect to database")?;

        run_schema(&pool).await.context("Failed to run database schema")?;

        info!("Database initialized successfully");

        Ok(Database { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    // --- Event Delegates ---

    pub async fn create_event(&self, user_id: &str, event: &NewEvent) -> AppResult<EventRecord> {
        events::create(&self.pool, user_id, event).await
    }

    pub async fn find_event(&self, id: &str) -> AppResult<Option<EventRecord>> {
        events::find_by_id(&self.pool, id).await
    }

    pub async fn event_belongs_to_user(&self, id: &str, user_id: &str) -> AppResult<bool> {
        events::belongs_to_user(&self.pool, id, user_id).await
    }

    pub async fn list_events(
        &self,
        user_id: &str,
        filter: &EventFilter,
    ) -> AppResult<Vec<EventRecord>> {
        events::list_by_user(&self.pool, user_id, filter).await
    }

    pub async fn update_event(&self, id: &str, patch: &EventPatch) -> AppResult<EventRecord> {
        events::update(&self.pool, id, patch).await
    }

    pub async fn delete_event(&self, id: &str) -> AppResult<()> {
        events::delete(&self.pool, id).await
    }

    // --- User Delegates ---

    pub async fn add_user(
        &self,
        id: &str,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<()> {
        users::insert(&self.pool, id, username, email, password_hash).await
    }

    pub async fn remove_user(&self, id: &str) -> AppResult<()> {
        users::remove(&self.pool, id).await
    }
}

async fn run_schema(pool: &SqlitePool) -> Result<()> {
    let schema = include_str!("schema.sql");

    let mut current_statement = String::new();

    for line in schema.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("--") || trimmed.is_empty() {
            continue;
        }

        current_statement.push_str(line);
        current_statement.push('\n');

        if trimmed.ends_with(';') {
            sqlx::query(&current_statement).execute(pool).await?;
            current_statement.clear();
        }
    }
    Ok(())
}
