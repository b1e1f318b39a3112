//! Database store
//!
//! Owns the single MySQL connection for the lifetime of the program and
//! exposes the operations on the three tables: `login_info` (users),
//! `user_goals` (goals), and `goal_grades` (grades). Every query is
//! parameterized; user input never reaches the SQL text itself.

mod goals;
mod grades;
mod results;
mod users;

pub use grades::Grade;
pub use results::{GradeRow, StoredCredentials};

use log::info;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;

/// Table definitions, applied at startup
const SCHEMA: &str = include_str!("schema.sql");

/// Repository handle passed by reference to every operation
pub struct Store {
    pool: MySqlPool,
}

impl Store {
    /// Connect to the configured database server
    ///
    /// The pool is capped at a single connection: the menu loop is strictly
    /// sequential, and no two operations ever execute concurrently.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let store = Self::connect_url(&config.url()).await?;
        info!(
            "Connected to database {} on {}:{}",
            config.db_name, config.db_host, config.db_port
        );
        Ok(store)
    }

    /// Connect from a full connection URL (used by the integration tests)
    pub async fn connect_url(url: &str) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Create the three tables if they are missing
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Release the connection on shutdown
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
