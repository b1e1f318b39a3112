//! User operations
//!
//! Queries against the `login_info` table. Hashing stays in the auth
//! module; this layer only moves the stored triple around.

use super::Store;
use super::results::StoredCredentials;

impl Store {
    /// Check whether a username is present in `login_info`
    pub async fn user_exists(&self, username: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM login_info WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Persist a newly registered account
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
        salt: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO login_info (username, passwordHash, salt) VALUES (?, ?, ?)")
            .bind(username)
            .bind(password_hash)
            .bind(salt)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Fetch the stored hash and salt for a login attempt, if the user exists
    pub async fn credentials_for(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, sqlx::Error> {
        sqlx::query_as::<_, StoredCredentials>(
            "SELECT passwordHash, salt FROM login_info WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }
}
