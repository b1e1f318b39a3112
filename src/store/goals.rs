//! Goal operations
//!
//! Queries against the `user_goals` table. A goal is just a named pair
//! owned by a user; there is no edit operation, only create and delete.

use log::info;

use super::Store;
use crate::error::GoalError;

impl Store {
    /// Check whether the user owns a goal with this name
    pub async fn goal_exists(&self, username: &str, goal: &str) -> Result<bool, sqlx::Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM user_goals WHERE username = ? AND goal = ?")
                .bind(username)
                .bind(goal)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    /// Create a new goal for a registered user
    pub async fn create_goal(&self, username: &str, goal: &str) -> Result<(), GoalError> {
        if !self.user_exists(username).await? {
            return Err(GoalError::UserNotFound(username.to_string()));
        }

        if self.goal_exists(username, goal).await? {
            return Err(GoalError::AlreadyExists {
                user: username.to_string(),
                goal: goal.to_string(),
            });
        }

        sqlx::query("INSERT INTO user_goals (username, goal) VALUES (?, ?)")
            .bind(username)
            .bind(goal)
            .execute(&self.pool)
            .await?;

        info!("Created goal {} for {}", goal, username);
        Ok(())
    }

    /// Delete one of the user's goals
    ///
    /// Grades recorded against the goal are left in place; deletion never
    /// cascades into `goal_grades`.
    pub async fn delete_goal(&self, username: &str, goal: &str) -> Result<(), GoalError> {
        if !self.goal_exists(username, goal).await? {
            return Err(GoalError::NotFound {
                user: username.to_string(),
                goal: goal.to_string(),
            });
        }

        sqlx::query("DELETE FROM user_goals WHERE username = ? AND goal = ?")
            .bind(username)
            .bind(goal)
            .execute(&self.pool)
            .await?;

        info!("Deleted goal {} for {}", goal, username);
        Ok(())
    }

    /// List the user's goal names
    ///
    /// The order is whatever the database returns; callers needing a stable
    /// order must sort explicitly.
    pub async fn list_goals(&self, username: &str) -> Result<Vec<String>, GoalError> {
        let goals = sqlx::query_scalar("SELECT goal FROM user_goals WHERE username = ?")
            .bind(username)
            .fetch_all(&self.pool)
            .await?;
        Ok(goals)
    }
}
