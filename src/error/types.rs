//! Error types
//!
//! Defines domain-specific error types for each module of the goal tracker.
//! Expected conditions (duplicate key, not-found, invalid grade) are enum
//! variants; the `Transport` variants carry failures from the database
//! driver itself.

use chrono::NaiveDate;
use std::fmt;

/// Credential store errors
#[derive(Debug)]
pub enum AuthError {
    UserAlreadyExists(String),
    MalformedInput(String),
    Transport(sqlx::Error),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::UserAlreadyExists(u) => write!(f, "User already exists: {}", u),
            AuthError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
            AuthError::Transport(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<sqlx::Error> for AuthError {
    fn from(error: sqlx::Error) -> Self {
        AuthError::Transport(error)
    }
}

/// Goal store errors
#[derive(Debug)]
pub enum GoalError {
    UserNotFound(String),
    AlreadyExists { user: String, goal: String },
    NotFound { user: String, goal: String },
    Transport(sqlx::Error),
}

impl fmt::Display for GoalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalError::UserNotFound(u) => write!(f, "User not found: {}", u),
            GoalError::AlreadyExists { user, goal } => {
                write!(f, "Goal already exists for {}: {}", user, goal)
            }
            GoalError::NotFound { user, goal } => {
                write!(f, "No such goal for {}: {}", user, goal)
            }
            GoalError::Transport(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for GoalError {}

impl From<sqlx::Error> for GoalError {
    fn from(error: sqlx::Error) -> Self {
        GoalError::Transport(error)
    }
}

/// Grade store errors
#[derive(Debug)]
pub enum GradeError {
    InvalidGoal {
        user: String,
        goal: String,
    },
    DuplicateEntry {
        user: String,
        goal: String,
        date: NaiveDate,
    },
    NotFound {
        user: String,
        goal: String,
        date: NaiveDate,
    },
    InvalidGrade(String),
    Transport(sqlx::Error),
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeError::InvalidGoal { user, goal } => {
                write!(f, "No goal named {} exists for {}", goal, user)
            }
            GradeError::DuplicateEntry { user, goal, date } => write!(
                f,
                "A grade is already recorded for {}/{} on {} (modify it instead)",
                user, goal, date
            ),
            GradeError::NotFound { user, goal, date } => {
                write!(f, "No grade recorded for {}/{} on {}", user, goal, date)
            }
            GradeError::InvalidGrade(s) => {
                write!(f, "Invalid grade {:?}: expected one of A, B, C, D, F", s)
            }
            GradeError::Transport(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for GradeError {}

impl From<sqlx::Error> for GradeError {
    fn from(error: sqlx::Error) -> Self {
        GradeError::Transport(error)
    }
}

/// Top-level application error
///
/// Only unrecoverable startup failures reach this type; once the menu loop
/// is running, store-level failures are reported and the session continues.
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Transport(sqlx::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Transport(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        AppError::Transport(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_error_display_names_the_key() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let err = GradeError::DuplicateEntry {
            user: "alice".to_string(),
            goal: "exercise".to_string(),
            date,
        };
        let text = err.to_string();
        assert!(text.contains("alice"));
        assert!(text.contains("exercise"));
        assert!(text.contains("2024-05-01"));
    }

    #[test]
    fn test_invalid_grade_display_lists_letters() {
        let err = GradeError::InvalidGrade("E".to_string());
        assert!(err.to_string().contains("A, B, C, D, F"));
    }
}
