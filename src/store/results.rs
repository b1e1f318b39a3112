//! Store result types
//!
//! Defines row structures returned by store queries.

use chrono::NaiveDate;
use sqlx::FromRow;

/// Stored credential material for one account
#[derive(Debug, Clone, FromRow)]
pub struct StoredCredentials {
    #[sqlx(rename = "passwordHash")]
    pub password_hash: String,
    pub salt: String,
}

/// One `goal_grades` row from a date-range listing
#[derive(Debug, Clone, FromRow)]
pub struct GradeRow {
    pub cur_date: NaiveDate,
    pub goal: String,
    pub grade: String,
}
