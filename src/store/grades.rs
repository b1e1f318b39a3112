//! Grade operations
//!
//! The `Grade` value type and queries against the `goal_grades` table.
//! A grade row is keyed by `(username, goal, cur_date)`; the goal reference
//! is checked in this layer before every insert, since the schema carries
//! no foreign key.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use log::info;

use super::Store;
use super::results::GradeRow;
use crate::error::GradeError;

/// Letter grade recorded against a goal for one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// The single-character form stored in the `grade` column
    pub const fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    // Case-sensitive: "a" and "E" are both rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            other => Err(GradeError::InvalidGrade(other.to_string())),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Store {
    /// Check whether a grade is recorded for this key
    pub async fn grade_exists(
        &self,
        username: &str,
        goal: &str,
        date: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM goal_grades WHERE username = ? AND goal = ? AND cur_date = ?",
        )
        .bind(username)
        .bind(goal)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Record a grade for a goal on a date
    ///
    /// The goal must exist for the user, and no grade may be present for
    /// the key yet; an existing grade is left untouched and reported as a
    /// duplicate.
    pub async fn create_grade(
        &self,
        username: &str,
        goal: &str,
        date: NaiveDate,
        grade: Grade,
    ) -> Result<(), GradeError> {
        if !self.goal_exists(username, goal).await? {
            return Err(GradeError::InvalidGoal {
                user: username.to_string(),
                goal: goal.to_string(),
            });
        }

        if self.grade_exists(username, goal, date).await? {
            return Err(GradeError::DuplicateEntry {
                user: username.to_string(),
                goal: goal.to_string(),
                date,
            });
        }

        sqlx::query("INSERT INTO goal_grades (username, goal, cur_date, grade) VALUES (?, ?, ?, ?)")
            .bind(username)
            .bind(goal)
            .bind(date)
            .bind(grade.as_str())
            .execute(&self.pool)
            .await?;

        info!("Recorded grade {} for {}/{} on {}", grade, username, goal, date);
        Ok(())
    }

    /// Replace the grade already recorded for this key
    pub async fn modify_grade(
        &self,
        username: &str,
        goal: &str,
        date: NaiveDate,
        grade: Grade,
    ) -> Result<(), GradeError> {
        if !self.grade_exists(username, goal, date).await? {
            return Err(GradeError::NotFound {
                user: username.to_string(),
                goal: goal.to_string(),
                date,
            });
        }

        sqlx::query(
            "UPDATE goal_grades SET grade = ? WHERE username = ? AND goal = ? AND cur_date = ?",
        )
        .bind(grade.as_str())
        .bind(username)
        .bind(goal)
        .bind(date)
        .execute(&self.pool)
        .await?;

        info!("Modified grade for {}/{} on {} to {}", username, goal, date, grade);
        Ok(())
    }

    /// Record one grade per goal for a single date, atomically
    ///
    /// Upserts each entry (update when a grade already exists for the key,
    /// insert otherwise) inside one transaction, so a failure part way
    /// through leaves no partial writes behind.
    pub async fn record_day(
        &self,
        username: &str,
        date: NaiveDate,
        entries: &[(String, Grade)],
    ) -> Result<(), GradeError> {
        let mut tx = self.pool.begin().await?;

        for (goal, grade) in entries {
            let existing: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM goal_grades WHERE username = ? AND goal = ? AND cur_date = ?",
            )
            .bind(username)
            .bind(goal)
            .bind(date)
            .fetch_one(&mut *tx)
            .await?;

            if existing > 0 {
                sqlx::query(
                    "UPDATE goal_grades SET grade = ? WHERE username = ? AND goal = ? AND cur_date = ?",
                )
                .bind(grade.as_str())
                .bind(username)
                .bind(goal)
                .bind(date)
                .execute(&mut *tx)
                .await?;
            } else {
                sqlx::query(
                    "INSERT INTO goal_grades (username, goal, cur_date, grade) VALUES (?, ?, ?, ?)",
                )
                .bind(username)
                .bind(goal)
                .bind(date)
                .bind(grade.as_str())
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        info!("Recorded {} grade(s) for {} on {}", entries.len(), username, date);
        Ok(())
    }

    /// List all grades for the user inside an inclusive date range
    ///
    /// Rows come back ordered by date ascending, then goal name ascending;
    /// the comparison happens on the `DATE` column, not on strings.
    pub async fn list_grade_range(
        &self,
        username: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<GradeRow>, GradeError> {
        let rows = sqlx::query_as::<_, GradeRow>(
            "SELECT cur_date, goal, grade FROM goal_grades \
             WHERE username = ? AND cur_date BETWEEN ? AND ? \
             ORDER BY cur_date ASC, goal ASC",
        )
        .bind(username)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_grades() {
        assert_eq!("A".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!("B".parse::<Grade>().unwrap(), Grade::B);
        assert_eq!("C".parse::<Grade>().unwrap(), Grade::C);
        assert_eq!("D".parse::<Grade>().unwrap(), Grade::D);
        assert_eq!("F".parse::<Grade>().unwrap(), Grade::F);
    }

    #[test]
    fn test_parse_rejects_invalid_letters() {
        assert!("E".parse::<Grade>().is_err());
        assert!("G".parse::<Grade>().is_err());
        assert!("a".parse::<Grade>().is_err());
        assert!("f".parse::<Grade>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_letter_input() {
        assert!("".parse::<Grade>().is_err());
        assert!("AB".parse::<Grade>().is_err());
        assert!(" A".parse::<Grade>().is_err());
        assert!("4".parse::<Grade>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for grade in [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F] {
            assert_eq!(grade.to_string().parse::<Grade>().unwrap(), grade);
        }
    }
}
