//! Logged-in session state
//!
//! Tracks the authenticated user and the active date. The active date is
//! the day single-grade operations (and the all-goals input) target; it
//! defaults to the real current date and can be changed for the remainder
//! of the session.

use chrono::NaiveDate;

use crate::utils::dates;

pub struct Session {
    username: String,
    active_date: NaiveDate,
}

impl Session {
    pub fn new(username: String) -> Self {
        Self {
            username,
            active_date: dates::today(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn active_date(&self) -> NaiveDate {
        self.active_date
    }

    pub fn set_active_date(&mut self, date: NaiveDate) {
        self.active_date = date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_targets_today() {
        let session = Session::new("alice".to_string());
        assert_eq!(session.username(), "alice");
        assert_eq!(session.active_date(), dates::today());
    }

    #[test]
    fn test_active_date_is_sticky() {
        let mut session = Session::new("alice".to_string());
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        session.set_active_date(date);
        assert_eq!(session.active_date(), date);
    }
}
