//! Date handling
//!
//! Dates travel through the program as `chrono::NaiveDate` so that the
//! persistence layer compares calendar dates, never strings.

use chrono::{Local, NaiveDate, ParseError};
use log::warn;

/// The real current date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Interpret free-text date input
///
/// Input that is not exactly 10 characters falls back to the current date:
/// a short or empty answer means "today". A 10-character string that is
/// not a real `YYYY-MM-DD` date is an error, failing whichever operation
/// asked for it.
pub fn coerce_date(input: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = input.trim();
    if trimmed.len() != 10 {
        warn!(
            "Date input {:?} is not 10 characters, using the current date instead",
            trimmed
        );
        return Ok(today());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_date_parses() {
        assert_eq!(
            coerce_date("2024-05-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_short_input_falls_back_to_today() {
        assert_eq!(coerce_date("").unwrap(), today());
        assert_eq!(coerce_date("2024-5-1").unwrap(), today());
        assert_eq!(coerce_date("tomorrow").unwrap(), today());
    }

    #[test]
    fn test_long_input_falls_back_to_today() {
        assert_eq!(coerce_date("2024-05-01T00").unwrap(), today());
    }

    #[test]
    fn test_ten_character_garbage_is_an_error() {
        assert!(coerce_date("2024-13-40").is_err());
        assert!(coerce_date("aaaa-bb-cc").is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            coerce_date("  2024-05-01  ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }
}
