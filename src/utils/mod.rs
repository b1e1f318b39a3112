//! Utility functions
//!
//! Provides date handling, line-oriented input, and validation utilities.

pub mod dates;
pub mod input;
pub mod validation;
