//! Error handling
//!
//! Defines error types and handling for the goal tracker.

pub mod types;

pub use types::*;
