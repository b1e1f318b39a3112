//! Authentication system
//!
//! Handles credential hashing, user registration, and login validation
//! against the `login_info` table.

pub mod hashing;
pub mod validator;

pub use hashing::{SALT_LEN, generate_salt, hash_secret};
pub use validator::{authenticate, register};
