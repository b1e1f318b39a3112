//! Authentication validator
//!
//! Implements registration and login against the credential store. Login
//! fails closed: an unknown username and a wrong password both produce a
//! plain `false`, never an error.

use log::{info, warn};

use crate::auth::hashing::{credentials_match, generate_salt, hash_secret};
use crate::error::AuthError;
use crate::store::Store;
use crate::utils::validation::{MAX_PASSWORD_LEN, MAX_USERNAME_LEN, is_valid_input};

/// Register a new account
///
/// Generates a fresh salt, hashes the password with salt and pepper, and
/// persists the triple. Fails if the username is already taken.
pub async fn register(
    store: &Store,
    pepper: &str,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    if !is_valid_input(username, MAX_USERNAME_LEN) {
        return Err(AuthError::MalformedInput("invalid username format".into()));
    }

    if !is_valid_input(password, MAX_PASSWORD_LEN) {
        return Err(AuthError::MalformedInput("invalid password format".into()));
    }

    if store.user_exists(username).await? {
        return Err(AuthError::UserAlreadyExists(username.to_string()));
    }

    let salt = generate_salt();
    let digest = hash_secret(password, &salt, pepper);
    store.insert_user(username, &digest, &salt).await?;

    info!("Registered user {}", username);
    Ok(())
}

/// Validate a login attempt
///
/// Returns `Ok(true)` only when the recomputed digest matches the stored
/// hash exactly; an absent user yields `Ok(false)`.
pub async fn authenticate(
    store: &Store,
    pepper: &str,
    username: &str,
    password: &str,
) -> Result<bool, AuthError> {
    match store.credentials_for(username).await? {
        Some(stored) => Ok(credentials_match(
            password,
            &stored.salt,
            pepper,
            &stored.password_hash,
        )),
        None => {
            warn!("Login attempt for unknown user {}", username);
            Ok(false)
        }
    }
}
