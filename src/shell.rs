//! Module `shell`
//!
//! Drives the interactive loops: the home menu (quit, login, register),
//! the login prompt, and the logged-in session. Reads one line at a time,
//! parses it into a command, dispatches, and prints responses. A failed
//! operation never ends the session; only quitting (or a closed input
//! stream) does.

use log::{error, info, warn};

use crate::auth;
use crate::config::AppConfig;
use crate::menu::{
    HomeCommand, SessionStatus, display_options, handle_command, parse_home_command,
    parse_session_command,
};
use crate::session::Session;
use crate::store::Store;
use crate::utils::input::prompt;

/// Run the home loop until the user quits
pub async fn run(store: &Store, config: &AppConfig) {
    loop {
        let raw = match prompt("Welcome to Daily Grades! Enter 1 to login, 2 to create a new user, 0 to quit: ") {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Input stream closed at home menu: {}", e);
                return;
            }
        };

        match parse_home_command(&raw) {
            HomeCommand::Quit => {
                info!("Exiting at user request");
                return;
            }
            HomeCommand::Login => {
                if let Some(mut session) = login(store, config).await {
                    display_options(&session);
                    if run_session(&mut session, store).await == SessionStatus::Exit {
                        return;
                    }
                }
            }
            HomeCommand::Register => register(store, config).await,
            HomeCommand::Unknown(other) => println!("unrecognized input: {}", other),
        }
    }
}

/// Prompt for credentials until login succeeds or the user backs out with 0
async fn login(store: &Store, config: &AppConfig) -> Option<Session> {
    loop {
        let username = match prompt("Enter username or enter 0 to return home: ") {
            Ok(username) => username,
            Err(e) => {
                warn!("Input stream closed at login prompt: {}", e);
                return None;
            }
        };

        if username == "0" {
            return None;
        }

        match store.user_exists(&username).await {
            Ok(false) => {
                println!("user: {} doesn't exist in database", username);
                continue;
            }
            Err(e) => {
                error!("Login unavailable: {}", e);
                println!("login unavailable: {}", e);
                return None;
            }
            Ok(true) => {}
        }

        let password = match prompt("Enter password: ") {
            Ok(password) => password,
            Err(e) => {
                warn!("Input stream closed at password prompt: {}", e);
                return None;
            }
        };

        match auth::authenticate(store, &config.security.pepper, &username, &password).await {
            Ok(true) => {
                info!("User {} logged in", username);
                println!("login successful");
                return Some(Session::new(username));
            }
            Ok(false) => println!("incorrect password"),
            Err(e) => {
                error!("Login failed for {}: {}", username, e);
                println!("login failed: {}", e);
            }
        }
    }
}

/// Prompt for a new username and password and create the account
async fn register(store: &Store, config: &AppConfig) {
    let username = match prompt("Enter new username: ") {
        Ok(username) => username,
        Err(e) => {
            warn!("Input stream closed at registration prompt: {}", e);
            return;
        }
    };

    let password = match prompt("Enter password: ") {
        Ok(password) => password,
        Err(e) => {
            warn!("Input stream closed at registration prompt: {}", e);
            return;
        }
    };

    match auth::register(store, &config.security.pepper, &username, &password).await {
        Ok(()) => println!("user created successfully"),
        Err(e) => {
            error!("Registration failed: {}", e);
            println!("could not create user: {}", e);
        }
    }
}

/// Run the logged-in loop until logout or program exit
async fn run_session(session: &mut Session, store: &Store) -> SessionStatus {
    loop {
        let raw = match prompt("Enter input number: ") {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Input stream closed mid-session: {}", e);
                return SessionStatus::Exit;
            }
        };

        let command = parse_session_command(&raw);
        match handle_command(session, command, store).await {
            SessionStatus::Continue => {}
            status => return status,
        }
    }
}
