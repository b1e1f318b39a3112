//! Daily Grades - Entry Point
//!
//! A menu-driven command-line tracker for personal daily goals and the
//! letter grades earned against them, backed by a MySQL database.

use log::{error, info};

use daily_grades::config::AppConfig;
use daily_grades::error::AppError;
use daily_grades::shell;
use daily_grades::store::Store;

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let store = Store::connect(&config.database).await?;
    store.ensure_schema().await?;

    shell::run(&store, &config).await;

    store.close().await;
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching Daily Grades...");

    if let Err(e) = run().await {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
