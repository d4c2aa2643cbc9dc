use std::sync::Arc;

use anyhow::{Context, Result};
use hotelier::{
    config::{self, Config},
    logger::setup_logger,
    web::{self, AppState},
};
use log::{error, info, LevelFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::read_config();

    // Initialize logger
    let level = config
        .as_ref()
        .map(Config::log_level_filter)
        .unwrap_or(LevelFilter::Info);
    setup_logger(level)?;

    let config: Arc<Config> = match config {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!("failed to read config: {:#}", err);
            std::process::exit(1);
        }
    };

    info!(
        "Storing hotels in {}",
        config.hotels_dir().display()
    );
    let state = AppState::init(config.clone()).context("failed to prepare server state")?;

    web::start_http_server(state).await
}
