// src/main.rs

//! jobwatch: job-listings watcher behind a single HTTP trigger route.
//!
//! An external scheduler hits `GET /`; each hit runs one check of the
//! configured listings page and emails an alert for new postings.

use std::sync::Arc;

use log::info;

use jobwatch::config::Config;
use jobwatch::error::Result;
use jobwatch::server::{AppState, build_router};
use jobwatch::services::create_client;
use jobwatch::storage::LocalStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    config.validate()?;

    let client = create_client(&config.http)?;
    let store = LocalStore::new(config.storage_file.clone());
    let bind_addr = config.bind_addr.clone();

    let app = build_router(Arc::new(AppState::new(config, client, store)));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
