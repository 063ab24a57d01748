// src/services/fetch.rs

//! HTTP fetch utilities.

use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::Result;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch the listings page and return the raw markup.
///
/// One GET, no retries; a network error or non-2xx status aborts the run.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(text)
}
