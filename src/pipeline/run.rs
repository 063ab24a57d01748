// src/pipeline/run.rs

//! Single pipeline execution.
//!
//! One trigger runs the fixed sequence fetch → extract → diff →
//! notify → persist, each step feeding the next. No retries; any
//! fatal step fails the whole run.

use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::models::Posting;
use crate::services::notify::Delivery;
use crate::services::{extract_postings, fetch_page, notify};
use crate::storage::SeenStore;

use super::diff_postings;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Number of newly detected postings.
    pub detected: usize,
    /// Notification outcome, present only when something was detected.
    pub delivery: Option<Delivery>,
}

impl RunReport {
    /// The one-line trigger response.
    ///
    /// The count is of *detected* postings. A configuration-guard skip
    /// still reports the sent message; `delivery` carries the truth.
    pub fn message(&self) -> String {
        if self.detected > 0 {
            format!("Sent email with {} new jobs.", self.detected)
        } else {
            "No new jobs found.".to_string()
        }
    }
}

/// Run the full pipeline once: fetch, extract, then reconcile.
pub async fn run_once(
    config: &Config,
    client: &reqwest::Client,
    store: &dyn SeenStore,
) -> Result<RunReport> {
    let html = fetch_page(client, &config.job_url).await?;
    let current = extract_postings(&html, &config.title_selector, &config.base_origin)?;
    info!("Fetched {} postings from {}", current.len(), config.job_url);

    reconcile(config, store, current).await
}

/// Diff a snapshot against the stored seen set, alert, and persist.
///
/// The snapshot replaces the seen set only after `send_alert` returns;
/// a send failure leaves the seen set untouched, so the same postings
/// are detected and re-attempted on the next trigger. When nothing is
/// new, neither the store nor the notifier is touched.
pub async fn reconcile(
    config: &Config,
    store: &dyn SeenStore,
    current: Vec<Posting>,
) -> Result<RunReport> {
    let seen = store.load().await?;
    let new_postings = diff_postings(&current, &seen);

    if new_postings.is_empty() {
        info!("No new postings");
        return Ok(RunReport {
            detected: 0,
            delivery: None,
        });
    }

    info!("{} new postings detected", new_postings.len());
    let delivery = notify::send_alert(&config.mail, &new_postings).await?;
    store.save(&current).await?;

    Ok(RunReport {
        detected: new_postings.len(),
        delivery: Some(delivery),
    })
}
