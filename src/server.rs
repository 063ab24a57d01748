// src/server.rs

//! HTTP trigger surface.
//!
//! A single `GET /` route runs one pipeline pass and answers with a
//! one-line status. Runs are serialized behind a coarse lock so that
//! overlapping triggers cannot race on the seen-set file.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use log::error;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::pipeline::run_once;
use crate::storage::LocalStore;

/// Shared state for the trigger endpoint.
pub struct AppState {
    pub config: Config,
    pub client: reqwest::Client,
    pub store: LocalStore,
    run_lock: Mutex<()>,
}

impl AppState {
    pub fn new(config: Config, client: reqwest::Client, store: LocalStore) -> Self {
        Self {
            config,
            client,
            store,
            run_lock: Mutex::new(()),
        }
    }
}

/// Build the router with the single trigger route.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(trigger)).with_state(state)
}

/// Run one check and map its outcome to a plain-text response.
async fn trigger(State(state): State<Arc<AppState>>) -> (StatusCode, String) {
    let _guard = state.run_lock.lock().await;

    match run_once(&state.config, &state.client, &state.store).await {
        Ok(report) => (StatusCode::OK, report.message()),
        Err(e) => {
            error!("Check failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Check failed: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Posting;
    use crate::services::fetch::create_client;
    use crate::storage::SeenStore;
    use axum::body::Body;
    use axum::http::Request;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tower::util::ServiceExt;

    /// Serve one HTTP response with the given markup, returning the URL.
    async fn serve_page_once(html: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "HTTP/1.1 200 OK\r\n\
                 content-type: text/html\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{}",
                html.len(),
                html
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/jobs")
    }

    #[tokio::test]
    async fn test_new_posting_returns_200_with_status_line() {
        let tmp = TempDir::new().unwrap();
        let html = r#"<div class="jobTitle"><a href="/job/1">Analyst</a></div>"#;

        let config = Config {
            job_url: serve_page_once(html).await,
            base_origin: "https://jobs.example.org".to_string(),
            ..Config::default()
        };
        let client = create_client(&config.http).unwrap();
        let store = LocalStore::new(tmp.path().join("seen_jobs.json"));

        let app = build_router(Arc::new(AppState::new(config, client, store.clone())));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Sent email with 1 new jobs.");

        // The fetched snapshot became the new seen set.
        assert_eq!(
            store.load().await.unwrap(),
            vec![Posting::new("Analyst", "https://jobs.example.org/job/1")]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_maps_to_500() {
        let tmp = TempDir::new().unwrap();
        // Nothing listens on port 9; the fetch fails immediately.
        let config = Config {
            job_url: "http://127.0.0.1:9/jobs".to_string(),
            ..Config::default()
        };
        let client = create_client(&config.http).unwrap();
        let store = LocalStore::new(tmp.path().join("seen_jobs.json"));

        let app = build_router(Arc::new(AppState::new(config, client, store)));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // No state was written for the failed run.
        assert!(!tmp.path().join("seen_jobs.json").exists());
    }
}
