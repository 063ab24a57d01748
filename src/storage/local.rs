//! Local filesystem seen-set storage.
//!
//! One JSON file holding the array of postings from the last snapshot
//! that contained something new.

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::Posting;
use crate::storage::SeenStore;

/// Seen-set storage backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Create a new LocalStore persisting to the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the file, returning None if it doesn't exist.
    async fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SeenStore for LocalStore {
    async fn load(&self) -> Result<Vec<Posting>> {
        match self.read_bytes().await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => {
                debug!("No seen-set file at {:?}; starting empty", self.path);
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, postings: &[Posting]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(postings)?;
        self.write_bytes(&bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(tmp: &TempDir) -> LocalStore {
        LocalStore::new(tmp.path().join("seen_jobs.json"))
    }

    #[tokio::test]
    async fn test_load_absent_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let seen = store.load().await.unwrap();
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let postings = vec![
            Posting::new("Analyst", "https://example.com/job/1"),
            Posting::new("Developer", "https://example.com/job/2"),
        ];
        store.save(&postings).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, postings);
    }

    #[tokio::test]
    async fn test_save_overwrites_in_full() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        store
            .save(&[Posting::new("Old", "https://example.com/job/old")])
            .await
            .unwrap();

        let replacement = vec![Posting::new("New", "https://example.com/job/new")];
        store.save(&replacement).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, replacement);
    }

    #[tokio::test]
    async fn test_malformed_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("seen_jobs.json");
        tokio::fs::write(&path, b"not json at all").await.unwrap();

        let store = LocalStore::new(path);
        assert!(matches!(store.load().await, Err(AppError::Json(_))));
    }

    #[tokio::test]
    async fn test_duplicate_titles_survive_round_trip() {
        // Stored as a list, not deduplicated on write.
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let postings = vec![
            Posting::new("Same", "https://example.com/job/1"),
            Posting::new("Same", "https://example.com/job/1"),
        ];
        store.save(&postings).await.unwrap();

        assert_eq!(store.load().await.unwrap().len(), 2);
    }
}
