//! Seen-set persistence.
//!
//! The seen set is the full snapshot from the most recent run that found
//! anything new. Saves replace it wholesale; there is no merge, expiry,
//! or pruning, so the file is exactly the size of that last snapshot.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Posting;

// Re-export for convenience
pub use local::LocalStore;

/// Trait for seen-set storage backends.
#[async_trait]
pub trait SeenStore: Send + Sync {
    /// Load the full seen set. An absent store yields an empty set;
    /// a malformed one is a fatal error.
    async fn load(&self) -> Result<Vec<Posting>>;

    /// Overwrite the stored seen set with the given postings.
    async fn save(&self, postings: &[Posting]) -> Result<()>;
}
