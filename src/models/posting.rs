//! Posting data structure.

use serde::{Deserialize, Serialize};

/// A job posting extracted from the listings page.
///
/// The absolute `link` is the natural key; `title` is display-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Posting {
    /// Posting title
    pub title: String,

    /// Full URL to the posting
    pub link: String,
}

impl Posting {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}
