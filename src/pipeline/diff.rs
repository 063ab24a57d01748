//! Diff calculation for new-posting detection.
//!
//! Compares the freshly fetched snapshot against the stored seen set to
//! identify postings to notify about.

use std::collections::HashSet;

use crate::models::Posting;

/// Postings in `current` whose link has never been seen, in `current` order.
///
/// Keyed by link only; titles play no part. Duplicate links within
/// `current` are kept as-is, they are filtered only against `seen`.
/// Pure function, no error conditions.
pub fn diff_postings(current: &[Posting], seen: &[Posting]) -> Vec<Posting> {
    let seen_links: HashSet<&str> = seen.iter().map(|p| p.link.as_str()).collect();

    current
        .iter()
        .filter(|p| !seen_links.contains(p.link.as_str()))
        .cloned()
        .collect()
}
