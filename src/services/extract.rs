// src/services/extract.rs

//! Posting extraction from listings markup.
//!
//! Selects job title anchors with a configured CSS selector and turns
//! them into postings in document order.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::Posting;

/// Parse the listings page and collect postings in document order.
///
/// An element without an `href` contributes nothing and does not stop
/// extraction of the elements after it. The href is taken to be
/// host-relative and prefixed with `base_origin` as-is. An empty page
/// or a page with no matches yields an empty vec.
pub fn extract_postings(html: &str, selector: &str, base_origin: &str) -> Result<Vec<Posting>> {
    let title_sel = parse_selector(selector)?;
    let document = Html::parse_document(html);

    let mut postings = Vec::new();
    for element in document.select(&title_sel) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let title = element.text().collect::<String>().trim().to_string();
        let link = format!("{base_origin}{href}");
        postings.push(Posting { title, link });
    }
    Ok(postings)
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
