//! Crawler module for page fetching and the contact page fallback
//!
//! This module contains the page-level logic, including:
//! - HTTP fetching
//! - HTML parsing into text elements and hyperlinks
//! - Contact link selection
//! - Overall search coordination

mod coordinator;
mod fetcher;
mod locator;
mod parser;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_html};
pub use locator::{select_contact_link, ContactLink, CONTACT_INDICATORS};
pub use parser::{parse_page, Hyperlink, Page, TagCategory, TextElement};

use crate::config::Config;
use crate::{ScoutError, NOT_FOUND_MESSAGE};

/// Runs a complete number search and renders the outcome
///
/// This is the main entry point for a search. It will:
/// 1. Build the HTTP client
/// 2. Fetch and scan the home page
/// 3. Fall back to the contact page when needed
///
/// # Returns
///
/// * `Ok(String)` - The number as written on the page, or the
///   "Number cannot be found" message
/// * `Err(ScoutError)` - A page could not be fetched
pub async fn find_number(url: &str, config: &Config) -> Result<String, ScoutError> {
    let coordinator = Coordinator::new(config)?;

    Ok(coordinator
        .find_number(url)
        .await?
        .map(|number| number.into_string())
        .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string()))
}
