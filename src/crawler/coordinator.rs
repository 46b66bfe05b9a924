//! Search coordinator - ties fetching, scanning and the contact fallback together
//!
//! A run is strictly sequential:
//! 1. Fetch and parse the home page
//! 2. Scan it for a number
//! 3. If none is found, pick a contact link, resolve it, fetch that page and
//!    scan it once more
//!
//! Fetch failures at either step end the run with an error.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_html};
use crate::crawler::locator::select_contact_link;
use crate::crawler::parser::{parse_page, Page};
use crate::phone::{scan, CandidateNumber, NumberingPlanMatcher, PhoneMatcher};
use crate::url::resolve_contact_url;
use crate::ScoutError;
use reqwest::Client;

/// Main search coordinator structure
pub struct Coordinator<M = NumberingPlanMatcher> {
    client: Client,
    matcher: M,
}

impl Coordinator<NumberingPlanMatcher> {
    /// Creates a coordinator using the built-in numbering plan matcher
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScoutError)` - Failed to build the HTTP client
    pub fn new(config: &Config) -> Result<Self, ScoutError> {
        let matcher = NumberingPlanMatcher::new(config.matcher.max_candidates);
        Self::with_matcher(config, matcher)
    }
}

impl<M: PhoneMatcher> Coordinator<M> {
    /// Creates a coordinator with a custom phone matcher
    pub fn with_matcher(config: &Config, matcher: M) -> Result<Self, ScoutError> {
        let client = build_http_client(&config.fetcher)?;
        Ok(Self { client, matcher })
    }

    /// Fetches and parses one page
    pub async fn fetch_page(&self, url: &str) -> Result<Page, ScoutError> {
        let html = fetch_html(&self.client, url).await?;
        Ok(parse_page(&html, url))
    }

    /// Finds the main contact number for the site at `url`
    ///
    /// # Returns
    ///
    /// * `Ok(Some(number))` - A number was found on the home or contact page
    /// * `Ok(None)` - Neither page held a number, or no contact link exists
    /// * `Err(ScoutError)` - A page could not be fetched
    pub async fn find_number(&self, url: &str) -> Result<Option<CandidateNumber>, ScoutError> {
        let home_page = self.fetch_page(url).await?;

        if let Some(number) = scan(&home_page, &self.matcher) {
            tracing::info!("Number found on home page {}", url);
            return Ok(Some(number));
        }

        tracing::info!("No number on home page, looking for a contact page");
        self.locate_and_rescan(&home_page).await
    }

    /// Follows the home page's contact link and scans the target page
    ///
    /// The link target is resolved against the home page URL with
    /// [`resolve_contact_url`], and the resolved URL is the one checked for
    /// the German host marker. Only one hop is ever made.
    pub async fn locate_and_rescan(
        &self,
        home_page: &Page,
    ) -> Result<Option<CandidateNumber>, ScoutError> {
        let contact = match select_contact_link(&home_page.links) {
            Some(contact) => contact,
            None => {
                tracing::info!("No contact link found on {}", home_page.url);
                return Ok(None);
            }
        };

        let contact_url = resolve_contact_url(&home_page.url, &contact.href);
        tracing::info!(
            "Following '{}' link to {}",
            contact.indicator,
            contact_url
        );

        let contact_page = self.fetch_page(&contact_url).await?;
        Ok(scan(&contact_page, &self.matcher))
    }
}
