//! Phone-Scout: finds a company's main contact number on its website
//!
//! The home page is scanned for the first phone-number-shaped text. When it has
//! none, a single "contact" link is followed and the target page is scanned once.

pub mod config;
pub mod crawler;
pub mod phone;
pub mod url;

use thiserror::Error;

/// Main error type for Phone-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised by a phone matcher while scanning one text
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Gave up after trying {tried} candidates")]
    CandidateLimit { tried: usize },

    #[error("Matcher failure: {0}")]
    Other(String),
}

/// Result type alias for Phone-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for matcher operations
pub type MatchResult<T> = std::result::Result<T, MatchError>;

/// Message printed when no number is found on either page
pub const NOT_FOUND_MESSAGE: &str = "Number cannot be found";

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, Page};
pub use phone::{scan, CandidateNumber, NumberingPlanMatcher, PhoneMatcher, RegionHint};
