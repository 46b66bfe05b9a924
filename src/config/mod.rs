//! Configuration module for Phone-Scout
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so running without a file
//! behaves exactly like running with an empty one.
//!
//! # Example
//!
//! ```no_run
//! use phone_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Fetch timeout: {}s", config.fetcher.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{Config, FetcherConfig, MatcherConfig};

pub use parser::{load_config, load_config_or_default, parse_config};
