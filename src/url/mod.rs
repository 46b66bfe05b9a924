//! URL handling module for Phone-Scout
//!
//! This module provides the string-level contact link resolver and the host
//! heuristic that gates the German region pass.

mod domain;
mod resolve;

pub use domain::suggests_german_host;
pub use resolve::resolve_contact_url;
