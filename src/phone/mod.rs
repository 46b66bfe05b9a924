//! Phone number discovery
//!
//! This module contains the region-aware matcher that recognizes phone numbers
//! in free text and the scanner that applies it to a parsed page in a fixed
//! region and document order.

mod matcher;
mod region;
mod scanner;

pub use matcher::{NumberingPlanMatcher, PhoneMatch, PhoneMatcher};
pub use region::RegionHint;
pub use scanner::{scan, CandidateNumber};
