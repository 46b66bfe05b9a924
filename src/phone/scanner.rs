use crate::crawler::{Page, TextElement};
use crate::phone::matcher::{PhoneMatch, PhoneMatcher};
use crate::phone::region::RegionHint;
use crate::url::suggests_german_host;
use std::fmt;

/// A phone number found on a page, exactly as it was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateNumber {
    raw: String,
    region: RegionHint,
}

impl CandidateNumber {
    pub fn new(raw: impl Into<String>, region: RegionHint) -> Self {
        Self {
            raw: raw.into(),
            region,
        }
    }

    /// The matched text, unmodified
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The region pass that recognized the number
    pub fn region(&self) -> RegionHint {
        self.region
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for CandidateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Searches a page for its first phone number
///
/// Region passes run in [`RegionHint::SCAN_ORDER`]. Each pass walks the
/// paragraph, anchor, span and block elements in document order and stops at
/// the first element holding a valid number; no later element or region is
/// looked at once a number is found. The German pass is skipped unless the
/// page URL suggests a German site.
///
/// A matcher error on one element counts as no match for that element.
pub fn scan<M: PhoneMatcher + ?Sized>(page: &Page, matcher: &M) -> Option<CandidateNumber> {
    let elements: Vec<&TextElement> = page
        .elements
        .iter()
        .filter(|element| element.tag.is_scannable())
        .collect();

    for region in RegionHint::SCAN_ORDER {
        if region == RegionHint::Germany && !suggests_german_host(&page.url) {
            tracing::trace!("Skipping DE pass for {}", page.url);
            continue;
        }

        for element in &elements {
            if let Some(found) = first_match(matcher, &element.text, region) {
                tracing::debug!(
                    "Found {} on {} in region pass {}",
                    found.raw,
                    page.url,
                    region
                );
                return Some(CandidateNumber::new(found.raw, region));
            }
        }
    }

    tracing::debug!("No number found on {}", page.url);
    None
}

fn first_match<M: PhoneMatcher + ?Sized>(
    matcher: &M,
    text: &str,
    region: RegionHint,
) -> Option<PhoneMatch> {
    match matcher.find_first(text, region) {
        Ok(found) => found,
        Err(e) => {
            tracing::trace!("Matcher failed in region pass {}: {}", region, e);
            None
        }
    }
}
