//! Region-aware phone number recognition
//!
//! Phone-shaped runs of text are located with a regular expression and then
//! checked against the numbering plan selected by a [`RegionHint`]. Numbers in
//! international form (`+` prefix) are accepted under every hint; national
//! formats are only accepted under their own region.

use crate::phone::region::RegionHint;
use crate::{MatchError, MatchResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Optional "+" or "(", then digits joined by at most three separator characters
    static ref CANDIDATE_PATTERN: Regex =
        Regex::new(r"[+(]?\d(?:[ \t\x{00A0}\-./()]{0,3}\d)*").unwrap();
}

/// A phone number found in a text, exactly as it was written there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneMatch {
    /// The matched substring, unmodified
    pub raw: String,
    /// Byte offset of the match within the scanned text
    pub start: usize,
}

/// Recognizes phone numbers in free text under a region assumption
pub trait PhoneMatcher {
    /// Returns the first number in `text` that is valid under `hint`
    ///
    /// * `Ok(Some(_))` - a number was recognized
    /// * `Ok(None)` - the text holds no valid number
    /// * `Err(MatchError)` - the matcher could not finish scanning the text
    fn find_first(&self, text: &str, hint: RegionHint) -> MatchResult<Option<PhoneMatch>>;
}

/// Phone matcher backed by simplified national numbering plans
#[derive(Debug, Clone)]
pub struct NumberingPlanMatcher {
    max_candidates: usize,
}

impl NumberingPlanMatcher {
    /// Creates a matcher that gives up after `max_candidates` candidates per text
    pub fn new(max_candidates: usize) -> Self {
        Self { max_candidates }
    }
}

impl Default for NumberingPlanMatcher {
    fn default() -> Self {
        Self::new(crate::config::MatcherConfig::default().max_candidates)
    }
}

impl PhoneMatcher for NumberingPlanMatcher {
    fn find_first(&self, text: &str, hint: RegionHint) -> MatchResult<Option<PhoneMatch>> {
        for (tried, candidate) in CANDIDATE_PATTERN.find_iter(text).enumerate() {
            if tried >= self.max_candidates {
                return Err(MatchError::CandidateLimit { tried });
            }

            let start = candidate.start();
            if preceded_by_word(text, start) {
                continue;
            }

            // Trailing digits may belong to opening hours or an extension
            for end in digit_run_ends(candidate.as_str()).into_iter().rev() {
                if followed_by_word(text, start + end) {
                    continue;
                }

                let raw = &candidate.as_str()[..end];
                if is_valid_number(raw, hint) {
                    return Ok(Some(PhoneMatch {
                        raw: raw.to_string(),
                        start,
                    }));
                }
            }
        }

        Ok(None)
    }
}

/// Byte offsets, in increasing order, where a run of digits ends in `candidate`
///
/// The last offset is always the full candidate length.
fn digit_run_ends(candidate: &str) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut previous_was_digit = false;

    for (index, c) in candidate.char_indices() {
        if previous_was_digit && !c.is_ascii_digit() {
            ends.push(index);
        }
        previous_was_digit = c.is_ascii_digit();
    }

    ends.push(candidate.len());
    ends
}

fn preceded_by_word(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_some_and(char::is_alphanumeric)
}

fn followed_by_word(text: &str, end: usize) -> bool {
    text[end..].chars().next().is_some_and(char::is_alphanumeric)
}

/// Checks a raw candidate against the numbering plan for `hint`
fn is_valid_number(raw: &str, hint: RegionHint) -> bool {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if raw.starts_with('+') {
        return is_valid_international(&digits);
    }

    let national = match hint {
        RegionHint::International => false,
        RegionHint::Poland => is_valid_polish(&digits),
        RegionHint::UnitedStates => is_valid_north_american(&digits),
        RegionHint::Germany => is_valid_german_trunk(&digits),
    };

    national
        || hint
            .idd_prefix()
            .and_then(|prefix| digits.strip_prefix(prefix))
            .is_some_and(is_valid_international)
}

/// Validates digits that start with a country calling code
fn is_valid_international(digits: &str) -> bool {
    if let Some(national) = digits.strip_prefix('1') {
        return is_nanp_number(national);
    }
    if let Some(national) = digits.strip_prefix("48") {
        return national.len() == 9 && !national.starts_with('0');
    }
    if let Some(national) = digits.strip_prefix("49") {
        return (6..=13).contains(&national.len()) && !national.starts_with('0');
    }

    (8..=15).contains(&digits.len()) && !digits.starts_with('0')
}

/// Ten digits with an area code that does not start with 0 or 1
fn is_nanp_number(digits: &str) -> bool {
    digits.len() == 10 && digits.starts_with(|c: char| ('2'..='9').contains(&c))
}

fn is_valid_polish(digits: &str) -> bool {
    digits.len() == 9 && !digits.starts_with('0')
}

fn is_valid_north_american(digits: &str) -> bool {
    if is_nanp_number(digits) {
        return true;
    }
    digits
        .strip_prefix('1')
        .is_some_and(is_nanp_number)
}

/// Trunk-prefixed German number: "0", a non-zero digit, 6 to 14 digits in all
fn is_valid_german_trunk(digits: &str) -> bool {
    let mut chars = digits.chars();
    (6..=14).contains(&digits.len())
        && chars.next() == Some('0')
        && chars.next().is_some_and(|c| c != '0')
}
