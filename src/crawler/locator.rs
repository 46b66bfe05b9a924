//! Contact page discovery
//!
//! Picks the home page link most likely to lead to the company's contact
//! details, using a fixed keyword list checked against the visible link text.

use crate::crawler::parser::Hyperlink;

/// Keywords marking a contact link, in priority order
pub const CONTACT_INDICATORS: [&str; 3] = ["kontakt", "contact", "company"];

/// A link chosen as the way to the contact page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    /// The keyword that matched the link text
    pub indicator: &'static str,
    /// The link's raw `href` target
    pub href: String,
}

/// Selects the contact link among a page's hyperlinks
///
/// Keywords are tried in [`CONTACT_INDICATORS`] order; for each keyword the
/// links are walked in document order and the first one whose lower-cased,
/// trimmed text contains the keyword is taken. If that link has no usable
/// `href`, the next keyword is tried; later links matching the same keyword
/// are not considered.
///
/// # Example
///
/// ```
/// use phone_scout::crawler::{select_contact_link, Hyperlink};
///
/// let links = vec![
///     Hyperlink { text: "Contact Us".to_string(), href: Some("/contact".to_string()) },
///     Hyperlink { text: "Kontakt".to_string(), href: Some("/kontakt".to_string()) },
/// ];
/// let chosen = select_contact_link(&links).unwrap();
/// assert_eq!(chosen.href, "/kontakt");
/// ```
pub fn select_contact_link(links: &[Hyperlink]) -> Option<ContactLink> {
    for indicator in CONTACT_INDICATORS {
        let Some(link) = links
            .iter()
            .find(|link| link.text.trim().to_lowercase().contains(indicator))
        else {
            continue;
        };

        match link.href.as_deref().filter(|href| !href.is_empty()) {
            Some(href) => {
                tracing::debug!("Contact link '{}' matched indicator '{}'", href, indicator);
                return Some(ContactLink {
                    indicator,
                    href: href.to_string(),
                });
            }
            None => {
                tracing::debug!(
                    "Link '{}' matched indicator '{}' but has no target",
                    link.text.trim(),
                    indicator
                );
            }
        }
    }

    None
}
