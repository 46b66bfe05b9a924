/// Substring that marks a URL as German for the purpose of region selection
const GERMAN_MARKER: &str = ".de";

/// Returns true if the URL looks like it belongs to a German site
///
/// This is a plain substring test on the whole URL string, not a check of the
/// host's top-level domain. It also fires for `.de` anywhere in the path or for
/// hosts such as `www.delta.com`.
///
/// # Examples
///
/// ```
/// use phone_scout::url::suggests_german_host;
///
/// assert!(suggests_german_host("https://www.bosch.de/"));
/// assert!(suggests_german_host("https://example.com/info.de/kontakt"));
/// assert!(!suggests_german_host("https://www.bosch.com/"));
/// ```
pub fn suggests_german_host(url: &str) -> bool {
    url.contains(GERMAN_MARKER)
}
