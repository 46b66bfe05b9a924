/// Turns a contact link target into the URL that will be fetched
///
/// This is plain string concatenation, not RFC 3986 reference resolution.
/// The branches are tried in order:
///
/// 1. If `base` appears anywhere inside `target`, `target` is used as is.
/// 2. If `base` ends with `/`, that slash is dropped and `target` appended.
/// 3. Otherwise `target` is appended to `base` directly.
///
/// Protocol-relative (`//host/x`) and parent-relative (`../x`) targets are
/// appended like any other string, and a relative target without a leading
/// slash is glued straight onto the base.
///
/// # Examples
///
/// ```
/// use phone_scout::url::resolve_contact_url;
///
/// assert_eq!(
///     resolve_contact_url("https://example.com/", "/contact"),
///     "https://example.com/contact"
/// );
/// assert_eq!(
///     resolve_contact_url("https://example.com", "https://example.com/contact"),
///     "https://example.com/contact"
/// );
/// ```
pub fn resolve_contact_url(base: &str, target: &str) -> String {
    if target.contains(base) {
        target.to_string()
    } else if let Some(stripped) = base.strip_suffix('/') {
        format!("{}{}", stripped, target)
    } else {
        format!("{}{}", base, target)
    }
}
