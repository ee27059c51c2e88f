//! Normalization of user-entered link destinations.
//!
//! Link URLs are sanitized before they enter a [`crate::domain::entities::Link`].
//! The store itself never re-checks them.

use url::Url;

const HTTPS_PREFIX: &str = "https://";
const HTTP_PREFIX: &str = "http://";

/// Sanitizes a link destination.
///
/// # Rules
///
/// 1. **Absolute http/https URL**: returned in canonical form
///    (lowercase host, trailing slash on an empty path, default port dropped)
/// 2. **Absolute URL with another scheme**: rejected, returns an empty string
/// 3. **Not parseable**: `https://` is prepended (unless already present) and
///    the result is parsed again; if that parse succeeds the canonical form is
///    returned, otherwise the concatenation is returned as is
///
/// The last branch means a string such as `not a url` comes back as
/// `https://not a url`. Callers that need a guarantee should also check
/// [`is_web_url`].
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:`, `mailto:` and any other non-web scheme.
///
/// # Examples
///
/// ```
/// use linkbio::utils::url_sanitizer::sanitize_url;
///
/// assert_eq!(sanitize_url("example.com"), "https://example.com/");
/// assert_eq!(sanitize_url("https://a.com"), "https://a.com/");
/// assert_eq!(sanitize_url("ftp://x.com"), "");
/// ```
pub fn sanitize_url(input: &str) -> String {
    match Url::parse(input) {
        Ok(url) => canonical_web_url(&url).unwrap_or_default(),
        Err(_) => {
            let prefixed = if input.starts_with(HTTP_PREFIX) || input.starts_with(HTTPS_PREFIX) {
                input.to_string()
            } else {
                format!("{HTTPS_PREFIX}{input}")
            };

            match Url::parse(&prefixed) {
                Ok(url) => canonical_web_url(&url).unwrap_or(prefixed),
                Err(_) => {
                    tracing::debug!(input, "URL kept unvalidated after prefixing");
                    prefixed
                }
            }
        }
    }
}

/// Returns `true` if `input` parses as an absolute http(s) URL with a host.
pub fn is_web_url(input: &str) -> bool {
    Url::parse(input)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

fn canonical_web_url(url: &Url) -> Option<String> {
    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}
