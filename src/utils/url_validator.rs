//! Acceptance rule for original URLs.
//!
//! A URL is accepted when it is an absolute `http`/`https` URL with an
//! explicit `scheme://` prefix and a host that is either an IP literal or a
//! fully qualified domain name ending in a real-looking top-level domain.

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};

/// Longest URL accepted, matching common browser limits.
pub const MAX_URL_LENGTH: usize = 2083;

/// A single domain label after IDNA conversion.
static LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$").unwrap());

/// Top-level domain: alphabetic, or a punycode label.
static TLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z]{2,63}|xn--[a-z0-9-]{2,59})$").unwrap());

/// Returns `true` if `candidate` is an acceptable original URL.
///
/// # Rules
///
/// 1. Not empty, not whitespace-only, at most [`MAX_URL_LENGTH`] characters
/// 2. No whitespace, `<` or `>` anywhere
/// 3. Explicit `http://` or `https://` prefix (scheme is case-insensitive)
/// 4. A host: IPv4/IPv6 literal, or a domain with at least two labels and a valid TLD
/// 5. Port, if any, between 1 and 65535
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/page"));
/// assert!(!is_valid_url("example.com"));
/// assert!(!is_valid_url("ftp://example.com"));
/// assert!(!is_valid_url("http://localhost"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.trim().is_empty() || candidate.len() > MAX_URL_LENGTH {
        return false;
    }

    if candidate
        .chars()
        .any(|c| c.is_whitespace() || c == '<' || c == '>')
    {
        return false;
    }

    let Some((scheme, rest)) = candidate.split_once("://") else {
        return false;
    };

    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return false;
    }

    // `url` tolerates `http:///host`; an empty authority is not a host.
    if rest.starts_with(['/', '\\']) {
        return false;
    }

    let Ok(url) = Url::parse(candidate) else {
        return false;
    };

    if url.port() == Some(0) {
        return false;
    }

    match url.host() {
        Some(Host::Domain(domain)) => is_fully_qualified(domain),
        Some(Host::Ipv4(addr)) => raw_host(rest) == addr.to_string(),
        Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Checks the label structure of an (already IDNA-encoded, lowercased) domain.
fn is_fully_qualified(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();

    let Some((tld, _)) = labels.split_last() else {
        return false;
    };

    labels.len() >= 2
        && TLD_REGEX.is_match(tld)
        && labels.iter().all(|label| LABEL_REGEX.is_match(label))
}

/// Host text as written, without userinfo or port.
///
/// `url` normalizes shorthand such as `http://12345` into a dotted IPv4
/// address; comparing against the raw text rejects those.
fn raw_host(rest: &str) -> &str {
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);

    host_port.split(':').next().unwrap_or_default()
}
