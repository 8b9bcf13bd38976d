//! Host Normalization
//!
//! Blocked-domain entries are stored as bare hosts. A full URL pasted into
//! the field is reduced to its host (plus any explicit port); anything that
//! does not parse as an absolute URL with a host is kept verbatim.

use url::Url;

/// Normalize a raw blocked-domain entry before it is stored.
///
/// `"https://example.com/path"` becomes `"example.com"`,
/// `"example.org"` stays `"example.org"`.
pub fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    if Url::parse(trimmed).map(|u| u.has_host()).unwrap_or(false) {
        if let Some(host) = authority_of(trimmed) {
            return host.to_string();
        }
    }
    trimmed.to_string()
}

/// Slice the host[:port] out of the original text so the user's casing
/// survives (`Url` lowercases hosts on parse).
fn authority_of(raw: &str) -> Option<&str> {
    let rest = raw.split_once("://")?.1;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if host.is_empty() { None } else { Some(host) }
}

/// Whether a value is an absolute URL over a secure transport.
///
/// The federation enable toggle requires this of the instance URL; an empty
/// or plain-http value fails.
pub fn is_secure_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => url.scheme() == "https" && url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_reduced_to_host() {
        assert_eq!(normalize_domain("https://example.com/path"), "example.com");
    }

    #[test]
    fn bare_token_kept_verbatim() {
        assert_eq!(normalize_domain("example.org"), "example.org");
    }

    #[test]
    fn explicit_port_and_casing_survive() {
        assert_eq!(
            normalize_domain("http://Bad.Domain:8080/x"),
            "Bad.Domain:8080"
        );
    }

    #[test]
    fn userinfo_is_stripped() {
        assert_eq!(normalize_domain("https://user:pw@host.tld/p"), "host.tld");
    }

    #[test]
    fn whitespace_trimmed() {
        assert_eq!(normalize_domain("  example.net  "), "example.net");
    }

    #[test]
    fn secure_url_requires_https_and_host() {
        assert!(is_secure_url("https://live.example.com"));
        assert!(!is_secure_url("http://live.example.com"));
        assert!(!is_secure_url(""));
        assert!(!is_secure_url("not a url"));
    }
}
