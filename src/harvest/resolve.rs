// src/harvest/resolve.rs
// =============================================================================
// Turns candidate links into absolute URLs.
//
// Resolution is a plain string prefix, not a relative-URL join: every link
// found on the page is assumed to be relative to the site root. The result
// is then checked so obviously broken strings never reach the downloader.
//
// The `url` crate alone is too forgiving for that check: it quietly
// re-encodes things like a stray "%zz" or a control character. Those are
// rejected up front, then the `url` crate decides the rest.
// =============================================================================

use url::Url;

/// `base` + `link`, verbatim
pub fn resolve_link(base: &str, link: &str) -> String {
    format!("{}{}", base, link)
}

/// True if `candidate` is a well-formed absolute URL
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.chars().any(|c| c.is_ascii_control()) {
        return false;
    }

    // Escapes are only checked up to the query; the query is kept raw
    let before_query = candidate.split('?').next().unwrap_or(candidate);
    if !has_valid_escapes(before_query) {
        return false;
    }

    Url::parse(candidate).is_ok()
}

// Every '%' must be followed by two hex digits
fn has_valid_escapes(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some(pair) if pair.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
