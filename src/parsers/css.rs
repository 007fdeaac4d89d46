//! CSS reference engine.
//!
//! Tokenizes `url(...)` occurrences in CSS text and extracts or rewrites
//! the referenced URLs under a caller-supplied edit policy. Only `url()`
//! tokens are handled; bare `@import "..."` strings and inline `style`
//! attributes are out of scope.

use regex::{Captures, Regex};
use tracing::debug;

use crate::utils::mime::MimeTable;
use crate::utils::uri::{is_absolute, rebase};

// Matches url( <optional quote> <anything but quote or paren> <matching
// quote> ), case-insensitive, one match per occurrence. The leading
// keyword is spelled as character classes so no Unicode case folding is
// needed.
const CSS_URL_PATTERN: &str = r#"[uU][rR][lL]\s*\(\s*(?:"[^"')]*"|'[^"')]*'|[^"')]*)\s*\)"#;

/// Reduce a matched `url(...)` token to the logical URL it wraps.
///
/// The strip order matters: drop all whitespace, drop the `url(`/`)`
/// wrapper, drop quote characters, then normalize backslashes to forward
/// slashes.
fn logical_url(token: &str) -> String {
    let compact: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    compact[4..compact.len() - 1]
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .map(|c| if c == '\\' { '/' } else { c })
        .collect()
}

/// Extract every `url()` reference from CSS text, in document order,
/// duplicates included.
///
/// When `document_key` is given, relative references are rebased against
/// it; otherwise the raw logical URL is returned. References that are
/// empty after token normalization are dropped.
pub fn extract_css_refs(css: &str, document_key: Option<&str>) -> Vec<String> {
    let token_regex = Regex::new(CSS_URL_PATTERN).unwrap();

    let mut refs = Vec::new();
    for token in token_regex.find_iter(css) {
        let mut url = logical_url(token.as_str());
        if let Some(key) = document_key {
            if !is_absolute(&url) {
                url = rebase(key, &url);
            }
        }
        if !url.is_empty() {
            refs.push(url);
        }
    }

    debug!(count = refs.len(), "extracted css references");
    refs
}

/// Rewrite `url()` references in CSS text under an edit policy.
///
/// The policy is invoked once per occurrence with the rebased URL (raw
/// logical URL when `document_key` is absent or the reference is
/// absolute), its MIME type, and its absoluteness. A non-empty return
/// value replaces the whole token with `url(<value>)`; anything else
/// leaves the original token byte-for-byte untouched, as do references
/// that are empty after token normalization. A policy that always returns
/// `None` therefore yields output identical to the input.
pub fn rewrite_css_refs<F>(
    css: &str,
    document_key: Option<&str>,
    mimes: &MimeTable,
    edit: F,
) -> String
where
    F: Fn(&str, &str, bool) -> Option<String>,
{
    let token_regex = Regex::new(CSS_URL_PATTERN).unwrap();

    token_regex
        .replace_all(css, |caps: &Captures| {
            let token = &caps[0];
            let mut url = logical_url(token);
            if url.is_empty() {
                return token.to_string();
            }

            let absolute = is_absolute(&url);
            if let Some(key) = document_key {
                if !absolute {
                    url = rebase(key, &url);
                }
            }

            match edit(&url, mimes.mime_for(&url), absolute) {
                Some(replacement) if !replacement.is_empty() => format!("url({})", replacement),
                _ => token.to_string(),
            }
        })
        .into_owned()
}
