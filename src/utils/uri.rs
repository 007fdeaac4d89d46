//! URL classification and rebasing.
//!
//! Document keys are paths relative to a shared root (typically file
//! paths). Rebasing turns a reference found inside a document into a path
//! relative to that same root. Everything here is pure string
//! manipulation; no filesystem access, no symlink resolution.

/// Test whether a URL is absolute.
///
/// An empty URL counts as absolute, vacuously, so callers never attempt to
/// rebase it. Otherwise a URL is absolute when it starts with a scheme
/// (`https:`, `ftp:`, `data:`, ...), with `//` (protocol-relative), or
/// with `#` (fragment-only).
pub fn is_absolute(url: &str) -> bool {
    if url.is_empty() {
        return true;
    }
    if url.starts_with("//") || url.starts_with('#') {
        return true;
    }
    match url.find(':') {
        Some(i) if i > 0 => url[..i].bytes().all(|b| b.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Rebase a reference found in `document_key` onto the document's root.
///
/// An empty reference stays empty, and a root-relative reference (leading
/// `/`) is already rebased. Anything else is joined against the directory
/// of `document_key`, collapsing `.` and `..` segments. A leading `..`
/// that escapes the root is kept rather than dropped.
pub fn rebase(document_key: &str, url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.starts_with('/') {
        return url.to_string();
    }

    let base_dir = match document_key.rfind('/') {
        Some(i) => &document_key[..i],
        None => "",
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in base_dir.split('/').chain(url.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(&last) if last != "..") {
                    segments.pop();
                } else {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let mut joined = segments.join("/");
    if joined.is_empty() {
        return ".".to_string();
    }
    if url.ends_with('/') {
        joined.push('/');
    }
    joined
}
