//! Crate error type and the edit-policy contract shared by the reference
//! engines.
//!
//! Malformed references never produce errors: an unmatched attribute, an
//! empty `url()` token, or an unknown file extension all fall back to the
//! permissive behavior documented on each engine. The only failures that
//! surface to the caller come from the DOM collaborator itself.

use std::io;

use thiserror::Error;

/// Errors raised while round-tripping a document through the DOM.
#[derive(Debug, Error)]
pub enum DocrefError {
    /// The DOM collaborator could not parse the document bytes.
    #[error("unable to parse document: {0}")]
    Parse(#[source] io::Error),

    /// The DOM collaborator could not serialize the document tree.
    #[error("unable to serialize document: {0}")]
    Serialize(#[source] io::Error),
}

// The edit policy passed to the rewrite operations is a plain closure of
// shape `Fn(url, mime, is_absolute) -> Option<String>`, invoked once per
// reference occurrence. Returning None (or an empty string) keeps the
// original reference text; returning a non-empty string replaces it
// verbatim.
