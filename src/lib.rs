//! # docref
//!
//! Extracts and rewrites external resource references (stylesheets,
//! images, scripts, frames, icons, hyperlinks) embedded in HTML and CSS
//! documents, and propagates reference lists across documents that
//! reference each other.
//!
//! All operations are synchronous and free of shared state: extraction and
//! rewriting work on caller-supplied text or parsed documents, and the
//! graph closure mutates only the map it is handed. File I/O, networking,
//! and CLI concerns belong to whatever layer drives this library.
//!
//! ## Module organization
//!
//! - `core` - crate error type and shared contracts
//! - `graph` - reference-graph closure ("infection")
//! - `parsers` - reference engines (HTML, CSS)
//! - `utils` - URL rebasing and MIME lookup

pub mod core;
pub mod graph;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::DocrefError;
pub use crate::graph::{infect, ReferenceMap};
pub use crate::parsers::css::{extract_css_refs, rewrite_css_refs};
pub use crate::parsers::html::{
    extract_html_links, extract_html_refs, html_to_dom, rewrite_html_links, rewrite_html_refs,
    serialize_dom,
};
pub use crate::utils::mime::MimeTable;
pub use crate::utils::uri::{is_absolute, rebase};
