//! Reference engines for the supported document types.
//!
//! - `css` - `url(...)` references in stylesheet text
//! - `html` - resource and navigation references in parsed documents

pub mod css;
pub mod html;

// Re-export commonly used items for convenience
pub use css::{extract_css_refs, rewrite_css_refs};
pub use html::{
    extract_html_links, extract_html_refs, html_to_dom, rewrite_html_links, rewrite_html_refs,
    serialize_dom,
};
