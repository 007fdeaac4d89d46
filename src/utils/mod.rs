//! Utility modules shared by the reference engines:
//!
//! - `uri` - URL classification and rebasing against a document key
//! - `mime` - file-extension to MIME type lookup

pub mod mime;
pub mod uri;

// Re-export commonly used items for convenience
pub use mime::MimeTable;
pub use uri::{is_absolute, rebase};
