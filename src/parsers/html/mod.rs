//! HTML reference engine.
//!
//! Walks a parsed document for a fixed table of (tag, attribute) rules
//! naming elements that load external assets, plus anchor elements for
//! navigation links, and extracts or rewrites the referenced URLs under a
//! caller-supplied edit policy.

pub mod dom;

pub use dom::{get_node_attr, html_to_dom, select_elements, serialize_dom, set_node_attr};

use markup5ever_rcdom::RcDom;
use tracing::debug;

use crate::core::DocrefError;
use crate::utils::mime::MimeTable;
use crate::utils::uri::{is_absolute, rebase};

/// One reference-producing (tag, attribute) pair, with an optional
/// attribute-equality guard on the tag.
struct RefRule {
    tag: &'static str,
    predicate: Option<(&'static str, &'static str)>,
    attr: &'static str,
}

/// Elements that load external assets, in the order rules are applied.
///
/// Anchors are deliberately absent: a hyperlink is navigation, not a
/// resource dependency.
const RESOURCE_RULES: &[RefRule] = &[
    RefRule {
        tag: "link",
        predicate: Some(("rel", "stylesheet")),
        attr: "href",
    },
    RefRule {
        tag: "link",
        predicate: Some(("rel", "shortcut icon")),
        attr: "href",
    },
    RefRule {
        tag: "img",
        predicate: None,
        attr: "src",
    },
    RefRule {
        tag: "script",
        predicate: None,
        attr: "src",
    },
    RefRule {
        tag: "iframe",
        predicate: None,
        attr: "src",
    },
];

/// Navigation links.
const LINK_RULES: &[RefRule] = &[RefRule {
    tag: "a",
    predicate: None,
    attr: "href",
}];

/// Extract resource references (stylesheets, shortcut icons, images,
/// scripts, frames) from a parsed document.
///
/// Rules apply in table order, elements in document order within each
/// rule. Relative references are rebased against `document_key` when it is
/// given; absent attributes contribute nothing and empty resolved values
/// are dropped. Order and duplicates are preserved.
pub fn extract_html_refs(dom: &RcDom, document_key: Option<&str>) -> Vec<String> {
    let refs = extract_refs(dom, RESOURCE_RULES, document_key);
    debug!(count = refs.len(), "extracted html resource references");
    refs
}

/// Extract navigation links (`a@href`) from a parsed document.
///
/// Same resolution and ordering rules as [`extract_html_refs`]; resource
/// elements are never touched.
pub fn extract_html_links(dom: &RcDom, document_key: Option<&str>) -> Vec<String> {
    let refs = extract_refs(dom, LINK_RULES, document_key);
    debug!(count = refs.len(), "extracted html navigation links");
    refs
}

/// Rewrite resource references in a parsed document under an edit policy,
/// then serialize and return the whole document.
///
/// For each matched element the policy receives the rebased URL, its MIME
/// type, and its absoluteness; a non-empty return value overwrites the
/// attribute, anything else leaves it untouched. Elements without the
/// rule's attribute are skipped. Round-tripping through the DOM may
/// normalize unrelated markup; untouched attribute values survive
/// verbatim.
pub fn rewrite_html_refs<F>(
    dom: &RcDom,
    document_key: Option<&str>,
    mimes: &MimeTable,
    edit: F,
) -> Result<String, DocrefError>
where
    F: Fn(&str, &str, bool) -> Option<String>,
{
    rewrite_refs(dom, RESOURCE_RULES, document_key, mimes, &edit)
}

/// Rewrite navigation links under an edit policy, then serialize and
/// return the whole document.
pub fn rewrite_html_links<F>(
    dom: &RcDom,
    document_key: Option<&str>,
    mimes: &MimeTable,
    edit: F,
) -> Result<String, DocrefError>
where
    F: Fn(&str, &str, bool) -> Option<String>,
{
    rewrite_refs(dom, LINK_RULES, document_key, mimes, &edit)
}

fn extract_refs(dom: &RcDom, rules: &[RefRule], document_key: Option<&str>) -> Vec<String> {
    let mut refs = Vec::new();

    for rule in rules {
        for node in select_elements(&dom.document, rule.tag, rule.predicate) {
            let Some(mut url) = get_node_attr(&node, rule.attr) else {
                continue;
            };
            if let Some(key) = document_key {
                if !is_absolute(&url) {
                    url = rebase(key, &url);
                }
            }
            if !url.is_empty() {
                refs.push(url);
            }
        }
    }

    refs
}

fn rewrite_refs<F>(
    dom: &RcDom,
    rules: &[RefRule],
    document_key: Option<&str>,
    mimes: &MimeTable,
    edit: &F,
) -> Result<String, DocrefError>
where
    F: Fn(&str, &str, bool) -> Option<String>,
{
    for rule in rules {
        for node in select_elements(&dom.document, rule.tag, rule.predicate) {
            let Some(mut url) = get_node_attr(&node, rule.attr) else {
                continue;
            };

            let absolute = is_absolute(&url);
            if let Some(key) = document_key {
                if !absolute {
                    url = rebase(key, &url);
                }
            }

            if let Some(replacement) = edit(&url, mimes.mime_for(&url), absolute) {
                if !replacement.is_empty() {
                    set_node_attr(&node, rule.attr, &replacement);
                }
            }
        }
    }

    let buf = serialize_dom(dom, "")?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
