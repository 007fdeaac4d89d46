//! DOM plumbing for the HTML reference engine.
//!
//! Wraps the html5ever collaborator: parsing document bytes (with charset
//! awareness), document-order element selection with attribute-equality
//! predicates, attribute access, and serialization back to markup.
//! Serialization round-trips the whole tree, so markup the engine never
//! touched may still come back normalized.

use encoding_rs::Encoding;
use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::{format_tendril, TendrilSink};
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::core::DocrefError;

/// Parse HTML bytes into a DOM.
///
/// `document_encoding` is a charset label; when it names a known encoding
/// the bytes are decoded with it, otherwise they are read as UTF-8 with
/// lossy replacement.
pub fn html_to_dom(data: &[u8], document_encoding: &str) -> Result<RcDom, DocrefError> {
    let s: String = if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        string.to_string()
    } else {
        String::from_utf8_lossy(data).to_string()
    };

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
        .map_err(DocrefError::Parse)
}

/// Serialize a DOM back to HTML bytes.
///
/// A non-empty `document_encoding` naming a known encoding re-encodes the
/// output; otherwise the bytes are UTF-8.
pub fn serialize_dom(dom: &RcDom, document_encoding: &str) -> Result<Vec<u8>, DocrefError> {
    let mut buf: Vec<u8> = Vec::new();

    let serializable: SerializableHandle = dom.document.clone().into();
    serialize(&mut buf, &serializable, SerializeOpts::default())
        .map_err(DocrefError::Serialize)?;

    if !document_encoding.is_empty() {
        if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
            let s: &str = &String::from_utf8_lossy(&buf);
            let (data, _, _) = encoding.encode(s);
            buf = data.to_vec();
        }
    }

    Ok(buf)
}

/// Collect the elements under `node` whose tag equals `tag`, in document
/// order. A predicate of `(attribute, value)` additionally requires exact
/// attribute equality.
pub fn select_elements(node: &Handle, tag: &str, predicate: Option<(&str, &str)>) -> Vec<Handle> {
    let mut found = Vec::new();
    collect_elements(node, tag, predicate, &mut found);
    found
}

fn collect_elements(
    node: &Handle,
    tag: &str,
    predicate: Option<(&str, &str)>,
    found: &mut Vec<Handle>,
) {
    if let NodeData::Element { ref name, .. } = node.data {
        if &*name.local == tag {
            let matches = match predicate {
                Some((attr_name, expected)) => {
                    get_node_attr(node, attr_name).as_deref() == Some(expected)
                }
                None => true,
            };
            if matches {
                found.push(node.clone());
            }
        }
    }

    for child in node.children.borrow().iter() {
        collect_elements(child, tag, predicate, found);
    }
}

/// Read a named attribute off an element node.
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Overwrite a named attribute on an element node, adding it when absent.
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        match attrs.iter().position(|attr| &*attr.name.local == attr_name) {
            Some(i) => {
                attrs[i].value.clear();
                attrs[i].value.push_slice(attr_value);
            }
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(attr_name)),
                value: format_tendril!("{}", attr_value),
            }),
        }
    }
}
