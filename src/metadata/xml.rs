// Attribute extraction over the control API's fixed XML schema. The schema
// is shallow (a root element wrapping one or two levels of attribute-only
// tags), so a single forward pass with a name stack is all the navigation
// needed. One function per input shape: single attribute or the whole map.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::MetadataError;

/// All attributes of the first element at `path` (names relative to the
/// document root, e.g. `["CurrentTrack", "TRACK"]`).
pub fn tag_attributes(xml: &str, path: &[&str]) -> Result<BTreeMap<String, String>, MetadataError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                stack.push(element_name(&element));
                if matches_path(&stack, path) {
                    return collect_attributes(&element);
                }
            }
            Event::Empty(element) => {
                stack.push(element_name(&element));
                let matched = matches_path(&stack, path);
                stack.pop();
                if matched {
                    return collect_attributes(&element);
                }
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Err(MetadataError::MissingElement(path.join("/")))
}

/// Attributes of every element at `path`, in document order. An empty list
/// means the document has no such element, e.g. an empty playlist.
pub fn all_tag_attributes(
    xml: &str,
    path: &[&str],
) -> Result<Vec<BTreeMap<String, String>>, MetadataError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut found = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                stack.push(element_name(&element));
                if matches_path(&stack, path) {
                    found.push(collect_attributes(&element)?);
                }
            }
            Event::Empty(element) => {
                stack.push(element_name(&element));
                let matched = matches_path(&stack, path);
                stack.pop();
                if matched {
                    found.push(collect_attributes(&element)?);
                }
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(found)
}

/// One attribute of the first element at `path`.
pub fn tag_attribute(xml: &str, path: &[&str], attr: &str) -> Result<String, MetadataError> {
    tag_attributes(xml, path)?
        .remove(attr)
        .ok_or_else(|| MetadataError::MissingAttribute(attr.to_string()))
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

/// `stack` is the open-element chain including the root; `path` is
/// root-relative, so a match is the root plus `path` exactly.
fn matches_path(stack: &[String], path: &[&str]) -> bool {
    stack.len() == path.len() + 1
        && stack[1..]
            .iter()
            .zip(path)
            .all(|(open, wanted)| open == wanted)
}

fn collect_attributes(element: &BytesStart<'_>) -> Result<BTreeMap<String, String>, MetadataError> {
    let mut attributes = BTreeMap::new();
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.insert(key, value);
    }
    Ok(attributes)
}
