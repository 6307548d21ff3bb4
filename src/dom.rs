//! DOM Operations Adapter
//!
//! A thin typed layer over `dom_query`. Lookups return `Option`/`Vec` instead
//! of possibly-empty selections, so every caller decides explicitly what a
//! missing node means.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Tags whose text never counts as page text.
const NON_TEXT_TAGS: &[&str] = &["script", "style", "noscript"];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Re-parse a selection's outer HTML into a document of its own.
///
/// Mutations on the returned document never reach the source tree.
#[must_use]
pub fn detach_copy(sel: &Selection) -> Document {
    Document::from(sel.html().to_string())
}

// === Querying ===

/// Element with the given `id`, if any.
#[must_use]
pub fn find_by_id<'a>(doc: &'a Document, id: &str) -> Option<Selection<'a>> {
    let found = doc.select(&format!("#{id}"));
    found.nodes().first().map(|node| Selection::from(*node))
}

/// First descendant matching `selector`.
#[must_use]
pub fn find_first<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select(selector);
    found.nodes().first().map(|node| Selection::from(*node))
}

/// All descendants matching `selector`, in document order.
#[must_use]
pub fn find_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Text Content ===

/// Text content of the first node in the selection, trimmed.
///
/// Returns `None` for an empty selection; an element with no text yields
/// `Some("")`.
#[must_use]
pub fn text(sel: &Selection) -> Option<String> {
    if sel.is_empty() {
        return None;
    }
    Some(sel.text().trim().to_string())
}

/// Raw text nodes under the selection, in document order.
#[must_use]
pub fn strings(sel: &Selection) -> Vec<StrTendril> {
    let mut out = Vec::new();
    for root in sel.nodes() {
        for node in root.descendants() {
            if node.is_text() && !inside_non_text(&node) {
                out.push(node.text());
            }
        }
    }
    out
}

/// Text nodes under the selection, trimmed, with empty ones skipped.
#[must_use]
pub fn stripped_strings(sel: &Selection) -> Vec<String> {
    strings(sel)
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn inside_non_text(node: &NodeRef) -> bool {
    node.parent()
        .and_then(|parent| parent.node_name())
        .is_some_and(|tag| NON_TEXT_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)))
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tree Manipulation ===

/// Detach every node in the selection from its tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Detach every match of `selector` under `root`; returns how many went.
pub fn remove_all(root: &Selection, selector: &str) -> usize {
    let found = root.select(selector);
    let count = found.length();
    found.remove();
    count
}
