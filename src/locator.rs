//! Structural split of an article page.
//!
//! [`locate`] finds `#main-content`, reads the header lines and the reaction
//! entries out of it, and hands back a working copy of the container with
//! both removed so body text can be read without duplicating them.

use tracing::debug;

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::metadata::MetadataBlock;
use crate::patterns::{
    MAIN_CONTENT_ID, METALINE_RIGHT_SELECTOR, METALINE_SELECTOR, META_VALUE_SELECTOR,
    PUSH_CONTENT_SELECTOR, PUSH_IPDATETIME_SELECTOR, PUSH_SELECTOR, PUSH_TAG_SELECTOR,
    PUSH_USERID_SELECTOR,
};

/// A parsed article page. Read-only input to [`locate`].
pub struct Page {
    document: Document,
}

impl Page {
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: dom::parse(html),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl From<Document> for Page {
    fn from(document: Document) -> Self {
        Self { document }
    }
}

/// One reaction entry as rendered, before any interpretation.
///
/// Each sub-field is `None` when its span is missing from the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReaction {
    pub tag: Option<String>,
    pub user_id: Option<String>,
    /// Untrimmed text fragments of the content span, in order.
    pub content: Vec<String>,
    pub ipdatetime: Option<String>,
}

/// Output of [`locate`].
pub struct LocatedRegions {
    /// Copy of `#main-content` with header lines and reactions removed.
    pub body: Document,
    /// Header lines, or `None` when the page rendered none.
    pub metadata: Option<MetadataBlock>,
    /// Reaction entries in page order.
    pub reactions: Vec<RawReaction>,
}

impl LocatedRegions {
    /// Stripped, non-empty text nodes of the working copy, in order.
    #[must_use]
    pub fn body_strings(&self) -> Vec<String> {
        let root = dom::find_by_id(&self.body, MAIN_CONTENT_ID)
            .unwrap_or_else(|| self.body.select("body"));
        dom::stripped_strings(&root)
    }
}

/// Split a page into header, body and reactions.
///
/// Fails with [`Error::NotFound`] when `#main-content` is absent. The page
/// itself is never modified.
pub fn locate(page: &Page) -> Result<LocatedRegions> {
    let main = dom::find_by_id(page.document(), MAIN_CONTENT_ID).ok_or(Error::NotFound)?;

    let body = dom::detach_copy(&main);
    let (metadata, reactions) = {
        let root = dom::find_by_id(&body, MAIN_CONTENT_ID).unwrap_or_else(|| body.select("body"));

        let metalines = dom::find_all(&root, METALINE_SELECTOR);
        if !metalines.is_empty() && metalines.len() != 3 {
            debug!(count = metalines.len(), "unexpected number of header lines");
        }
        let entries: Vec<String> = metalines.iter().take(3).map(meta_value).collect();
        let metadata = MetadataBlock::from_entries(entries);

        for line in &metalines {
            dom::remove(line);
        }
        dom::remove_all(&root, METALINE_RIGHT_SELECTOR);

        let pushes = dom::find_all(&root, PUSH_SELECTOR);
        let reactions: Vec<RawReaction> = pushes.iter().map(read_reaction).collect();
        for push in &pushes {
            dom::remove(push);
        }
        (metadata, reactions)
    };

    Ok(LocatedRegions {
        body,
        metadata,
        reactions,
    })
}

/// Value of one header line; empty when the value span is missing.
fn meta_value(line: &Selection) -> String {
    dom::find_first(line, META_VALUE_SELECTOR)
        .as_ref()
        .and_then(dom::text)
        .unwrap_or_default()
}

fn read_reaction(push: &Selection) -> RawReaction {
    let field = |selector: &str| dom::find_first(push, selector).as_ref().and_then(dom::text);

    let content = dom::find_first(push, PUSH_CONTENT_SELECTOR)
        .map(|span| dom::strings(&span).iter().map(ToString::to_string).collect())
        .unwrap_or_default();

    RawReaction {
        tag: field(PUSH_TAG_SELECTOR),
        user_id: field(PUSH_USERID_SELECTOR),
        content,
        ipdatetime: field(PUSH_IPDATETIME_SELECTOR),
    }
}
