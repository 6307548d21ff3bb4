//! Board listing pages.
//!
//! A listing page (`/bbs/<board>/index<N>.html`) holds one `div.r-ent` per
//! article. Entries whose article was deleted keep their row but lose the
//! link; those are skipped.

use url::Url;

use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::patterns::LISTING_ENTRY_SELECTOR;

/// Site root that listing links are relative to.
pub const PTT_URL: &str = "https://www.ptt.cc";

/// One linked article on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Link file name without `.html`, e.g. `M.1451793600.A.1B2`.
    pub article_id: String,
    pub url: Url,
    pub title: String,
    pub author: String,
}

/// Article id from a link such as `/bbs/Gossiping/M.1451793600.A.1B2.html`.
#[must_use]
pub fn article_id_from_href(href: &str) -> Option<String> {
    let file = href
        .split(['?', '#'])
        .next()?
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())?;
    let id = file.strip_suffix(".html").unwrap_or(file);
    (!id.is_empty()).then(|| id.to_string())
}

/// Absolute link for an article.
pub fn article_url(board: &str, article_id: &str) -> Result<Url> {
    resolve(&format!("/bbs/{board}/{article_id}.html"))
}

fn resolve(href: &str) -> Result<Url> {
    Url::parse(PTT_URL)
        .and_then(|base| base.join(href))
        .map_err(|e| Error::InvalidUrl(format!("{href}: {e}")))
}

/// Linked entries of a listing page, in page order.
///
/// Rows without a link, or whose link does not resolve, are skipped.
#[must_use]
pub fn parse_listing(html: &str) -> Vec<ListingEntry> {
    let doc = dom::parse(html);
    let root = doc.select("body");
    dom::find_all(&root, LISTING_ENTRY_SELECTOR)
        .iter()
        .filter_map(read_entry)
        .collect()
}

fn read_entry(row: &Selection) -> Option<ListingEntry> {
    let link = dom::find_first(row, ".title a")?;
    let href = dom::attr(&link, "href")?;
    let article_id = article_id_from_href(&href)?;
    let url = resolve(&href).ok()?;

    Some(ListingEntry {
        article_id,
        url,
        title: dom::text(&link).unwrap_or_default(),
        author: dom::find_first(row, ".meta .author")
            .as_ref()
            .and_then(dom::text)
            .unwrap_or_default(),
    })
}
