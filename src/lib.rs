//! # ptt-extract
//!
//! Turns a fetched PTT (批踢踢實業坊) article page into one normalized,
//! serializable record.
//!
//! Extraction runs in two stages. [`locate`] finds the `#main-content`
//! container on a parsed [`Page`] and splits it into header lines, body text
//! and reader reactions. [`Extractor`] then parses the header, sanitizes the
//! body, tallies the reactions and assembles an [`ArticleRecord`].
//!
//! ## Quick Start
//!
//! ```rust
//! use ptt_extract::extract;
//!
//! let html = r#"<html><body><div id="main-content">
//! <div class="article-metaline"><span class="article-meta-tag">作者</span><span class="article-meta-value">alice (Alice)</span></div>
//! <div class="article-metaline"><span class="article-meta-tag">標題</span><span class="article-meta-value">[問卦] 有沒有八卦</span></div>
//! <div class="article-metaline"><span class="article-meta-tag">時間</span><span class="article-meta-value">Sun Jan  3 12:00:00 2016</span></div>
//! 內文
//! </div></body></html>"#;
//!
//! let record = extract(html, "M.1451793600.A.1B2", "Gossiping")?;
//! assert_eq!(record.author_id, "alice");
//! assert_eq!(record.title, "有沒有八卦");
//! assert_eq!(record.content, "內文");
//! # Ok::<(), ptt_extract::Error>(())
//! ```
//!
//! ## Degradation
//!
//! Only a page without `#main-content` is an error ([`Error::NotFound`]).
//! Missing nicknames, addresses, dates or reaction tags fall back to defaults
//! and are listed in [`ArticleRecord::warnings`].

mod body;
mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Main content location on a parsed page.
pub mod locator;

/// Header line parsing (author, title, timestamps).
pub mod metadata;

/// Reader reaction classification and tallying.
pub mod reactions;

/// Title segmentation capability.
pub mod segment;

/// Board listing pages and article links.
pub mod listing;

/// Extraction over many pages with per-page failures.
pub mod batch;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::Extractor;
pub use locator::{locate, LocatedRegions, Page};
pub use options::Options;
pub use result::{ArticleRecord, Degradation, Reaction, ReactionSummary, ReactionTag};
pub use segment::{Dictionary, Segmenter, SegmenterHandle};

/// Extracts one article page using default options and no segmenter.
///
/// `article_id` and `board` are copied into the record unchanged.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the page has no `#main-content` region.
pub fn extract(html: &str, article_id: &str, board: &str) -> Result<ArticleRecord> {
    extract_with_options(html, article_id, board, &Options::default())
}

/// Extracts one article page with custom options and no segmenter.
///
/// # Example
///
/// ```rust
/// use ptt_extract::{extract_with_options, Options};
///
/// let html = r#"<div id="main-content">body</div>"#;
/// let options = Options {
///     include_messages: false,
///     ..Options::default()
/// };
/// let record = extract_with_options(html, "M.1.A.2", "Test", &options)?;
/// assert!(record.messages.is_empty());
/// # Ok::<(), ptt_extract::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the page has no `#main-content` region.
pub fn extract_with_options(
    html: &str,
    article_id: &str,
    board: &str,
    options: &Options,
) -> Result<ArticleRecord> {
    Extractor::new(options.clone()).extract(html, article_id, board)
}

/// Extracts one article page from raw bytes with automatic encoding detection.
///
/// The charset comes from the page's `<meta>` declaration, defaulting to
/// UTF-8. Invalid sequences become U+FFFD rather than errors.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the page has no `#main-content` region.
pub fn extract_bytes(html: &[u8], article_id: &str, board: &str) -> Result<ArticleRecord> {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str, article_id, board)
}
