//! Record assembly.
//!
//! [`Extractor`] runs the located regions through header parsing, title
//! segmentation, body sanitization and reaction tallying, and assembles the
//! final [`ArticleRecord`].

use tracing::debug;

use crate::body;
use crate::error::Result;
use crate::locator::{self, LocatedRegions, Page};
use crate::metadata::{self, parse_article_date};
use crate::options::Options;
use crate::patterns::NO_IP;
use crate::reactions;
use crate::result::{ArticleRecord, Degradation};
use crate::segment::{self, SegmenterHandle};

/// Page-to-record extractor.
///
/// Holds only configuration and a read-only segmenter handle, so one
/// instance can serve many threads; each call builds and drops its own tree.
#[derive(Clone, Default)]
pub struct Extractor {
    options: Options,
    segmenter: Option<SegmenterHandle>,
}

impl Extractor {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            segmenter: None,
        }
    }

    /// Attach a segmenter, typically an `Arc<Dictionary>` loaded at startup.
    #[must_use]
    pub fn with_segmenter(mut self, segmenter: SegmenterHandle) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Extract one article page.
    ///
    /// Fails only when the page lacks `#main-content`; every other anomaly
    /// leaves a default in the record and an entry in `warnings`.
    pub fn extract(&self, html: &str, article_id: &str, board: &str) -> Result<ArticleRecord> {
        let page = Page::parse(html);
        let regions = locator::locate(&page)?;
        Ok(self.extract_regions(&regions, article_id, board))
    }

    /// Build a record from regions already produced by [`locator::locate`].
    #[must_use]
    pub fn extract_regions(
        &self,
        regions: &LocatedRegions,
        article_id: &str,
        board: &str,
    ) -> ArticleRecord {
        let tz = &self.options.timezone;
        let mut warnings = Vec::new();

        // Header
        let (author, title, date) = match &regions.metadata {
            Some(block) => {
                let author = metadata::parse_author(block.author_line());
                if author.nickname.is_empty() {
                    debug!(article_id, line = block.author_line(), "author line without nickname");
                    warnings.push(Degradation::MissingNickname);
                }
                let title = metadata::parse_title(block.title_line());
                let date = parse_article_date(block.date_line(), tz);
                if date.is_none() {
                    debug!(article_id, line = block.date_line(), "unparsable article date");
                    warnings.push(Degradation::UnparsableDate(block.date_line().to_string()));
                }
                (author, title, date)
            }
            None => {
                debug!(article_id, "page has no header lines");
                warnings.push(Degradation::MissingMetadata);
                Default::default()
            }
        };

        let title_tokens = segment::title_tokens(self.segmenter.as_deref(), &title.title);

        // Body
        let lines = regions.body_strings();
        let ip = body::origin_ip(&lines).unwrap_or_else(|| {
            debug!(article_id, "no origin-station address");
            warnings.push(Degradation::MissingIp);
            NO_IP.to_string()
        });
        let content = body::sanitize(&lines, article_id);

        // Reactions
        let tally = reactions::tally(&regions.reactions, date.as_ref(), tz);
        warnings.extend(tally.warnings);
        let messages = if self.options.include_messages {
            tally.messages
        } else {
            Vec::new()
        };

        debug!(
            article_id,
            content_chars = content.chars().count(),
            reactions = tally.summary.all,
            warnings = warnings.len(),
            "article extracted"
        );

        ArticleRecord {
            id: article_id.to_string(),
            category: title.category,
            title: title.title,
            author_id: author.id,
            author_nickname: author.nickname,
            board: board.to_string(),
            content,
            date,
            ip,
            is_repost: title.is_repost,
            title_tokens,
            message_count: tally.summary,
            messages,
            warnings,
        }
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("options", &self.options)
            .field("segmenter", &self.segmenter.is_some())
            .finish()
    }
}
