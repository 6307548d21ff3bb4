//! Extraction over many pages.
//!
//! A page without `#main-content` fails only that page. [`extract_all`]
//! keeps going and reports each failure next to its article id.

use tracing::{info, warn};

use crate::error::Error;
use crate::extract::Extractor;
use crate::result::ArticleRecord;

/// One fetched page and the identifiers the caller assigned to it.
#[derive(Debug, Clone, Copy)]
pub struct PageInput<'a> {
    pub article_id: &'a str,
    pub board: &'a str,
    pub html: &'a str,
}

/// Outcome of a batch: records in input order and the pages that failed.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<ArticleRecord>,
    /// `(article_id, error)` for each failed page, in input order.
    pub failures: Vec<(String, Error)>,
}

impl BatchReport {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Pages that produced a record but absorbed at least one anomaly.
    #[must_use]
    pub fn degraded(&self) -> usize {
        self.records.iter().filter(|r| !r.warnings.is_empty()).count()
    }
}

/// Extract every page, collecting failures instead of stopping at them.
pub fn extract_all<'a>(
    extractor: &Extractor,
    pages: impl IntoIterator<Item = PageInput<'a>>,
) -> BatchReport {
    let mut report = BatchReport::default();

    for page in pages {
        match extractor.extract(page.html, page.article_id, page.board) {
            Ok(record) => report.records.push(record),
            Err(err) => {
                warn!(article_id = page.article_id, board = page.board, error = %err, "page skipped");
                report.failures.push((page.article_id.to_string(), err));
            }
        }
    }

    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        degraded = report.degraded(),
        "batch finished"
    );
    report
}
