//! Title segmentation.
//!
//! The extractor only needs `text -> tokens`. [`Segmenter`] is that seam;
//! [`Dictionary`] is the bundled implementation, a jieba segmenter loaded
//! once from a dictionary file and shared read-only behind an `Arc`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use jieba_rs::Jieba;
use tracing::debug;

use crate::error::{Error, Result};

/// Splits text into tokens. Implementations must be safe to share across
/// threads and must not mutate state per call.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Shared segmenter handle passed into the extractor.
pub type SegmenterHandle = Arc<dyn Segmenter>;

/// Tokens for `title`, joined with `", "`.
///
/// Without a segmenter, or when it yields nothing for a non-empty title, the
/// title itself is the only token.
#[must_use]
pub fn title_tokens(segmenter: Option<&dyn Segmenter>, title: &str) -> String {
    let tokens = segmenter.map(|s| s.segment(title)).unwrap_or_default();
    if tokens.is_empty() {
        return title.to_string();
    }
    tokens.join(", ")
}

/// Word list for frequency-weighted segmentation.
///
/// Wraps a `jieba_rs::Jieba` built from a jieba dictionary file
/// (`word [freq] [tag]` per line, e.g. `dict.txt.big`). Segmentation picks
/// the most probable path through the word DAG and runs the HMM over spans
/// the dictionary does not cover.
pub struct Dictionary {
    jieba: Jieba,
}

impl Dictionary {
    /// Load a dictionary file once and wrap it for sharing.
    pub fn load(path: impl AsRef<Path>) -> Result<Arc<Self>> {
        let file = File::open(path.as_ref())?;
        let dict = Self::from_reader(file)?;
        debug!(path = %path.as_ref().display(), "dictionary loaded");
        Ok(Arc::new(dict))
    }

    /// Parse `word [freq] [tag]` lines. Blank lines are skipped; a frequency
    /// that is present must be an integer.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut reader = BufReader::new(reader);
        let jieba = Jieba::with_dict(&mut reader).map_err(|e| match e {
            jieba_rs::Error::Io(io) => Error::Io(io),
            other => Error::Dictionary(other.to_string()),
        })?;
        Ok(Self { jieba })
    }
}

impl Segmenter for Dictionary {
    /// Accurate-mode cut with HMM enabled. Every piece of the input is
    /// returned, whitespace included, so the tokens concatenate back to the
    /// original text.
    fn segment(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary").finish_non_exhaustive()
    }
}
