//! Error types for ptt-extract.
//!
//! Only a page that does not carry the expected layout is a hard failure.
//! Every other anomaly on a page degrades to a default value and is reported
//! through [`crate::Degradation`] instead.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `#main-content` container is absent (deleted article, error page,
    /// or a page of some other layout).
    #[error("main content region not found")]
    NotFound,

    /// The segmentation dictionary could not be parsed.
    #[error("invalid dictionary: {0}")]
    Dictionary(String),

    /// A link could not be resolved against the site root.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading an input (dictionary file, HTML file) failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
