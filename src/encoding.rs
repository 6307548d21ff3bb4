//! Character encoding detection and transcoding.
//!
//! PTT serves UTF-8, but archived pages and mirrors are not always re-encoded
//! consistently. The charset is taken from the page's `<meta>` declaration
//! and the bytes are converted to UTF-8 before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Reads the first `charset=` declaration inside a `<meta>` tag, which covers
/// both `<meta charset>` and the `http-equiv` form. Defaults to UTF-8.
///
/// Only examines the first 1024 bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_META_RE
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use ptt_extract::encoding::transcode_to_utf8;
///
/// let html = "<html><body>推文</body></html>".as_bytes();
/// assert!(transcode_to_utf8(html).contains("推文"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
