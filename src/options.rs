//! Configuration options for record extraction.
//!
//! The `Options` struct controls the parts of extraction that are not fixed by
//! the page layout itself.

use chrono::{FixedOffset, Offset, Utc};

/// Seconds east of UTC for Asia/Taipei. Taiwan has not observed DST since
/// 1979, so a fixed offset is exact for every page PTT still serves.
pub const TAIPEI_OFFSET_SECS: i32 = 8 * 3600;

/// Configuration options for record extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use ptt_extract::Options;
///
/// let options = Options {
///     include_messages: false,
///     ..Options::default()
/// };
/// assert!(!options.include_messages);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Zone applied to the article date and to every reaction stamp.
    ///
    /// Default: UTC+08:00 (Asia/Taipei)
    pub timezone: FixedOffset,

    /// Emit the per-reaction message list.
    ///
    /// The reaction summary is computed either way; turning this off only
    /// drops the individual entries from the record.
    ///
    /// Default: `true`
    pub include_messages: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timezone: taipei(),
            include_messages: true,
        }
    }
}

/// The Asia/Taipei offset.
#[must_use]
pub fn taipei() -> FixedOffset {
    FixedOffset::east_opt(TAIPEI_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}
