//! Timestamp parsing for article headers and reaction stamps.
//!
//! Reaction stamps carry no year. They borrow the article's year, so a page
//! without a parsable article date yields no reaction timestamps either.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

use crate::patterns::{ARTICLE_DATE_FORMAT, PUSH_STAMP, WHITESPACE_NORMALIZE};

/// Parse the header date line in the given zone.
///
/// PTT pads single-digit days with a space (`Sun Jan  3 ...`); whitespace runs
/// are collapsed before parsing.
#[must_use]
pub fn parse_article_date(line: &str, tz: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    let normalized = WHITESPACE_NORMALIZE.replace_all(line.trim(), " ");
    let naive = NaiveDateTime::parse_from_str(&normalized, ARTICLE_DATE_FORMAT).ok()?;
    tz.from_local_datetime(&naive).single()
}

/// Parse a reaction's `MM/DD HH:MM` stamp, taking the year from `article`.
///
/// Returns `None` without an article date, without a stamp, or when the
/// stamp names a day that does not exist in that year (Feb 29).
#[must_use]
pub fn parse_push_stamp(
    raw: &str,
    article: Option<&DateTime<FixedOffset>>,
    tz: &FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    let year = article?.year();
    let caps = PUSH_STAMP.captures(raw)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let date = NaiveDate::from_ymd_opt(year, field(1)?, field(2)?)?;
    let naive = date.and_hms_opt(field(3)?, field(4)?, 0)?;
    tz.from_local_datetime(&naive).single()
}
