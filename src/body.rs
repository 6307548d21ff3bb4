//! Body text sanitization and poster IP recovery.
//!
//! Both work on the stripped text nodes of the working copy produced by
//! [`crate::locator::locate`], after header lines and reactions are gone.

use std::borrow::Cow;

use crate::patterns::{
    BODY_BLACKLIST, FROM_GLYPH, FROM_MARKER, IPV4, ORIGIN_GLYPH, ORIGIN_STATION, SEPARATOR,
    WHITESPACE_NORMALIZE,
};

/// Delete every character outside the body whitelist.
///
/// Idempotent: filtering already-filtered text changes nothing.
#[must_use]
pub fn filter_chars(text: &str) -> Cow<'_, str> {
    BODY_BLACKLIST.replace_all(text, "")
}

/// Footer lines: origin-station (`※`), legacy `◆ From:`, and the `--`
/// signature separator.
fn is_footer_line(line: &str) -> bool {
    line.starts_with(ORIGIN_GLYPH) || line.starts_with(FROM_GLYPH) || line.starts_with(SEPARATOR)
}

/// Sanitize body text nodes into a single line.
///
/// In order: drop footer lines, filter characters, drop lines left empty,
/// drop lines containing `article_id` (the permalink line), join with a
/// space and collapse whitespace. The result is not trimmed: a line whose
/// leading symbols were filtered away keeps its separating space.
#[must_use]
pub fn sanitize(lines: &[String], article_id: &str) -> String {
    let kept: Vec<Cow<'_, str>> = lines
        .iter()
        .filter(|line| !is_footer_line(line))
        .map(|line| filter_chars(line))
        .filter(|line| !line.is_empty())
        .filter(|line| article_id.is_empty() || !line.contains(article_id))
        .collect();

    let joined = kept.join(" ");
    WHITESPACE_NORMALIZE.replace_all(&joined, " ").into_owned()
}

/// First IPv4 address on the origin-station line.
///
/// The `※ 發信站` line is tried first; the legacy `◆ From:` footer is the
/// fallback. Lines are matched inside each text node, since older pages
/// render the footer as part of the body text. Returns `None` when neither
/// line carries an address.
#[must_use]
pub fn origin_ip(lines: &[String]) -> Option<String> {
    let physical = || lines.iter().flat_map(|node| node.lines()).map(str::trim);
    let origin = |line: &&str| line.starts_with(ORIGIN_GLYPH) && line.contains(ORIGIN_STATION);
    let legacy = |line: &&str| line.starts_with(FROM_GLYPH) && line.contains(FROM_MARKER);

    physical()
        .filter(origin)
        .chain(physical().filter(legacy))
        .find_map(|line| IPV4.find(line).map(|m| m.as_str().to_string()))
}
