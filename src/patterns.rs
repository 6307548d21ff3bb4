//! Compiled regex patterns, CSS selectors and marker glyphs for PTT pages.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized by the pipeline stage that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Layout Selectors
// =============================================================================

/// Id of the container holding metadata, body and reactions.
pub const MAIN_CONTENT_ID: &str = "main-content";

/// One header line (author, title, date).
pub const METALINE_SELECTOR: &str = "div.article-metaline";

/// Right-aligned header entries (board name); removed, never parsed.
pub const METALINE_RIGHT_SELECTOR: &str = "div.article-metaline-right";

/// Value span inside a header line.
pub const META_VALUE_SELECTOR: &str = "span.article-meta-value";

/// One reader reaction.
pub const PUSH_SELECTOR: &str = "div.push";

pub const PUSH_TAG_SELECTOR: &str = "span.push-tag";
pub const PUSH_USERID_SELECTOR: &str = "span.push-userid";
pub const PUSH_CONTENT_SELECTOR: &str = "span.push-content";
pub const PUSH_IPDATETIME_SELECTOR: &str = "span.push-ipdatetime";

/// One entry of a board listing page.
pub const LISTING_ENTRY_SELECTOR: &str = "div.r-ent";

// =============================================================================
// Markers
// =============================================================================

/// Leading token of a reply title.
pub const REPOST_MARKER: &str = "Re:";

/// Leading glyph of the origin-station footer line.
pub const ORIGIN_GLYPH: char = '\u{203b}'; // ※

/// Text following [`ORIGIN_GLYPH`] on the line carrying the poster IP.
pub const ORIGIN_STATION: &str = "發信站";

/// Leading glyph of the legacy `◆ From:` footer line.
pub const FROM_GLYPH: char = '\u{25c6}'; // ◆

/// Legacy footer marker that also carries an IP.
pub const FROM_MARKER: &str = "From:";

/// Signature separator line.
pub const SEPARATOR: &str = "--";

pub const PUSH_GLYPH: &str = "推";
pub const BOO_GLYPH: &str = "噓";

/// Value of the `ip` field when no address could be recovered.
pub const NO_IP: &str = "none";

/// Header date format, e.g. `Sun Jan  3 12:00:00 2016` after whitespace
/// normalization.
pub const ARTICLE_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

// =============================================================================
// Text Patterns
// =============================================================================

/// First dotted-quad address. ASCII digits only, bounded on both sides so
/// longer digit runs and full-width digits never match.
pub static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{1,3}(?:\.[0-9]{1,3}){3}\b").expect("IPV4 regex")
});

/// Month/day/time stamp of a reaction. Anchored at the end so a leading IP
/// in the same span is ignored.
pub static PUSH_STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})/([0-9]{1,2})\s+([0-9]{1,2}):([0-9]{2})\s*$").expect("PUSH_STAMP regex")
});

/// Every character outside the body whitelist.
///
/// Kept: CJK ideographs U+4E00..U+9FA5, the full-width punctuation
/// 。；，：“”（）、？《》, whitespace, word characters, `:`, the ASCII range
/// `/` through `_` (digits, `;<=>?@`, uppercase, `[\]^`), and `.?~%()`.
/// A plain `-` is not in the set.
pub static BODY_BLACKLIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[^\x{4e00}-\x{9fa5}\x{3002}\x{ff1b}\x{ff0c}\x{ff1a}\x{201c}\x{201d}\x{ff08}\x{ff09}\x{3001}\x{ff1f}\x{300a}\x{300b}\s\w:/-_.?~%()]",
    )
    .expect("BODY_BLACKLIST regex")
});

/// Runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_finds_first_address() {
        let line = "※ 發信站: 批踢踢實業坊(ptt.cc), 來自: 123.45.67.89 (臺灣)";
        assert_eq!(IPV4.find(line).map(|m| m.as_str()), Some("123.45.67.89"));
    }

    #[test]
    fn push_stamp_ignores_leading_ip() {
        let caps = PUSH_STAMP.captures("1.2.3.4 01/03 12:34");
        let Some(caps) = caps else { panic!("expected a match") };
        assert_eq!(&caps[1], "01");
        assert_eq!(&caps[2], "03");
        assert_eq!(&caps[3], "12");
        assert_eq!(&caps[4], "34");
    }

    #[test]
    fn ipv4_rejects_full_width_and_long_octets() {
        assert!(IPV4.find("來自: １２３.４５.６７.８９").is_none());
        assert!(IPV4.find("來自: 1234.5.6.78").is_none());
        assert_eq!(IPV4.find("來自: 1.2.3.4 (臺灣)").map(|m| m.as_str()), Some("1.2.3.4"));
    }

    #[test]
    fn push_stamp_ignores_full_width_digits() {
        assert!(PUSH_STAMP.captures("０１/０３ １２:３４").is_none());
    }

    #[test]
    fn body_blacklist_removes_symbols_outside_whitelist() {
        assert_eq!(BODY_BLACKLIST.replace_all("★好*文!", ""), "好文");
        assert_eq!(BODY_BLACKLIST.replace_all("a-b", ""), "ab");
    }

    #[test]
    fn body_blacklist_keeps_slash_to_underscore_range() {
        assert_eq!(BODY_BLACKLIST.replace_all("[連結] a@b.c x=1;<>^\\", ""), "[連結] a@b.c x=1;<>^\\");
        assert_eq!(BODY_BLACKLIST.replace_all("http://x.tw/a?b=1", ""), "http://x.tw/a?b=1");
    }

    #[test]
    fn whitespace_normalize_collapses_spaces() {
        let result = WHITESPACE_NORMALIZE.replace_all("hello \n\t world", " ");
        assert_eq!(result, "hello world");
    }
}
