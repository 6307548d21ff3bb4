//! Article header parsing.
//!
//! PTT renders up to three header lines in a fixed order: author, title,
//! date. [`MetadataBlock`] keeps that positional contract behind named
//! fields, and the parsers here turn each line into typed values.

pub mod date;

use crate::patterns::REPOST_MARKER;

pub use date::{parse_article_date, parse_push_stamp};

/// The three positional header lines of an article.
///
/// Built from the raw header values in page order: entry 0 is the author
/// line, entry 1 the title line, entry 2 the date line. Entries past the
/// third are ignored; missing ones read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataBlock {
    author_line: String,
    title_line: String,
    date_line: String,
}

impl MetadataBlock {
    /// Positional block from header values, or `None` when the page rendered
    /// no header at all (typically an already-deleted post).
    #[must_use]
    pub fn from_entries(entries: Vec<String>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let mut lines = entries.into_iter();
        Some(Self {
            author_line: lines.next().unwrap_or_default(),
            title_line: lines.next().unwrap_or_default(),
            date_line: lines.next().unwrap_or_default(),
        })
    }

    /// `userid (nickname)`
    #[must_use]
    pub fn author_line(&self) -> &str {
        &self.author_line
    }

    /// `[Re: ]<category> <title>`
    #[must_use]
    pub fn title_line(&self) -> &str {
        &self.title_line
    }

    /// `Sun Jan  3 12:00:00 2016`
    #[must_use]
    pub fn date_line(&self) -> &str {
        &self.date_line
    }
}

/// Author id and nickname from the author line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub nickname: String,
}

/// Parse `userid (nickname)`.
///
/// A line without a space yields the whole line as id and an empty nickname.
/// The nickname is the remainder with one enclosing pair of parentheses
/// removed.
#[must_use]
pub fn parse_author(line: &str) -> Author {
    match line.split_once(' ') {
        Some((id, rest)) => {
            let rest = rest.trim();
            let nickname = rest
                .strip_prefix('(')
                .and_then(|r| r.strip_suffix(')'))
                .unwrap_or(rest);
            Author {
                id: id.to_string(),
                nickname: nickname.to_string(),
            }
        }
        None => Author {
            id: line.to_string(),
            nickname: String::new(),
        },
    }
}

/// Category, title and repost flag from the title line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title {
    pub is_repost: bool,
    pub category: String,
    pub title: String,
}

/// Parse `<category> <title>` or `Re: <category> <title>`.
///
/// The line is split on single spaces, so `category + " " + title`
/// reconstructs a non-repost line. When no second token exists the category
/// takes whatever is left and the title is empty.
#[must_use]
pub fn parse_title(line: &str) -> Title {
    let (is_repost, rest) = match line.strip_prefix(REPOST_MARKER) {
        Some(rest) => (true, rest.strip_prefix(' ').unwrap_or(rest)),
        None => (false, line),
    };

    let (category, title) = rest.split_once(' ').unwrap_or((rest, ""));
    Title {
        is_repost,
        category: category.to_string(),
        title: title.to_string(),
    }
}
