//! Result types for extraction output.
//!
//! Field declaration order equals serialized order, and every struct here
//! declares its fields sorted by serialized name. Downstream stores and
//! golden files rely on that ordering.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Reader reaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionTag {
    Push,
    Boo,
    Neutral,
}

/// One reader reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Reaction text with the leading `:` separator removed.
    #[serde(rename = "push_content")]
    pub content: String,

    /// Stamp completed with the article's year; `None` without an article
    /// date or when the stamp is unreadable.
    #[serde(rename = "push_ipdatetime")]
    pub timestamp: Option<DateTime<FixedOffset>>,

    #[serde(rename = "push_tag")]
    pub tag: ReactionTag,

    #[serde(rename = "push_userid")]
    pub user_id: String,
}

/// Reaction tally. `all = push + boo + neutral`, `count = push - boo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionSummary {
    pub all: usize,
    pub boo: usize,
    pub count: i64,
    pub neutral: usize,
    pub push: usize,
}

impl ReactionSummary {
    /// Summary from the three per-kind counts.
    #[must_use]
    pub fn from_counts(push: usize, boo: usize, neutral: usize) -> Self {
        let signed = |n: usize| i64::try_from(n).unwrap_or(i64::MAX);
        Self {
            all: push + boo + neutral,
            boo,
            count: signed(push) - signed(boo),
            neutral,
            push,
        }
    }
}

/// A non-fatal anomaly absorbed during extraction.
///
/// Each one leaves a documented default in the record instead of failing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    /// No header lines; author, title, category and date are empty.
    MissingMetadata,
    /// Author line without a nickname part; nickname is empty.
    MissingNickname,
    /// Date line did not parse; `date` is `None`.
    UnparsableDate(String),
    /// No origin-station line or no address on it; `ip` is `"none"`.
    MissingIp,
    /// Reaction entry without a tag span, by position; skipped.
    UntaggedReaction(usize),
    /// Reaction stamp did not parse, by position; its timestamp is `None`.
    UnparsableReactionStamp(usize),
}

/// Normalized record for one article page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Caller-supplied article identifier, e.g. `M.1451793600.A.1B2`.
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "article_category")]
    pub category: String,

    #[serde(rename = "article_title")]
    pub title: String,

    pub author_id: String,

    pub author_nickname: String,

    pub board: String,

    /// Sanitized body text.
    pub content: String,

    /// Article timestamp; `None` when the page has no readable date.
    pub date: Option<DateTime<FixedOffset>>,

    /// Poster address, or `"none"`.
    pub ip: String,

    pub is_repost: bool,

    /// Title tokens joined with `", "`.
    #[serde(rename = "jiebawords")]
    pub title_tokens: String,

    pub message_count: ReactionSummary,

    pub messages: Vec<Reaction>,

    /// Anomalies absorbed while building this record. Not serialized.
    #[serde(skip)]
    pub warnings: Vec<Degradation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_invariants() {
        let summary = ReactionSummary::from_counts(3, 5, 2);
        assert_eq!(summary.all, 10);
        assert_eq!(summary.count, -2);
        assert_eq!(summary.all, summary.push + summary.boo + summary.neutral);
    }

    #[test]
    fn summary_serializes_in_name_order() {
        let json = serde_json::to_string(&ReactionSummary::from_counts(1, 0, 0)).unwrap_or_default();
        assert_eq!(json, r#"{"all":1,"boo":0,"count":1,"neutral":0,"push":1}"#);
    }

    #[test]
    fn tag_serializes_lowercase() {
        let json = serde_json::to_string(&ReactionTag::Neutral).unwrap_or_default();
        assert_eq!(json, r#""neutral""#);
    }
}
