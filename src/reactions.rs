//! Reaction tallying.

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::locator::RawReaction;
use crate::metadata::parse_push_stamp;
use crate::patterns::{BOO_GLYPH, PUSH_GLYPH};
use crate::result::{Degradation, Reaction, ReactionSummary, ReactionTag};

/// Classify a tag glyph. Anything besides push and boo is neutral.
#[must_use]
pub fn classify(tag: &str) -> ReactionTag {
    match tag.trim() {
        PUSH_GLYPH => ReactionTag::Push,
        BOO_GLYPH => ReactionTag::Boo,
        _ => ReactionTag::Neutral,
    }
}

/// Reaction text: fragments joined with a space, leading `:` removed, trimmed.
#[must_use]
pub fn clean_content(fragments: &[String]) -> String {
    let joined = fragments.join(" ");
    let trimmed = joined.trim_start();
    trimmed.strip_prefix(':').unwrap_or(trimmed).trim().to_string()
}

/// Tallied reactions plus the anomalies met on the way.
#[derive(Debug, Default)]
pub struct Tally {
    pub summary: ReactionSummary,
    pub messages: Vec<Reaction>,
    pub warnings: Vec<Degradation>,
}

/// Interpret and count reaction entries.
///
/// Entries without a tag are skipped before counting. Timestamps take the
/// year of `article_date`.
#[must_use]
pub fn tally(
    raw: &[RawReaction],
    article_date: Option<&DateTime<FixedOffset>>,
    tz: &FixedOffset,
) -> Tally {
    let (mut push, mut boo, mut neutral) = (0usize, 0usize, 0usize);
    let mut messages = Vec::with_capacity(raw.len());
    let mut warnings = Vec::new();

    for (index, entry) in raw.iter().enumerate() {
        let Some(tag) = entry.tag.as_deref() else {
            debug!(index, "reaction without tag skipped");
            warnings.push(Degradation::UntaggedReaction(index));
            continue;
        };

        let tag = classify(tag);
        match tag {
            ReactionTag::Push => push += 1,
            ReactionTag::Boo => boo += 1,
            ReactionTag::Neutral => neutral += 1,
        }

        let stamp = entry.ipdatetime.as_deref().unwrap_or_default();
        let timestamp = parse_push_stamp(stamp, article_date, tz);
        if timestamp.is_none() && article_date.is_some() {
            debug!(index, stamp, "unparsable reaction stamp");
            warnings.push(Degradation::UnparsableReactionStamp(index));
        }

        messages.push(Reaction {
            content: clean_content(&entry.content),
            timestamp,
            tag,
            user_id: entry.user_id.as_deref().unwrap_or_default().trim().to_string(),
        });
    }

    Tally {
        summary: ReactionSummary::from_counts(push, boo, neutral),
        messages,
        warnings,
    }
}
