//! Metadata resolution algorithm.

use chrono::{DateTime, Utc};
use serde_yaml::{Mapping, Value};

use crate::date::parse_date_value;
use crate::status::{PastSchedulePolicy, PostStatus};

/// Resolved publication intent for a post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostMetadata {
    /// Post title; never empty.
    pub title: String,
    /// Optional custom URL slug.
    pub slug: Option<String>,
    /// Trimmed, non-empty tags in front-matter order.
    pub tags: Vec<String>,
    /// Effective publication status.
    pub status: PostStatus,
    /// Set exactly when `status = scheduled` with a future date, or
    /// `status = published` with an explicit past date.
    pub published_at: Option<DateTime<Utc>>,
}

/// Resolve publication metadata from front matter and defaults.
///
/// `fallback_title` is the note's identifier (filename without extension);
/// it is used when front matter has no non-empty `title`. `now` is the
/// resolution-time reference for scheduling comparisons. An explicit future
/// date always forces `status = scheduled`, overriding the front-matter
/// status; `policy` decides what happens to an explicitly scheduled post
/// whose date is past or missing.
#[must_use]
pub fn resolve(
    front_matter: Option<&Mapping>,
    fallback_title: &str,
    default_status: PostStatus,
    policy: PastSchedulePolicy,
    now: DateTime<Utc>,
) -> PostMetadata {
    let get = |key: &str| front_matter.and_then(|mapping| mapping.get(key));

    let title = get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(fallback_title)
        .to_owned();

    let slug = get("slug")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty());

    let tags = get("tags").map_or_else(Vec::new, parse_tags);

    let mut status = get("status")
        .and_then(Value::as_str)
        .and_then(PostStatus::parse)
        .unwrap_or(default_status);

    let date = get("publish_date")
        .or_else(|| get("date"))
        .and_then(|value| parse_date_value(value));

    let mut published_at = None;
    if let Some(instant) = date {
        if instant > now {
            // An explicit future date always wins over the computed status.
            status = PostStatus::Scheduled;
            published_at = Some(instant);
        } else if status == PostStatus::Published {
            published_at = Some(instant);
        }
    }

    if status == PostStatus::Scheduled
        && published_at.is_none()
        && policy == PastSchedulePolicy::PublishNow
    {
        status = PostStatus::Published;
    }

    PostMetadata {
        title,
        slug,
        tags,
        status,
        published_at,
    }
}

/// Stringify a front-matter `tags` value.
///
/// A sequence is stringified element by element; a single string is split
/// on commas. Anything else yields no tags. Segments are trimmed and
/// empties dropped.
fn parse_tags(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.iter().filter_map(scalar_to_string).collect(),
        Value::String(text) => text
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToOwned::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
