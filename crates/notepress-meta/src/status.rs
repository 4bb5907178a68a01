//! Publication status and scheduling policy enums.

use serde::{Deserialize, Serialize};

/// Publication status of a post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Not yet published.
    #[default]
    Draft,
    /// Live on the platform.
    Published,
    /// Queued for a future instant.
    Scheduled,
}

impl PostStatus {
    /// Parse a front-matter status value.
    ///
    /// Returns `None` for anything but the three recognized values, so the
    /// caller can fall back to its configured default.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            "scheduled" => Some(Self::Scheduled),
            _ => None,
        }
    }

    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Scheduled => "scheduled",
        }
    }
}

/// What to do with an explicitly `scheduled` post whose date is in the past
/// or absent.
///
/// The resolver cannot schedule such a post meaningfully; this policy makes
/// the fallback an explicit configuration choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PastSchedulePolicy {
    /// Leave the post `scheduled` with no timestamp; the caller decides.
    #[default]
    Keep,
    /// Demote to `published` with no explicit timestamp (publish now).
    PublishNow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_values() {
        assert_eq!(PostStatus::parse("draft"), Some(PostStatus::Draft));
        assert_eq!(PostStatus::parse("published"), Some(PostStatus::Published));
        assert_eq!(PostStatus::parse("scheduled"), Some(PostStatus::Scheduled));
        assert_eq!(PostStatus::parse("  draft "), Some(PostStatus::Draft));
    }

    #[test]
    fn test_parse_unrecognized_value() {
        assert_eq!(PostStatus::parse("live"), None);
        assert_eq!(PostStatus::parse(""), None);
        assert_eq!(PostStatus::parse("DRAFT"), None);
    }

    #[test]
    fn test_as_str_round_trip() {
        for status in [
            PostStatus::Draft,
            PostStatus::Published,
            PostStatus::Scheduled,
        ] {
            assert_eq!(PostStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_policy_deserializes_kebab_case() {
        let keep: PastSchedulePolicy = serde_yaml::from_str("keep").unwrap();
        let publish: PastSchedulePolicy = serde_yaml::from_str("publish-now").unwrap();
        assert_eq!(keep, PastSchedulePolicy::Keep);
        assert_eq!(publish, PastSchedulePolicy::PublishNow);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let yaml = serde_yaml::to_string(&PostStatus::Published).unwrap();
        assert_eq!(yaml.trim(), "published");
    }
}
