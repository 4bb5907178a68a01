//! Request and response types for the blog API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notepress_meta::PostStatus;

/// Response from an image upload.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadedImage {
    /// Remote URL of the uploaded image.
    pub url: String,
}

/// Post creation payload.
#[derive(Clone, Debug, Serialize)]
pub struct PostPayload {
    /// Post title.
    pub title: String,
    /// Rendered HTML body.
    pub html: String,
    /// Publication status.
    pub status: PostStatus,
    /// Custom URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Tags in front-matter order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Scheduled or explicit publication instant (RFC 3339).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Remote URL of the featured image, if one was promoted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<String>,
}

/// Response from post creation.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedPost {
    /// Server-assigned post id.
    pub id: String,
    /// Public URL of the post.
    pub url: String,
    /// Title as stored by the platform.
    pub title: String,
    /// Status as stored by the platform.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn minimal_payload() -> PostPayload {
        PostPayload {
            title: "Hi".to_owned(),
            html: "<p>Hi</p>".to_owned(),
            status: PostStatus::Draft,
            slug: None,
            tags: Vec::new(),
            published_at: None,
            feature_image: None,
        }
    }

    #[test]
    fn test_payload_omits_absent_fields() {
        let json = serde_json::to_value(minimal_payload()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["status"], "draft");
        assert!(!object.contains_key("slug"));
        assert!(!object.contains_key("tags"));
        assert!(!object.contains_key("published_at"));
        assert!(!object.contains_key("feature_image"));
    }

    #[test]
    fn test_payload_published_at_is_rfc3339() {
        let mut payload = minimal_payload();
        payload.status = PostStatus::Scheduled;
        payload.published_at = Some(
            DateTime::parse_from_rfc3339("2026-09-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );
        let json = serde_json::to_value(payload).unwrap();
        assert_eq!(json["status"], "scheduled");
        assert_eq!(json["published_at"], "2026-09-01T10:00:00Z");
    }

    #[test]
    fn test_payload_full_fields() {
        let mut payload = minimal_payload();
        payload.slug = Some("hi-there".to_owned());
        payload.tags = vec!["rust".to_owned()];
        payload.feature_image = Some("https://cdn/img.png".to_owned());
        let json = serde_json::to_value(payload).unwrap();
        assert_eq!(json["slug"], "hi-there");
        assert_eq!(json["tags"][0], "rust");
        assert_eq!(json["feature_image"], "https://cdn/img.png");
    }

    #[test]
    fn test_created_post_deserializes() {
        let json = r#"{"id":"42","url":"https://blog/p/hi","title":"Hi","status":"draft"}"#;
        let post: CreatedPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "42");
        assert_eq!(post.url, "https://blog/p/hi");
    }

    #[test]
    fn test_uploaded_image_ignores_extra_fields() {
        let json = r#"{"url":"https://cdn/a.png","size":123}"#;
        let image: UploadedImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.url, "https://cdn/a.png");
    }
}
