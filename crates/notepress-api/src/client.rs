//! HTTP client for the blog REST API.
//!
//! Token-authenticated sync client built on ureq. Two endpoints matter for
//! publishing: `POST /images` (multipart upload) and `POST /posts` (JSON).

use std::time::Duration;

use rand::RngExt;
use tracing::info;
use ureq::Agent;

use crate::error::ApiError;
use crate::types::{CreatedPost, PostPayload, UploadedImage};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Blog REST API client.
pub struct BlogClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl BlogClient {
    /// Create a client for the given API base URL and access token.
    #[must_use]
    pub fn new(base_url: &str, token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
        }
    }

    /// Upload raw image data; returns its remote URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpRequest`] on transport failure and
    /// [`ApiError::HttpResponse`] when the server rejects the upload.
    pub fn upload_image(
        &self,
        filename: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<UploadedImage, ApiError> {
        let url = format!("{}/images", self.base_url);

        info!("Uploading image '{}' ({} bytes)", filename, data.len());

        // Build multipart form data manually
        let boundary = format!("----NotepressBoundary{:016x}", rand::rng().random::<u64>());
        let mut body = Vec::new();

        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header(
                "Content-Type",
                &format!("multipart/form-data; boundary={boundary}"),
            )
            .header("Accept", "application/json")
            .send(&body[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ApiError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_json()?)
    }

    /// Create a post from the given payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpRequest`] on transport failure and
    /// [`ApiError::HttpResponse`] when the server rejects the post.
    pub fn create_post(&self, payload: &PostPayload) -> Result<CreatedPost, ApiError> {
        let url = format!("{}/posts", self.base_url);

        info!(
            "Creating post '{}' (status={})",
            payload.title,
            payload.status.as_str()
        );

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .send_json(payload)?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ApiError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_json()?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BlogClient::new("https://blog.example.com/api/", "t");
        assert_eq!(client.base_url, "https://blog.example.com/api");
    }

    #[test]
    fn test_base_url_without_trailing_slash_unchanged() {
        let client = BlogClient::new("https://blog.example.com/api", "t");
        assert_eq!(client.base_url, "https://blog.example.com/api");
    }
}
