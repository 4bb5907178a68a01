//! Blog publishing API client.
//!
//! Sync HTTP client for a token-authenticated blog REST API: multipart
//! image upload and JSON post creation. No retry or backoff logic lives
//! here; failures surface to the caller as [`ApiError`].

mod client;
mod error;
mod types;

pub use client::BlogClient;
pub use error::ApiError;
pub use types::{CreatedPost, PostPayload, UploadedImage};
