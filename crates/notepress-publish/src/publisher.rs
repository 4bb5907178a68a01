//! Publish pipeline: convert, upload, rewrite, create.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use notepress_api::{BlogClient, CreatedPost, PostPayload};
use notepress_convert::{ConversionResult, ImageReference, convert, parse_front_matter, replace_image_urls};
use notepress_meta::{PastSchedulePolicy, PostMetadata, PostStatus, resolve};

use crate::error::PublishError;
use crate::store::ImageStore;

/// Knobs applied to every publish run.
#[derive(Clone, Copy, Debug, Default)]
pub struct PublishOptions {
    /// Status used when front matter has none.
    pub default_status: PostStatus,
    /// What to do with a scheduled post whose date is past or missing.
    pub past_schedule: PastSchedulePolicy,
}

/// Outcome of a successful publish run.
#[derive(Debug)]
pub struct PublishResult {
    /// The post as created by the platform.
    pub post: CreatedPost,
    /// Number of images uploaded.
    pub images_uploaded: usize,
    /// Warnings produced during conversion.
    pub warnings: Vec<String>,
}

/// Network-free dry run of the publish pipeline.
#[derive(Debug)]
pub struct Preview {
    /// Resolved publication metadata.
    pub metadata: PostMetadata,
    /// Rendered HTML, still referencing local image paths.
    pub html: String,
    /// Local path of the image that would become featured.
    pub featured_image: Option<String>,
    /// Local paths that would be uploaded as content images, in upload order.
    pub content_images: Vec<String>,
    /// Warnings produced during conversion.
    pub warnings: Vec<String>,
}

/// Publishes notes to a blog through a [`BlogClient`].
pub struct Publisher<'a> {
    client: &'a BlogClient,
    options: PublishOptions,
}

impl<'a> Publisher<'a> {
    /// Create a publisher using the given client and options.
    #[must_use]
    pub fn new(client: &'a BlogClient, options: PublishOptions) -> Self {
        Self { client, options }
    }

    /// Publish a note: convert it, upload every local image it references
    /// (featured image first), rewrite the HTML to point at the remote
    /// URLs, and create the post.
    ///
    /// `note_name` is the note's filename; its stem becomes the fallback
    /// title. `now` is the scheduling reference instant. The run aborts on
    /// the first upload failure; nothing is rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Image`] when a referenced image cannot be
    /// read and [`PublishError::Api`] when the platform rejects a request.
    pub fn publish(
        &self,
        note_name: &str,
        note_text: &str,
        store: &dyn ImageStore,
        now: DateTime<Utc>,
    ) -> Result<PublishResult, PublishError> {
        let conversion = convert(note_text);
        let metadata = resolve_note(note_name, note_text, &self.options, now);

        let mut url_map = HashMap::new();
        for image in upload_plan(&conversion) {
            let data = store
                .read_image(&image.path)
                .map_err(|source| PublishError::Image {
                    path: image.path.clone(),
                    source,
                })?;
            let uploaded = self.client.upload_image(
                file_name(&image.path),
                &data,
                content_type_for(&image.path),
            )?;
            debug!("Uploaded '{}' -> {}", image.path, uploaded.url);
            url_map.insert(image.path.clone(), uploaded.url);
        }

        let feature_image = conversion
            .featured_image
            .as_ref()
            .and_then(|featured| url_map.get(&featured.path))
            .cloned();
        let html = replace_image_urls(&conversion.html, &url_map);

        let payload = PostPayload {
            title: metadata.title,
            html,
            status: metadata.status,
            slug: metadata.slug,
            tags: metadata.tags,
            published_at: metadata.published_at,
            feature_image,
        };
        let post = self.client.create_post(&payload)?;

        info!("Published '{}' as {} ({})", post.title, post.id, post.url);

        Ok(PublishResult {
            post,
            images_uploaded: url_map.len(),
            warnings: conversion.warnings,
        })
    }
}

/// Run the conversion and resolution stages without any network access.
#[must_use]
pub fn preview(
    note_name: &str,
    note_text: &str,
    options: &PublishOptions,
    now: DateTime<Utc>,
) -> Preview {
    let conversion = convert(note_text);
    let metadata = resolve_note(note_name, note_text, options, now);

    let featured_image = conversion
        .featured_image
        .as_ref()
        .map(|image| image.path.clone());
    let content_images = upload_plan(&conversion)
        .into_iter()
        .filter(|image| Some(&image.path) != featured_image.as_ref())
        .map(|image| image.path.clone())
        .collect();

    Preview {
        metadata,
        html: conversion.html,
        featured_image,
        content_images,
        warnings: conversion.warnings,
    }
}

fn resolve_note(
    note_name: &str,
    note_text: &str,
    options: &PublishOptions,
    now: DateTime<Utc>,
) -> PostMetadata {
    let fallback_title = note_name.strip_suffix(".md").unwrap_or(note_name);
    let front_matter = parse_front_matter(note_text);
    resolve(
        front_matter.as_ref(),
        fallback_title,
        options.default_status,
        options.past_schedule,
        now,
    )
}

/// Images to upload, featured first, deduplicated by path.
fn upload_plan(conversion: &ConversionResult) -> Vec<&ImageReference> {
    let mut plan: Vec<&ImageReference> = Vec::new();
    let candidates = conversion
        .featured_image
        .iter()
        .chain(conversion.images.iter());
    for image in candidates {
        if !plan.iter().any(|seen| seen.path == image.path) {
            plan.push(image);
        }
    }
    plan
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn content_type_for(path: &str) -> &'static str {
    let extension = path.rsplit('.').next().map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
