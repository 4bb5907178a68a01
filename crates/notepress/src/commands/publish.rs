//! `notepress publish` command implementation.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use notepress_api::BlogClient;
use notepress_config::Config;
use notepress_publish::{FsImageStore, Preview, PublishOptions, PublishResult, Publisher, preview};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the publish command.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Path to the markdown note.
    note: PathBuf,

    /// Preview the conversion without uploading anything.
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Path to configuration file (default: auto-discover notepress.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// # Errors
    ///
    /// Returns an error if the note cannot be read, the configuration is
    /// invalid, or the publish fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref())?;
        let options = PublishOptions {
            default_status: config.publish.default_status,
            past_schedule: config.publish.past_schedule,
        };

        let note_text = std::fs::read_to_string(&self.note)?;
        let note_name = self
            .note
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| CliError::Validation("note path has no filename".to_owned()))?;
        let now = Utc::now();

        if self.dry_run {
            let result = preview(note_name, &note_text, &options, now);
            print_preview(&output, &result);
            return Ok(());
        }

        let blog = config.require_blog()?;
        let client = BlogClient::new(&blog.base_url, &blog.token);
        let publisher = Publisher::new(&client, options);

        let note_dir = self.note.parent().unwrap_or_else(|| std::path::Path::new("."));
        let store = FsImageStore::new(note_dir);

        output.info(&format!("Publishing {}...", self.note.display()));
        let result = publisher.publish(note_name, &note_text, &store, now)?;
        print_result(&output, &result);

        Ok(())
    }
}

fn print_preview(output: &Output, result: &Preview) {
    output.highlight("\n[DRY RUN] Nothing uploaded.");

    output.info(&format!("Title: {}", result.metadata.title));
    output.info(&format!("Status: {}", result.metadata.status.as_str()));
    if let Some(slug) = &result.metadata.slug {
        output.info(&format!("Slug: {slug}"));
    }
    if !result.metadata.tags.is_empty() {
        output.info(&format!("Tags: {}", result.metadata.tags.join(", ")));
    }
    if let Some(published_at) = result.metadata.published_at {
        output.info(&format!("Publish at: {published_at}"));
    }

    if let Some(featured) = &result.featured_image {
        output.info(&format!("\nFeatured image: {featured}"));
    }
    if !result.content_images.is_empty() {
        output.info(&format!("\nImages to upload ({}):", result.content_images.len()));
        for path in &result.content_images {
            output.info(&format!("  -> {path}"));
        }
    }

    print_warnings(output, &result.warnings);
}

fn print_result(output: &Output, result: &PublishResult) {
    output.success("\nPost created successfully!");
    output.info(&format!("ID: {}", result.post.id));
    output.info(&format!("Title: {}", result.post.title));
    output.info(&format!("Status: {}", result.post.status));
    output.info(&format!("URL: {}", result.post.url));

    if result.images_uploaded > 0 {
        output.info(&format!("Images uploaded: {}", result.images_uploaded));
    }

    print_warnings(output, &result.warnings);
}

fn print_warnings(output: &Output, warnings: &[String]) {
    if !warnings.is_empty() {
        output.warning(&format!("\nWarnings ({}):", warnings.len()));
        for warning in warnings {
            output.info(&format!("  - {warning}"));
        }
    }
}
