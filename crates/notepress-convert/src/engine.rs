//! Conversion pipeline.
//!
//! Rewrite stages run in a fixed order:
//!
//! 1. remove the featured image's originating line
//! 2. normalize embed mentions to standard image syntax
//! 3. flatten wiki-links to plain text
//! 4. render HTML
//!
//! Stage 2 must precede stage 3: embed syntax is a superset of link syntax,
//! so flattening first would corrupt every embed. `test_stage_order_embeds_
//! before_wiki_links` guards the ordering.

use crate::frontmatter::strip_front_matter;
use crate::images::{ImageReference, extract_images};
use crate::lines::LineIndex;
use crate::renderer::render_html;
use crate::wiki::{flatten_wiki_links, normalize_embeds};

/// Output of the conversion engine.
#[derive(Clone, Debug)]
pub struct ConversionResult {
    /// Rendered HTML with wiki-links flattened and embeds normalized.
    pub html: String,
    /// Human-readable notes about lossy or ambiguous transformations.
    /// Currently always empty; the slot is part of the contract.
    pub warnings: Vec<String>,
    /// Content images in extraction order, excluding the featured image.
    pub images: Vec<ImageReference>,
    /// The single image promoted from the first non-blank content line.
    pub featured_image: Option<ImageReference>,
}

/// Convert raw note text into HTML plus an image manifest.
///
/// Pure function: no I/O, no clock, re-entrant. Malformed front matter is
/// treated as absent, external image URLs are left untouched, and at most
/// one mention is promoted to featured even when several share the first
/// content line.
#[must_use]
pub fn convert(text: &str) -> ConversionResult {
    let (content, _front_matter_len) = strip_front_matter(text);
    let lines = LineIndex::new(content);

    let mut images = extract_images(content, &lines);
    let featured_image = images
        .iter()
        .position(|image| image.is_first_line)
        .map(|index| images.remove(index));

    let mut body = content.to_owned();
    if let Some(featured) = &featured_image
        && let Some(line) = lines.first_content_line()
        && let Some((start, end)) = lines.line_span(line, content.len())
        && content[start..end].contains(&featured.original_syntax)
    {
        body.replace_range(start..end, "");
    }

    let body = normalize_embeds(&body);
    let body = flatten_wiki_links(&body);
    let html = render_html(&body);

    ConversionResult {
        html,
        warnings: Vec::new(),
        images,
        featured_image,
    }
}
