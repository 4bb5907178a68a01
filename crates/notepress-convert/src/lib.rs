//! Note-to-HTML conversion engine.
//!
//! Converts a note written in extended markdown (YAML front matter,
//! wiki-links, `![[...]]` embeds) into clean HTML and an image manifest:
//!
//! 1. Strip front matter ([`frontmatter`])
//! 2. Extract and classify image mentions ([`images`])
//! 3. Rewrite content in a fixed stage order ([`engine`])
//! 4. Render HTML via pulldown-cmark ([`renderer`])
//!
//! Everything in this crate is a pure function of its input: no I/O, no
//! ambient clock, safe to call concurrently. Malformed input never errors;
//! it degrades to the most conservative interpretation (no front matter,
//! no featured image).
//!
//! [`replace_image_urls`] is the companion for the post-upload phase: once
//! every local image has a remote URL, it rewrites `src` attributes in the
//! rendered HTML.

mod engine;
mod frontmatter;
mod images;
mod lines;
mod renderer;
mod rewrite;
mod wiki;

pub use engine::{ConversionResult, convert};
pub use frontmatter::{parse_front_matter, strip_front_matter};
pub use images::ImageReference;
pub use rewrite::replace_image_urls;
