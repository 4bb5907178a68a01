//! Embed normalization and wiki-link flattening.
//!
//! Embed syntax (`![[...]]`) is visually a superset of link syntax
//! (`[[...]]`), so the engine must run [`normalize_embeds`] before
//! [`flatten_wiki_links`]; flattening first would corrupt every embed.
//! The stage order lives in `engine.rs` and is covered by a test there.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::images::EMBED_IMAGE;

/// `[[target]]` or `[[target|display]]`
static WIKI_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]|]+)(?:\|([^\]]*))?\]\]").unwrap());

/// Rewrite every embed mention into standard image syntax `![alt](path)`.
///
/// This is a blanket syntax rewrite: unlike extraction, it does not check
/// the path extension, so non-image embeds also become standard syntax
/// rather than being misparsed as wiki-links later.
pub(crate) fn normalize_embeds(content: &str) -> Cow<'_, str> {
    EMBED_IMAGE.replace_all(content, |captures: &Captures<'_>| {
        let path = &captures[1];
        let alt = captures.get(2).map_or("", |m| m.as_str());
        format!("![{alt}]({path})")
    })
}

/// Flatten every wiki-link into plain text: the display text when present,
/// otherwise the target.
pub(crate) fn flatten_wiki_links(content: &str) -> Cow<'_, str> {
    WIKI_LINK.replace_all(content, |captures: &Captures<'_>| {
        captures
            .get(2)
            .map_or_else(|| captures[1].to_owned(), |m| m.as_str().to_owned())
    })
}
