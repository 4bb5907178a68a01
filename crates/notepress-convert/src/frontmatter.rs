//! YAML front-matter detection and stripping.
//!
//! A front-matter block is a line of exactly `---` at the very start of the
//! note, zero or more content lines, and a closing line of exactly `---`
//! (optionally followed by a trailing newline). Anything else — including a
//! missing closing delimiter or trailing junk on the `---` lines — is
//! treated as "no front matter" and the input passes through unchanged.

use std::sync::LazyLock;

use regex::Regex;

static FRONT_MATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A---\r?\n((?:.*\r?\n)*?)---\r?(?:\n|\z)").unwrap());

/// Split a note into its content and the byte length of the stripped
/// front-matter block.
///
/// Returns `(content, offset)` where `offset` is `0` when no well-formed
/// front matter is present.
#[must_use]
pub fn strip_front_matter(text: &str) -> (&str, usize) {
    match FRONT_MATTER.find(text) {
        Some(m) => (&text[m.end()..], m.end()),
        None => (text, 0),
    }
}

/// Parse the front-matter block into a YAML mapping.
///
/// Returns `None` when the block is absent, empty, not valid YAML, or not a
/// mapping at the top level. Malformed metadata is never an error.
#[must_use]
pub fn parse_front_matter(text: &str) -> Option<serde_yaml::Mapping> {
    let captures = FRONT_MATTER.captures(text)?;
    let block = captures.get(1)?.as_str().trim();
    if block.is_empty() {
        return None;
    }
    let value: serde_yaml::Value = serde_yaml::from_str(block).ok()?;
    match value {
        serde_yaml::Value::Mapping(mapping) => Some(mapping),
        _ => None,
    }
}
