//! Post-upload URL rewriting.

use std::collections::HashMap;

use regex::Regex;

/// Replace `src` attributes pointing at local image paths with their
/// uploaded remote URLs.
///
/// For every mapped path, both `src="<path>"` and `src='<path>'` forms are
/// rewritten; the path is regex-escaped before matching. Paths absent from
/// the map are left untouched, so a partial mapping never corrupts
/// unrelated references. Call this exactly once per publish attempt, after
/// all uploads have succeeded.
#[must_use]
pub fn replace_image_urls(html: &str, url_map: &HashMap<String, String>) -> String {
    let mut result = html.to_owned();
    for (path, url) in url_map {
        let pattern = Regex::new(&format!(r#"src=["']{}["']"#, regex::escape(path)))
            .expect("escaped literal is a valid pattern");
        result = pattern
            .replace_all(&result, |_: &regex::Captures<'_>| format!(r#"src="{url}""#))
            .into_owned();
    }
    result
}
