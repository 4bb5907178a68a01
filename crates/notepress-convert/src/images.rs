//! Image mention extraction and classification.
//!
//! Two independent passes over the stripped content accumulate into one
//! ordered collection: standard markdown images first, then embed-syntax
//! images. External URLs (`http://`, `https://`, `data:`) are excluded
//! entirely; embeds must carry a known image extension. Which mention (if
//! any) becomes the featured image is decided afterwards by the engine, not
//! here.

use std::sync::LazyLock;

use regex::Regex;

use crate::lines::LineIndex;

/// `![alt](path)`
static MARKDOWN_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// `![[path]]` or `![[path|alt]]`
pub(crate) static EMBED_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[\[([^\]|]+)(?:\|([^\]]*))?\]\]").unwrap());

/// Extensions an embed must carry to count as an image mention.
const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp"];

/// One located image mention in the note body.
///
/// Created once per regex match during extraction and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageReference {
    /// Exact matched substring, used for removal and lookup.
    pub original_syntax: String,
    /// Raw path or URL as written in the source.
    pub path: String,
    /// Alt text; empty string when none was given.
    pub alt: String,
    /// Whether the mention used embed syntax rather than standard syntax.
    pub is_embed: bool,
    /// Whether the mention occurs on the first non-blank content line.
    pub is_first_line: bool,
}

/// Whether a path points outside the vault and is excluded from extraction.
fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:")
}

/// Whether a path ends in one of the recognized image extensions
/// (case-insensitive).
fn has_image_extension(path: &str) -> bool {
    path.rsplit_once('.').is_some_and(|(_, ext)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    })
}

/// Extract every locally-pathed image mention from `content`.
///
/// Ordering is extraction order: all standard-syntax matches in source
/// order, then all embed-syntax matches in source order.
pub(crate) fn extract_images(content: &str, lines: &LineIndex) -> Vec<ImageReference> {
    let first_line = lines.first_content_line();
    let on_first_line =
        |offset: usize| first_line.is_some_and(|line| lines.line_of(offset) == line);

    let mut images = Vec::new();

    for captures in MARKDOWN_IMAGE.captures_iter(content) {
        let whole = captures.get(0).expect("match has group 0");
        let path = &captures[2];
        if is_external(path) {
            continue;
        }
        images.push(ImageReference {
            original_syntax: whole.as_str().to_owned(),
            path: path.to_owned(),
            alt: captures[1].to_owned(),
            is_embed: false,
            is_first_line: on_first_line(whole.start()),
        });
    }

    for captures in EMBED_IMAGE.captures_iter(content) {
        let whole = captures.get(0).expect("match has group 0");
        let path = &captures[1];
        if !has_image_extension(path) {
            continue;
        }
        images.push(ImageReference {
            original_syntax: whole.as_str().to_owned(),
            path: path.to_owned(),
            alt: captures
                .get(2)
                .map_or(String::new(), |alt| alt.as_str().to_owned()),
            is_embed: true,
            is_first_line: on_first_line(whole.start()),
        });
    }

    images
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn extract(content: &str) -> Vec<ImageReference> {
        extract_images(content, &LineIndex::new(content))
    }

    #[test]
    fn test_extract_standard_image() {
        let images = extract("![cover photo](cover.png)");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].path, "cover.png");
        assert_eq!(images[0].alt, "cover photo");
        assert_eq!(images[0].original_syntax, "![cover photo](cover.png)");
        assert!(!images[0].is_embed);
        assert!(images[0].is_first_line);
    }

    #[test]
    fn test_extract_standard_image_empty_alt() {
        let images = extract("![](pic.jpg)");
        assert_eq!(images[0].alt, "");
    }

    #[test]
    fn test_external_urls_excluded() {
        let content = "![a](http://example.com/a.png)\n\
                       ![b](https://example.com/b.png)\n\
                       ![c](data:image/png;base64,AAAA)\n\
                       ![d](local.png)";
        let images = extract(content);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].path, "local.png");
    }

    #[test]
    fn test_extract_embed_image() {
        let images = extract("Text\n\n![[diagram.PNG]]");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].path, "diagram.PNG");
        assert_eq!(images[0].alt, "");
        assert!(images[0].is_embed);
        assert!(!images[0].is_first_line);
    }

    #[test]
    fn test_extract_embed_image_with_alt() {
        let images = extract("![[shot.webp|A screenshot]]");
        assert_eq!(images[0].alt, "A screenshot");
        assert_eq!(images[0].original_syntax, "![[shot.webp|A screenshot]]");
    }

    #[test]
    fn test_non_image_embeds_ignored() {
        let images = extract("![[Other Note]] and ![[doc.pdf]] and ![[ok.gif]]");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].path, "ok.gif");
    }

    #[test]
    fn test_extraction_order_standard_then_embed() {
        let content = "![[first.png]]\n![second](second.png)\n![[third.png]]";
        let images = extract(content);
        let paths: Vec<_> = images.iter().map(|i| i.path.as_str()).collect();
        // Standard pass runs first even though an embed appears earlier
        // in the source.
        assert_eq!(paths, ["second.png", "first.png", "third.png"]);
    }

    #[test]
    fn test_first_line_classification_after_blank_lines() {
        let content = "\n\n![cover](cover.png) and ![[also.png]]\n![later](later.png)";
        let images = extract(content);
        assert!(images[0].is_first_line, "cover.png");
        assert!(!images[1].is_first_line, "later.png");
        assert!(images[2].is_first_line, "also.png");
    }

    #[test]
    fn test_no_content_lines_means_no_first_line() {
        let images = extract("");
        assert!(images.is_empty());
    }

    #[test]
    fn test_image_extension_case_insensitive() {
        assert!(has_image_extension("a.PNG"));
        assert!(has_image_extension("a.JpEg"));
        assert!(!has_image_extension("a.PDF"));
        assert!(!has_image_extension("no-extension"));
    }
}
