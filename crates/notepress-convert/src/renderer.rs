//! HTML rendering via pulldown-cmark.
//!
//! The parser runs with tables, task lists, and strikethrough enabled.
//! A small event transform layered on top handles what the target platform
//! needs beyond stock CommonMark: `:shortcode:` emoji in text runs and
//! `target="_blank"` on external links. Headings render at their written
//! level; there is no automatic demotion.

use std::sync::LazyLock;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use regex::{Captures, Regex};

/// `:shortcode:` emoji candidates. Unknown shortcodes pass through verbatim.
static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([a-zA-Z0-9_+-]+):").unwrap());

/// Render markdown to HTML.
pub(crate) fn render_html(markdown: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, EventTransform::new(parser));
    output
}

/// Event adaptor applying emoji shortcodes and external-link handling.
struct EventTransform<I> {
    inner: I,
    in_code_block: bool,
    /// Per-link flag: did we emit a raw `<a>` for this link?
    link_stack: Vec<bool>,
}

impl<I> EventTransform<I> {
    fn new(inner: I) -> Self {
        Self {
            inner,
            in_code_block: false,
            link_stack: Vec::new(),
        }
    }
}

impl<'a, I: Iterator<Item = Event<'a>>> Iterator for EventTransform<I> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Event<'a>> {
        let event = self.inner.next()?;
        Some(match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                self.in_code_block = true;
                Event::Start(Tag::CodeBlock(kind))
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                Event::End(TagEnd::CodeBlock)
            }
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                if is_external_link(&dest_url) {
                    self.link_stack.push(true);
                    Event::Html(external_anchor(&dest_url, &title).into())
                } else {
                    self.link_stack.push(false);
                    Event::Start(Tag::Link {
                        link_type,
                        dest_url,
                        title,
                        id,
                    })
                }
            }
            Event::End(TagEnd::Link) => {
                if self.link_stack.pop() == Some(true) {
                    Event::Html("</a>".into())
                } else {
                    Event::End(TagEnd::Link)
                }
            }
            Event::Text(text) if !self.in_code_block => Event::Text(replace_shortcodes(&text)),
            other => other,
        })
    }
}

fn is_external_link(dest: &str) -> bool {
    dest.starts_with("http://") || dest.starts_with("https://")
}

/// Build an `<a>` opening tag that opens in a new browsing context.
fn external_anchor(dest: &str, title: &str) -> String {
    if title.is_empty() {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">"#,
            escape_attr(dest)
        )
    } else {
        format!(
            r#"<a href="{}" title="{}" target="_blank" rel="noopener">"#,
            escape_attr(dest),
            escape_attr(title)
        )
    }
}

/// Replace known `:shortcode:` runs with their emoji.
fn replace_shortcodes(text: &CowStr<'_>) -> CowStr<'static> {
    if !text.contains(':') {
        return CowStr::from(text.to_string());
    }
    let replaced = SHORTCODE.replace_all(text, |captures: &Captures<'_>| {
        emojis::get_by_shortcode(&captures[1])
            .map_or_else(|| captures[0].to_owned(), |emoji| emoji.as_str().to_owned())
    });
    CowStr::from(replaced.into_owned())
}

/// Minimal attribute-value escaping.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render_html("Hello, world!"), "<p>Hello, world!</p>\n");
    }

    #[test]
    fn test_heading_levels_not_demoted() {
        let html = render_html("# Top\n\n## Next");
        assert!(html.contains("<h1>Top</h1>"));
        assert!(html.contains("<h2>Next</h2>"));
    }

    #[test]
    fn test_table_rendering() {
        let html = render_html("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
    }

    #[test]
    fn test_task_list_rendering() {
        let html = render_html("- [ ] todo\n- [x] done");
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_strikethrough() {
        let html = render_html("~~gone~~");
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_fenced_code_block() {
        let html = render_html("```rust\nfn main() {}\n```");
        assert!(html.contains("language-rust"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn test_local_image_rendered() {
        let html = render_html("![alt text](pic.png)");
        assert!(html.contains(r#"<img src="pic.png" alt="alt text""#));
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let html = render_html("[site](https://example.com)");
        assert!(
            html.contains(r#"<a href="https://example.com" target="_blank" rel="noopener">site</a>"#)
        );
    }

    #[test]
    fn test_relative_link_untouched() {
        let html = render_html("[page](other-note.md)");
        assert!(html.contains(r#"<a href="other-note.md">page</a>"#));
    }

    #[test]
    fn test_emoji_shortcode_replaced() {
        let html = render_html("Launch day :tada:");
        assert!(html.contains("🎉"));
        assert!(!html.contains(":tada:"));
    }

    #[test]
    fn test_unknown_shortcode_passes_through() {
        let html = render_html("a :definitely_not_an_emoji_xyz: b");
        assert!(html.contains(":definitely_not_an_emoji_xyz:"));
    }

    #[test]
    fn test_shortcodes_untouched_in_code_blocks() {
        let html = render_html("```\n:tada:\n```");
        assert!(html.contains(":tada:"));
        assert!(!html.contains("🎉"));
    }

    #[test]
    fn test_inline_code_untouched() {
        let html = render_html("use `:tada:` here");
        assert!(html.contains("<code>:tada:</code>"));
    }
}
