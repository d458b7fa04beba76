//! Markdown -> HTML rendering for post content.
//!
//! Matches what the remote editor produces for Markdown posts: raw HTML
//! passes through, void elements are XHTML self-closing, soft line breaks
//! render as `<br />`, bare URLs become links, and smart punctuation is
//! applied.

use pulldown_cmark::{html, CowStr, Event, LinkType, Options, Parser, Tag};
use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^\s<>]+").unwrap());

/// Render Markdown source to HTML.
pub fn render(raw: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut events: Vec<Event> = Vec::new();
    let mut link_depth = 0usize;
    let mut in_code_block = false;

    for event in Parser::new_ext(raw, options) {
        match event {
            // single newlines are line breaks, as in the remote editor
            Event::SoftBreak => events.push(Event::HardBreak),
            Event::Start(tag @ Tag::Link(..)) => {
                link_depth += 1;
                events.push(Event::Start(tag));
            }
            Event::End(tag @ Tag::Link(..)) => {
                link_depth -= 1;
                events.push(Event::End(tag));
            }
            Event::Start(tag @ Tag::CodeBlock(..)) => {
                in_code_block = true;
                events.push(Event::Start(tag));
            }
            Event::End(tag @ Tag::CodeBlock(..)) => {
                in_code_block = false;
                events.push(Event::End(tag));
            }
            Event::Text(text) if link_depth == 0 && !in_code_block => {
                autolink(&text, &mut events);
            }
            other => events.push(other),
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

/// Split a text run around bare URLs, emitting link events for each match.
fn autolink<'a>(text: &str, events: &mut Vec<Event<'a>>) {
    let mut last = 0;
    for m in URL_RE.find_iter(text) {
        // don't swallow punctuation that ends the sentence, not the URL
        let url = m
            .as_str()
            .trim_end_matches(['.', ',', ';', ':', '!', '?', ')', '"', '\'']);
        if url.is_empty() {
            continue;
        }
        let start = m.start();
        let end = start + url.len();

        if start > last {
            events.push(Event::Text(owned(&text[last..start])));
        }
        let link = Tag::Link(LinkType::Autolink, owned(url), CowStr::from(""));
        events.push(Event::Start(link.clone()));
        events.push(Event::Text(owned(url)));
        events.push(Event::End(link));
        last = end;
    }
    if last < text.len() {
        events.push(Event::Text(owned(&text[last..])));
    }
}

fn owned(s: &str) -> CowStr<'static> {
    CowStr::from(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rendering() {
        let html = render("# Hello\nWorld");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("World"));
    }

    #[test]
    fn test_soft_breaks_become_hard_breaks() {
        let html = render("line one\nline two");
        assert!(html.contains("line one<br />"), "got: {html}");
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = render("before\n\n<div class=\"note\">kept</div>\n\nafter");
        assert!(html.contains("<div class=\"note\">kept</div>"));
    }

    #[test]
    fn test_bare_urls_are_linked() {
        let html = render("see https://example.com/a for details");
        assert!(
            html.contains("<a href=\"https://example.com/a\">https://example.com/a</a>"),
            "got: {html}"
        );
    }

    #[test]
    fn test_trailing_punctuation_is_not_part_of_url() {
        let html = render("visit https://example.com.");
        assert!(html.contains("href=\"https://example.com\""), "got: {html}");
        assert!(html.contains("</a>."), "got: {html}");
    }

    #[test]
    fn test_existing_links_are_untouched() {
        let html = render("[here](https://example.com/a)");
        assert_eq!(
            html.matches("https://example.com/a").count(),
            1,
            "got: {html}"
        );
    }

    #[test]
    fn test_urls_in_code_are_not_linked() {
        let html = render("```\nhttps://example.com\n```");
        assert!(!html.contains("<a href"), "got: {html}");
    }

    #[test]
    fn test_smart_punctuation() {
        let html = render("\"quoted\"");
        assert!(html.contains('\u{201c}'), "got: {html}");
    }
}
