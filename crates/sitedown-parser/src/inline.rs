//! Inline markdown parser.
//!
//! This module turns a text run into typed fragments: delimiter styles
//! (bold, italic, code) first, then images, then links. Later passes only
//! look at fragments that are still plain text.

use crate::tokenizer::Tokenizer;
use log::trace;
use regex::{Captures, Regex};
use sitedown_core::{Role, StyleMap, TextFragment, TextKind};
use std::sync::LazyLock;

/// Regex for matching images: ![alt](url)
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]+)\]\(([^()]+)\)").unwrap());

/// Regex for matching links: [text](url)
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]\(([^()]+)\)").unwrap());

/// A link or image found in a text run, with its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Byte offset of the first character of the match
    pub start: usize,
    /// Byte offset just past the match
    pub end: usize,
    /// Link text or image alt
    pub text: String,
    /// Target URL
    pub url: String,
}

impl InlineMatch {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            start: whole.start(),
            end: whole.end(),
            text: caps.get(1)?.as_str().to_string(),
            url: caps.get(2)?.as_str().to_string(),
        })
    }
}

/// Find every `![alt](url)` in `text`.
pub fn find_images(text: &str) -> Vec<InlineMatch> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| InlineMatch::from_captures(&caps))
        .collect()
}

/// Find every `[text](url)` in `text` that is not an image.
pub fn find_links(text: &str) -> Vec<InlineMatch> {
    let mut matches = Vec::new();
    let mut at = 0;
    while let Some(caps) = LINK_RE.captures_at(text, at) {
        let Some(found) = InlineMatch::from_captures(&caps) else {
            break;
        };
        if text[..found.start].ends_with('!') {
            // Image syntax; retry just after the bracket
            at = found.start + 1;
            continue;
        }
        at = found.end;
        matches.push(found);
    }
    matches
}

/// Extract `(alt, url)` pairs for every image in `text`.
///
/// # Example
///
/// ```
/// use sitedown_parser::extract_images;
///
/// let images = extract_images("see ![cat](cat.png) and ![](empty.png)");
/// assert_eq!(images, vec![("cat".to_string(), "cat.png".to_string())]);
/// ```
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text).into_iter().map(|m| (m.text, m.url)).collect()
}

/// Extract `(text, url)` pairs for every link in `text`.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text).into_iter().map(|m| (m.text, m.url)).collect()
}

/// Split plain fragments around images. Styled fragments pass through.
pub fn split_images(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_plain(fragments, find_images, |alt, url| TextFragment::image(alt, url))
}

/// Split plain fragments around links. Styled fragments pass through.
pub fn split_links(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_plain(fragments, find_links, |text, url| TextFragment::link(text, url))
}

/// Parse a text run with the default delimiters, images and links on.
///
/// # Example
///
/// ```
/// use sitedown_parser::text_to_fragments;
///
/// assert_eq!(text_to_fragments("`x` ![a](b)").len(), 3);
/// ```
pub fn text_to_fragments(text: &str) -> Vec<TextFragment> {
    InlineParser::new().parse(text)
}

fn split_plain(
    fragments: Vec<TextFragment>,
    find: fn(&str) -> Vec<InlineMatch>,
    make: fn(String, String) -> TextFragment,
) -> Vec<TextFragment> {
    let mut result = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if !fragment.is_plain() {
            result.push(fragment);
            continue;
        }

        let matches = find(&fragment.content);
        if matches.is_empty() {
            result.push(fragment);
            continue;
        }

        let text = fragment.content;
        let mut cursor = 0;
        for found in matches {
            if found.start > cursor {
                result.push(TextFragment::plain(&text[cursor..found.start]));
            }
            cursor = found.end;
            result.push(make(found.text, found.url));
        }
        if cursor < text.len() {
            result.push(TextFragment::plain(&text[cursor..]));
        }
    }
    result
}

/// Inline markdown parser.
///
/// Parses a text run into [`TextFragment`]s.
#[derive(Debug, Clone)]
pub struct InlineParser {
    tokenizer: Tokenizer,
    /// Whether to process links
    pub process_links: bool,
    /// Whether to process images
    pub process_images: bool,
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineParser {
    /// Create a new inline parser with the default delimiters.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            process_links: true,
            process_images: true,
        }
    }

    /// Create a parser with a custom delimiter map.
    pub fn with_styles(styles: StyleMap) -> Self {
        Self {
            tokenizer: Tokenizer::with_styles(styles),
            process_links: true,
            process_images: true,
        }
    }

    /// Create parser with specific settings.
    pub fn with_settings(styles: StyleMap, process_links: bool, process_images: bool) -> Self {
        Self {
            tokenizer: Tokenizer::with_styles(styles),
            process_links,
            process_images,
        }
    }

    pub fn styles(&self) -> &StyleMap {
        self.tokenizer.styles()
    }

    /// Parse a text run into fragments.
    ///
    /// This is the main entry point for inline parsing.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_parser::InlineParser;
    /// use sitedown_core::{TextFragment, TextKind};
    ///
    /// let fragments = InlineParser::new().parse("a **b** [c](d)");
    /// assert_eq!(fragments, vec![
    ///     TextFragment::plain("a "),
    ///     TextFragment::new(TextKind::Bold, "b"),
    ///     TextFragment::plain(" "),
    ///     TextFragment::link("c", "d"),
    /// ]);
    /// ```
    pub fn parse(&self, text: &str) -> Vec<TextFragment> {
        let mut fragments = self.split_delimiters(vec![TextFragment::plain(text)]);
        if self.process_images {
            fragments = split_images(fragments);
        }
        if self.process_links {
            fragments = split_links(fragments);
        }
        trace!("inline: {} fragments from {} bytes", fragments.len(), text.len());
        fragments
    }

    /// Apply delimiter styling to every plain fragment.
    pub fn split_delimiters(&self, fragments: Vec<TextFragment>) -> Vec<TextFragment> {
        let mut result = Vec::new();
        for fragment in fragments {
            if fragment.is_plain() {
                self.emit_spans(&fragment.content, &mut result);
            } else {
                result.push(fragment);
            }
        }
        result
    }

    /// Walk the delimiter events of `text` and emit styled spans.
    ///
    /// Text under several active styles is emitted once per style, in
    /// the order the styles were opened.
    fn emit_spans(&self, text: &str, out: &mut Vec<TextFragment>) {
        let mut active: Vec<TextKind> = Vec::new();
        let mut cursor = 0;

        for event in self.tokenizer.events(text) {
            if event.position > cursor {
                emit_styled(out, &text[cursor..event.position], &active);
            }
            match event.role {
                Role::Open => {
                    if !active.contains(&event.kind) {
                        active.push(event.kind);
                    }
                }
                Role::Close => active.retain(|kind| *kind != event.kind),
            }
            cursor = event.end();
        }

        if cursor < text.len() {
            emit_styled(out, &text[cursor..], &active);
        }
    }
}

fn emit_styled(out: &mut Vec<TextFragment>, span: &str, active: &[TextKind]) {
    if active.is_empty() {
        out.push(TextFragment::plain(span));
    } else {
        out.extend(active.iter().map(|&kind| TextFragment::new(kind, span)));
    }
}
