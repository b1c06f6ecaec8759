//! Block segmentation and classification.
//!
//! A document is split into blocks on blank lines. Each block is
//! classified by its leading markers, and its content is extracted with
//! those markers removed before inline parsing.

use log::debug;
use regex::Regex;
use sitedown_core::BlockKind;
use std::sync::LazyLock;

/// Regex for headings: 1-6 hashes followed by a space
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6}) ").unwrap());

/// Code fence marker
pub const CODE_FENCE: &str = "```";

/// A classified top-level block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block type
    pub kind: BlockKind,
    /// Normalized block text (lines trimmed, joined with `\n`)
    pub text: String,
}

/// Content of a block with its markers stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    /// One text run for the inline parser
    Inline(String),
    /// One text run per list item
    Items(Vec<String>),
}

impl Block {
    /// Classify normalized block text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { kind, text }
    }

    /// Extract the inline content of this block.
    ///
    /// Code blocks are wrapped in `code_delimiter` so the inline parser
    /// reads the whole body as one code span. Without a code delimiter
    /// the body is returned bare.
    pub fn content(&self, code_delimiter: Option<&str>) -> BlockContent {
        let lines = || self.text.lines();
        match self.kind {
            BlockKind::Heading(_) => {
                let mut lines = lines();
                let first = lines
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches('#')
                    .trim_start();
                let text = std::iter::once(first).chain(lines).collect::<Vec<_>>().join(" ");
                BlockContent::Inline(text)
            }
            BlockKind::Code => {
                let body = code_body(&self.text);
                let text = match code_delimiter {
                    Some(delim) => format!("{delim}{body}{delim}"),
                    None => body,
                };
                BlockContent::Inline(text)
            }
            BlockKind::Quote => {
                let text = lines()
                    .map(|line| {
                        let line = line.strip_prefix('>').unwrap_or(line);
                        line.strip_prefix(' ').unwrap_or(line)
                    })
                    .collect::<String>();
                BlockContent::Inline(text)
            }
            BlockKind::UnorderedList => BlockContent::Items(
                lines()
                    .map(|line| line.strip_prefix("- ").unwrap_or(line).to_string())
                    .collect(),
            ),
            BlockKind::OrderedList => BlockContent::Items(
                lines()
                    .map(|line| match line.split_once(". ") {
                        Some((_, item)) => item.to_string(),
                        None => line.to_string(),
                    })
                    .collect(),
            ),
            BlockKind::Paragraph => BlockContent::Inline(lines().collect::<Vec<_>>().join(" ")),
        }
    }
}

/// Split a document into normalized block strings.
///
/// Blocks are separated by blank lines (whitespace-only lines count as
/// blank). Every line is trimmed; whitespace-only input yields no blocks.
///
/// # Example
///
/// ```
/// use sitedown_parser::segment;
///
/// let blocks = segment("# Title\n\n   indented\n   text\n   \nlast");
/// assert_eq!(blocks, vec!["# Title", "indented\ntext", "last"]);
/// ```
pub fn segment(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Classify a normalized block.
pub fn classify(block: &str) -> BlockKind {
    let Some(first) = block.lines().next() else {
        return BlockKind::Paragraph;
    };

    if let Some(caps) = HEADING_RE.captures(first) {
        let level = caps.get(1).map_or(1, |m| m.len());
        return BlockKind::Heading(level as u8);
    }

    if block.len() >= 2 * CODE_FENCE.len()
        && block.starts_with(CODE_FENCE)
        && block.ends_with(CODE_FENCE)
    {
        return BlockKind::Code;
    }

    if block.lines().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if block.lines().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Segment and classify a whole document.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let blocks: Vec<Block> = segment(markdown).into_iter().map(Block::new).collect();
    for (index, block) in blocks.iter().enumerate() {
        debug!("block {}: {}", index, block.kind);
    }
    blocks
}

/// Body of a fenced block: the fence lines are dropped (the opening
/// line's info string with them) and a trailing newline is guaranteed.
fn code_body(block: &str) -> String {
    let inner = block
        .strip_prefix(CODE_FENCE)
        .and_then(|b| b.strip_suffix(CODE_FENCE))
        .unwrap_or_default();
    let mut body = match inner.split_once('\n') {
        Some((_info, rest)) => rest.to_string(),
        None => inner.to_string(),
    };
    if !body.ends_with('\n') {
        body.push('\n');
    }
    body
}
