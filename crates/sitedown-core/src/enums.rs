//! Core enums for sitedown conversion.
//!
//! These enums classify inline fragments, delimiter events and blocks
//! as they move through the conversion pipeline.

use serde::{Deserialize, Serialize};

/// The style carried by an inline text fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextKind {
    /// Unstyled text
    Plain,
    /// Bold text (`**`)
    Bold,
    /// Italic text (`_`)
    Italic,
    /// Inline code (`` ` ``)
    Code,
    /// A link: `[text](url)`
    Link,
    /// An image: `![alt](url)`
    Image,
}

impl TextKind {
    /// Whether this kind can be produced by delimiter pairing.
    pub fn is_delimited(&self) -> bool {
        matches!(self, TextKind::Bold | TextKind::Italic | TextKind::Code)
    }

    /// Whether fragments of this kind carry a URL.
    pub fn has_url(&self) -> bool {
        matches!(self, TextKind::Link | TextKind::Image)
    }
}

impl std::fmt::Display for TextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextKind::Plain => write!(f, "plain"),
            TextKind::Bold => write!(f, "bold"),
            TextKind::Italic => write!(f, "italic"),
            TextKind::Code => write!(f, "code"),
            TextKind::Link => write!(f, "link"),
            TextKind::Image => write!(f, "image"),
        }
    }
}

/// Whether a delimiter opens or closes a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Opening delimiter
    Open,
    /// Closing delimiter
    Close,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Open => write!(f, "open"),
            Role::Close => write!(f, "close"),
        }
    }
}

/// Represents the type of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Plain paragraph (the fallback)
    Paragraph,
    /// ATX heading with its level (1-6)
    Heading(u8),
    /// Fenced code block
    Code,
    /// Block quote (every line starts with `>`)
    Quote,
    /// Unordered list (every line starts with `- `)
    UnorderedList,
    /// Ordered list (lines numbered `1. `, `2. `, ...)
    OrderedList,
}

impl BlockKind {
    /// Check if this is a list block.
    pub fn is_list(&self) -> bool {
        matches!(self, BlockKind::UnorderedList | BlockKind::OrderedList)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Paragraph => write!(f, "paragraph"),
            BlockKind::Heading(level) => write!(f, "heading{}", level),
            BlockKind::Code => write!(f, "code"),
            BlockKind::Quote => write!(f, "quote"),
            BlockKind::UnorderedList => write!(f, "unordered_list"),
            BlockKind::OrderedList => write!(f, "ordered_list"),
        }
    }
}
