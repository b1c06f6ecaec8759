//! Core types for sitedown

use crate::enums::{BlockKind, Role, TextKind};
use crate::error::{Result, SitedownError};
use serde::{Deserialize, Serialize};

/// A typed run of inline text produced by tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextFragment {
    /// Style of the fragment
    pub kind: TextKind,
    /// Literal text (link text or image alt for links and images)
    pub content: String,
    /// Target URL, only set for links and images
    pub url: Option<String>,
}

impl TextFragment {
    /// Create a fragment without a URL.
    pub fn new(kind: TextKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            url: None,
        }
    }

    /// Create a plain text fragment.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(TextKind::Plain, content)
    }

    /// Create a link fragment.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Link,
            content: text.into(),
            url: Some(url.into()),
        }
    }

    /// Create an image fragment.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Image,
            content: alt.into(),
            url: Some(url.into()),
        }
    }

    /// Check if this fragment is still unstyled text.
    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }
}

/// A positioned open/close marker for an inline style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterEvent {
    /// Byte offset of the delimiter in the source text
    pub position: usize,
    /// The delimiter token, e.g. `**`
    pub delimiter: String,
    /// Style the delimiter toggles
    pub kind: TextKind,
    /// Open or close
    pub role: Role,
}

impl DelimiterEvent {
    /// Byte offset just past the delimiter token.
    pub fn end(&self) -> usize {
        self.position + self.delimiter.len()
    }
}

/// Immutable delimiter→style configuration for the inline tokenizer.
///
/// Entries are kept longest-first so that a longer token is never
/// shadowed by a shorter prefix during scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, TextKind)>,
}

impl Default for StyleMap {
    fn default() -> Self {
        Self {
            entries: vec![
                ("**".to_string(), TextKind::Bold),
                ("_".to_string(), TextKind::Italic),
                ("`".to_string(), TextKind::Code),
            ],
        }
    }
}

impl StyleMap {
    /// Build a style map from `(delimiter, style)` pairs.
    ///
    /// Delimiters must be non-empty and unique, and only delimited
    /// styles (bold, italic, code) may be mapped.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_core::{StyleMap, TextKind};
    ///
    /// let map = StyleMap::new([("*", TextKind::Italic), ("~~", TextKind::Bold)]).unwrap();
    /// assert_eq!(map.delimiters().next(), Some("~~"));
    /// ```
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, TextKind)>,
        S: Into<String>,
    {
        let mut collected: Vec<(String, TextKind)> = Vec::new();
        for (delimiter, kind) in entries {
            let delimiter = delimiter.into();
            if delimiter.is_empty() {
                return Err(SitedownError::Config(format!(
                    "Empty delimiter for {} style",
                    kind
                )));
            }
            if !kind.is_delimited() {
                return Err(SitedownError::Config(format!(
                    "Style '{}' cannot be bound to a delimiter",
                    kind
                )));
            }
            if collected.iter().any(|(d, _)| *d == delimiter) {
                return Err(SitedownError::Config(format!(
                    "Delimiter '{}' is mapped more than once",
                    delimiter
                )));
            }
            collected.push((delimiter, kind));
        }

        // Stable sort keeps declaration order among equal lengths
        collected.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Ok(Self { entries: collected })
    }

    /// Iterate delimiters longest-first.
    pub fn delimiters(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    /// Iterate `(delimiter, style)` pairs longest-first.
    pub fn entries(&self) -> impl Iterator<Item = (&str, TextKind)> {
        self.entries.iter().map(|(d, k)| (d.as_str(), *k))
    }

    /// Look up the style for a delimiter token.
    pub fn style_of(&self, delimiter: &str) -> Option<TextKind> {
        self.entries
            .iter()
            .find(|(d, _)| d == delimiter)
            .map(|(_, k)| *k)
    }

    /// The delimiter bound to code spans, if any.
    pub fn code_delimiter(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, k)| *k == TextKind::Code)
            .map(|(d, _)| d.as_str())
    }
}

/// Block-tag lookup map used when assembling the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagMap {
    /// Container wrapping the whole document
    #[serde(default = "default_root")]
    pub root: String,
    /// Paragraph blocks
    #[serde(default = "default_paragraph")]
    pub paragraph: String,
    /// Prefix joined with the heading level (`h` + `1` = `h1`)
    #[serde(default = "default_heading_prefix")]
    pub heading_prefix: String,
    /// Fenced code blocks
    #[serde(default = "default_code")]
    pub code: String,
    /// Block quotes
    #[serde(default = "default_quote")]
    pub quote: String,
    /// Unordered lists
    #[serde(default = "default_unordered_list")]
    pub unordered_list: String,
    /// Ordered lists
    #[serde(default = "default_ordered_list")]
    pub ordered_list: String,
    /// Items of either list kind
    #[serde(default = "default_list_item")]
    pub list_item: String,
}

impl Default for TagMap {
    fn default() -> Self {
        Self {
            root: default_root(),
            paragraph: default_paragraph(),
            heading_prefix: default_heading_prefix(),
            code: default_code(),
            quote: default_quote(),
            unordered_list: default_unordered_list(),
            ordered_list: default_ordered_list(),
            list_item: default_list_item(),
        }
    }
}

impl TagMap {
    /// Tag for a classified block.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_core::{BlockKind, TagMap};
    ///
    /// let tags = TagMap::default();
    /// assert_eq!(tags.block_tag(BlockKind::Heading(2)), "h2");
    /// assert_eq!(tags.block_tag(BlockKind::Quote), "blockquote");
    /// ```
    pub fn block_tag(&self, kind: BlockKind) -> String {
        match kind {
            BlockKind::Paragraph => self.paragraph.clone(),
            BlockKind::Heading(level) => format!("{}{}", self.heading_prefix, level),
            BlockKind::Code => self.code.clone(),
            BlockKind::Quote => self.quote.clone(),
            BlockKind::UnorderedList => self.unordered_list.clone(),
            BlockKind::OrderedList => self.ordered_list.clone(),
        }
    }
}

fn default_root() -> String {
    "div".to_string()
}

fn default_paragraph() -> String {
    "p".to_string()
}

fn default_heading_prefix() -> String {
    "h".to_string()
}

fn default_code() -> String {
    "pre".to_string()
}

fn default_quote() -> String {
    "blockquote".to_string()
}

fn default_unordered_list() -> String {
    "ul".to_string()
}

fn default_ordered_list() -> String {
    "ol".to_string()
}

fn default_list_item() -> String {
    "li".to_string()
}
