//! Sitedown Parser
//!
//! Turns Markdown text into classified blocks and typed inline
//! fragments, ready to be assembled into an HTML tree.
//!
//! # Overview
//!
//! - [`segment`] / [`classify`] / [`parse_blocks`] split a document on
//!   blank lines and decide what each block is.
//! - [`Block::content`] strips the block markers.
//! - [`InlineParser`] turns a text run into [`TextFragment`]s: paired
//!   delimiters become styles (code spans are opaque), then images and
//!   links are cut out of the remaining plain text.
//!
//! # Example
//!
//! ```
//! use sitedown_parser::{parse_blocks, BlockContent, InlineParser};
//! use sitedown_core::BlockKind;
//!
//! let blocks = parse_blocks("# Hello\n\nSome **bold** text");
//! assert_eq!(blocks[0].kind, BlockKind::Heading(1));
//!
//! let parser = InlineParser::new();
//! if let BlockContent::Inline(text) = blocks[1].content(parser.styles().code_delimiter()) {
//!     assert_eq!(parser.parse(&text).len(), 3);
//! }
//! ```
//!
//! [`TextFragment`]: sitedown_core::TextFragment

pub mod block;
pub mod inline;
pub mod title;
pub mod tokenizer;

pub use block::{classify, parse_blocks, segment, Block, BlockContent, CODE_FENCE};
pub use inline::{
    extract_images, extract_links, find_images, find_links, split_images, split_links,
    text_to_fragments, InlineMatch, InlineParser,
};
pub use title::extract_title;
pub use tokenizer::{code_ranges, DelimiterHits, Tokenizer};
