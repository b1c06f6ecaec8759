//! Sitedown Render
//!
//! Assembles parsed blocks and inline fragments into an [`HtmlNode`]
//! tree and serializes it.
//!
//! # Example
//!
//! ```
//! use sitedown_render::markdown_to_html;
//!
//! let html = markdown_to_html("# Hi\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hi</h1><p>Some <b>bold</b> text</p></div>");
//! ```

pub mod fold;

pub use fold::{fold_run, fragment_to_leaf, fragments_to_nodes, group_runs, style_tag};

use log::debug;
use sitedown_config::Config;
use sitedown_core::{Result, SitedownError, StyleMap, TagMap};
use sitedown_html::HtmlNode;
use sitedown_parser::{parse_blocks, Block, BlockContent, InlineParser};

/// Markdown to HTML renderer.
///
/// Holds the inline parser settings and the block-tag lookups. One
/// renderer can convert any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    inline: InlineParser,
    tags: TagMap,
}

impl Renderer {
    /// Create a renderer with default delimiters and tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer from explicit parts.
    pub fn with_settings(inline: InlineParser, tags: TagMap) -> Self {
        Self { inline, tags }
    }

    /// Create a renderer from a loaded configuration.
    ///
    /// Fails if the configured delimiters do not form a valid style map.
    pub fn from_config(config: &Config) -> Result<Self> {
        let styles: StyleMap = config.style_map()?;
        let inline =
            InlineParser::with_settings(styles, config.features.links, config.features.images);
        Ok(Self::with_settings(inline, config.tags.clone()))
    }

    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    pub fn inline(&self) -> &InlineParser {
        &self.inline
    }

    /// Convert a document to its root node.
    ///
    /// An empty or whitespace-only document yields a root with no
    /// children.
    pub fn build_document(&self, markdown: &str) -> Result<HtmlNode> {
        let blocks = parse_blocks(markdown);
        let mut children = Vec::with_capacity(blocks.len());
        for (index, block) in blocks.iter().enumerate() {
            children.push(self.render_block(index, block)?);
        }
        debug!("document: {} blocks", children.len());
        Ok(HtmlNode::parent(self.tags.root.as_str(), children))
    }

    /// Convert a document straight to an HTML string.
    pub fn render_html(&self, markdown: &str) -> Result<String> {
        self.build_document(markdown)?.to_html()
    }

    /// Render one block. `index` is reported in [`SitedownError::EmptyBlock`].
    pub fn render_block(&self, index: usize, block: &Block) -> Result<HtmlNode> {
        let tag = self.tags.block_tag(block.kind);
        let code_delimiter = self.inline.styles().code_delimiter();

        let children = match block.content(code_delimiter) {
            BlockContent::Inline(text) => self.inline_nodes(index, &text)?,
            BlockContent::Items(items) => {
                let mut nodes = Vec::with_capacity(items.len());
                for item in &items {
                    let inner = self.inline_nodes(index, item)?;
                    nodes.push(HtmlNode::parent(self.tags.list_item.as_str(), inner));
                }
                nodes
            }
        };

        Ok(HtmlNode::parent(tag, children))
    }

    /// Parse a text run and fold it into nodes.
    fn inline_nodes(&self, index: usize, text: &str) -> Result<Vec<HtmlNode>> {
        let fragments = self.inline.parse(text);
        if fragments.is_empty() {
            return Err(SitedownError::EmptyBlock { index });
        }
        fragments_to_nodes(&fragments)
    }
}

/// Convert Markdown to a node tree with the default renderer.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    Renderer::new().build_document(markdown)
}

/// Convert Markdown to an HTML string with the default renderer.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Renderer::new().render_html(markdown)
}
