//! Fragment to node folding.
//!
//! The inline parser emits text covered by several styles once per
//! style. Adjacent styled fragments with identical text are grouped back
//! into a run and folded into nested elements, last fragment innermost.

use log::trace;
use sitedown_core::{Result, SitedownError, TextFragment, TextKind};
use sitedown_html::{Attributes, HtmlNode};

pub const BOLD_TAG: &str = "b";
pub const ITALIC_TAG: &str = "i";
pub const CODE_TAG: &str = "code";
pub const LINK_TAG: &str = "a";
pub const IMAGE_TAG: &str = "img";

/// Tag used when a fragment of `kind` wraps another node.
///
/// Plain text has no tag; asking for one is an assembler defect.
pub fn style_tag(kind: TextKind) -> Result<&'static str> {
    match kind {
        TextKind::Bold => Ok(BOLD_TAG),
        TextKind::Italic => Ok(ITALIC_TAG),
        TextKind::Code => Ok(CODE_TAG),
        TextKind::Link => Ok(LINK_TAG),
        TextKind::Image => Ok(IMAGE_TAG),
        TextKind::Plain => Err(SitedownError::UnknownStyleKind(kind)),
    }
}

/// Render a single fragment as a leaf node.
///
/// # Example
///
/// ```
/// use sitedown_core::TextFragment;
/// use sitedown_render::fragment_to_leaf;
///
/// let leaf = fragment_to_leaf(&TextFragment::link("docs", "/docs"));
/// assert_eq!(leaf.to_html().unwrap(), r#"<a href="/docs">docs</a>"#);
/// ```
pub fn fragment_to_leaf(fragment: &TextFragment) -> HtmlNode {
    let url = fragment.url.clone().unwrap_or_default();
    match fragment.kind {
        TextKind::Plain => HtmlNode::text(fragment.content.as_str()),
        TextKind::Bold => HtmlNode::leaf(BOLD_TAG, fragment.content.as_str()),
        TextKind::Italic => HtmlNode::leaf(ITALIC_TAG, fragment.content.as_str()),
        TextKind::Code => HtmlNode::leaf(CODE_TAG, fragment.content.as_str()),
        TextKind::Link => {
            HtmlNode::leaf_with_attrs(LINK_TAG, fragment.content.as_str(), href(url))
        }
        TextKind::Image => {
            let mut attrs = Attributes::new();
            attrs.insert("src".to_string(), url);
            attrs.insert("alt".to_string(), fragment.content.clone());
            HtmlNode::leaf_with_attrs(IMAGE_TAG, "", attrs)
        }
    }
}

/// Fold a run into one node.
///
/// `innermost` becomes the leaf; `wrappers` are applied from the last
/// to the first, so `wrappers[0]` ends up outermost. A code leaf is
/// never wrapped.
pub fn fold_run(innermost: &TextFragment, wrappers: &[TextFragment]) -> Result<HtmlNode> {
    let mut node = fragment_to_leaf(innermost);
    if node.tag() == Some(CODE_TAG) {
        if !wrappers.is_empty() {
            trace!("fold: dropping {} styles around code", wrappers.len());
        }
        return Ok(node);
    }

    for fragment in wrappers.iter().rev() {
        let tag = style_tag(fragment.kind)?;
        node = match (fragment.kind, &fragment.url) {
            (TextKind::Link, Some(url)) => {
                HtmlNode::parent_with_attrs(tag, vec![node], href(url.clone()))
            }
            _ => HtmlNode::parent(tag, vec![node]),
        };
    }
    Ok(node)
}

/// Group fragments into runs of adjacent styled fragments sharing text.
///
/// Only bold, italic and code fragments can describe the same span;
/// plain text, links and images always stand alone.
pub fn group_runs(fragments: &[TextFragment]) -> Vec<&[TextFragment]> {
    fragments
        .chunk_by(|a, b| a.kind.is_delimited() && b.kind.is_delimited() && a.content == b.content)
        .collect()
}

/// Turn a fragment sequence into inline nodes.
///
/// # Example
///
/// ```
/// use sitedown_core::{TextFragment, TextKind};
/// use sitedown_render::fragments_to_nodes;
///
/// let nodes = fragments_to_nodes(&[
///     TextFragment::new(TextKind::Bold, "x"),
///     TextFragment::new(TextKind::Italic, "x"),
/// ]).unwrap();
/// assert_eq!(nodes.len(), 1);
/// assert_eq!(nodes[0].to_html().unwrap(), "<b><i>x</i></b>");
/// ```
pub fn fragments_to_nodes(fragments: &[TextFragment]) -> Result<Vec<HtmlNode>> {
    let mut nodes = Vec::new();
    for run in group_runs(fragments) {
        if let Some((last, wrappers)) = run.split_last() {
            nodes.push(fold_run(last, wrappers)?);
        }
    }
    Ok(nodes)
}

fn href(url: String) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.insert("href".to_string(), url);
    attrs
}
