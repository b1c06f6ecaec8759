//! HTML node tree.
//!
//! A closed tagged union of leaf and parent nodes. Leaves hold a value,
//! parents own an ordered sequence of children. Serialization checks the
//! invariants of each shape and reports the broken one.

use indexmap::IndexMap;
use sitedown_core::{Result, SitedownError};

/// Order-preserving attribute map. Attributes serialize in insertion order.
pub type Attributes = IndexMap<String, String>;

/// Elements that have no closing tag.
const VOID_TAGS: &[&str] = &["area", "br", "col", "embed", "hr", "img", "input", "wbr"];

/// Check if a tag is a void element.
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// A node in the HTML document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node without children. Without a tag it renders as raw text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Option<Attributes>,
    },
    /// A node owning an ordered sequence of children.
    Parent {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attrs: Option<Attributes>,
    },
}

impl HtmlNode {
    /// Create an untagged leaf that renders as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: None,
        }
    }

    /// Create a tagged leaf.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: None,
        }
    }

    /// Create a tagged leaf with attributes.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Attributes,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Some(attrs),
        }
    }

    /// Create a parent node.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attrs: None,
        }
    }

    /// Create a parent node with attributes.
    pub fn parent_with_attrs(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    ) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attrs: Some(attrs),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// The value of a leaf. Parents have none.
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// The children of a parent. Leaves have none.
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match self {
            HtmlNode::Leaf { .. } => None,
            HtmlNode::Parent { children, .. } => children.as_deref(),
        }
    }

    pub fn attrs(&self) -> Option<&Attributes> {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs.as_ref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    /// Serialize the node and all of its descendants.
    ///
    /// No whitespace is added between tags.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_html::HtmlNode;
    ///
    /// let node = HtmlNode::parent("p", vec![
    ///     HtmlNode::text("Hello "),
    ///     HtmlNode::leaf("b", "world"),
    /// ]);
    /// assert_eq!(node.to_html().unwrap(), "<p>Hello <b>world</b></p>");
    /// ```
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    /// Serialize into an existing buffer.
    ///
    /// On error the buffer may hold a partial rendering.
    pub fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                let value = value.as_deref().ok_or(SitedownError::MissingValue)?;
                let Some(tag) = tag.as_deref() else {
                    out.push_str(value);
                    return Ok(());
                };
                open_tag(out, tag, attrs.as_ref());
                if !is_void_tag(tag) {
                    out.push_str(value);
                    close_tag(out, tag);
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                let tag = tag.as_deref().ok_or(SitedownError::MissingTag)?;
                let children = children.as_ref().ok_or_else(|| SitedownError::MissingChildren {
                    tag: tag.to_string(),
                })?;
                open_tag(out, tag, attrs.as_ref());
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

/// Render attributes as space-joined `key="value"` pairs.
///
/// # Example
///
/// ```
/// use sitedown_html::{attrs_to_html, Attributes};
///
/// let mut attrs = Attributes::new();
/// attrs.insert("href".into(), "/about".into());
/// attrs.insert("target".into(), "_blank".into());
/// assert_eq!(attrs_to_html(&attrs), r#"href="/about" target="_blank""#);
/// ```
pub fn attrs_to_html(attrs: &Attributes) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn open_tag(out: &mut String, tag: &str, attrs: Option<&Attributes>) {
    out.push('<');
    out.push_str(tag);
    if let Some(attrs) = attrs.filter(|a| !a.is_empty()) {
        out.push(' ');
        out.push_str(&attrs_to_html(attrs));
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
