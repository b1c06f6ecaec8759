//! Sitedown HTML
//!
//! The document tree produced by a conversion and its serialization to
//! an HTML string.
//!
//! # Example
//!
//! ```
//! use sitedown_html::HtmlNode;
//!
//! let doc = HtmlNode::parent("div", vec![
//!     HtmlNode::parent("h1", vec![HtmlNode::text("Title")]),
//! ]);
//! assert_eq!(doc.to_html().unwrap(), "<div><h1>Title</h1></div>");
//! ```

pub mod node;

pub use node::{attrs_to_html, is_void_tag, Attributes, HtmlNode};
