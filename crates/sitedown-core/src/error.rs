//! Error types for sitedown

use crate::enums::TextKind;
use thiserror::Error;

/// Main error type for sitedown operations.
///
/// Malformed Markdown is never an error; these variants report broken
/// invariants in the node tree or the assembler, plus I/O and
/// configuration failures from the outer layers.
#[derive(Error, Debug)]
pub enum SitedownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A leaf node was serialized without a value
    #[error("All leaf nodes must have a value")]
    MissingValue,

    /// A parent node was serialized without a tag
    #[error("All parent nodes must have a tag")]
    MissingTag,

    /// A parent node was serialized without a children sequence
    #[error("Parent node <{tag}> must have children defined")]
    MissingChildren { tag: String },

    /// A block produced no inline fragments
    #[error("Block {index} produced no renderable content")]
    EmptyBlock { index: usize },

    /// A fragment kind has no wrapping tag
    #[error("Text kind '{0}' has no HTML style tag")]
    UnknownStyleKind(TextKind),

    /// No `# ` heading line was found
    #[error("No title found in the markdown content")]
    MissingTitle,
}

/// Result type alias for sitedown operations
pub type Result<T> = std::result::Result<T, SitedownError>;
