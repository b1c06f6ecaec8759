//! Inline delimiter configuration.

use serde::{Deserialize, Serialize};
use sitedown_core::{Result, StyleMap, TextKind};

/// Delimiter tokens for each inline style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DelimitersConfig {
    /// Bold delimiter. Default: `**`
    #[serde(default = "default_bold")]
    pub bold: String,

    /// Italic delimiter. Default: `_`
    #[serde(default = "default_italic")]
    pub italic: String,

    /// Code span delimiter. Default: `` ` ``
    #[serde(default = "default_code")]
    pub code: String,
}

impl Default for DelimitersConfig {
    fn default() -> Self {
        Self {
            bold: default_bold(),
            italic: default_italic(),
            code: default_code(),
        }
    }
}

impl DelimitersConfig {
    /// Merge another DelimitersConfig into this one.
    pub fn merge(&mut self, other: &DelimitersConfig) {
        self.bold = other.bold.clone();
        self.italic = other.italic.clone();
        self.code = other.code.clone();
    }

    /// Build the tokenizer's style map.
    ///
    /// Fails if a delimiter is empty or used for two styles.
    pub fn style_map(&self) -> Result<StyleMap> {
        StyleMap::new([
            (self.bold.as_str(), TextKind::Bold),
            (self.italic.as_str(), TextKind::Italic),
            (self.code.as_str(), TextKind::Code),
        ])
    }
}

fn default_bold() -> String {
    "**".to_string()
}

fn default_italic() -> String {
    "_".to_string()
}

fn default_code() -> String {
    "`".to_string()
}
