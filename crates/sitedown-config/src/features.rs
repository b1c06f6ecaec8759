//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the boolean switches for optional inline syntax.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
///
/// Controls which inline constructs are recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Turn `[text](url)` into links.
    /// Default: true
    #[serde(default = "default_true")]
    pub links: bool,

    /// Turn `![alt](url)` into images.
    /// Default: true
    #[serde(default = "default_true")]
    pub images: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            links: true,
            images: true,
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// TOML has no "unset" state for these fields, so every value is
    /// taken from `other`.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.links = other.links;
        self.images = other.images;
    }
}

fn default_true() -> bool {
    true
}
