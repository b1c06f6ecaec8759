//! Sitedown Core
//!
//! This crate provides core types, configuration values, and error
//! definitions for the sitedown Markdown-to-HTML converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`TextFragment`], [`DelimiterEvent`] - Inline tokenization values
//! - [`TextKind`], [`Role`], [`BlockKind`] - Classification enums
//! - [`StyleMap`] - Delimiter→style configuration for the tokenizer
//! - [`TagMap`] - Block-tag lookups for the assembler
//! - [`SitedownError`] - Error types

pub mod enums;
pub mod error;
pub mod types;

pub use enums::{BlockKind, Role, TextKind};
pub use error::{Result, SitedownError};
pub use types::{DelimiterEvent, StyleMap, TagMap, TextFragment};
