//! Property-based tests for sitedown.
//!
//! These tests use proptest to generate random inputs and verify
//! that the parser and renderer handle them gracefully.

use proptest::prelude::*;

use sitedown_core::{TextFragment, TextKind};
use sitedown_parser::{parse_blocks, InlineParser, Tokenizer};
use sitedown_render::{markdown_to_html, markdown_to_html_node};

/// Generate a random markdown-like string.
fn markdown_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\t]*").unwrap()
}

/// Generate a random line of text, including non-ASCII characters.
fn text_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7Eéßλ→]{0,200}").unwrap()
}

/// Generate text with no delimiter, bracket or bang characters.
fn delimiter_free() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z][a-zA-Z0-9 .,;:?'\-]{0,119}").unwrap()
}

/// Generate a heading.
fn heading() -> impl Strategy<Value = String> {
    (1..=6usize, delimiter_free()).prop_map(|(level, text)| {
        format!("{} {}", "#".repeat(level), text)
    })
}

/// Generate a list.
fn list() -> impl Strategy<Value = String> {
    prop::collection::vec(delimiter_free(), 1..10).prop_map(|items| {
        items
            .iter()
            .map(|item| format!("- {}", item.trim()))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

// =============================================================================
// Parser Property Tests
// =============================================================================

proptest! {
    /// The inline parser should never panic on any input.
    #[test]
    fn inline_never_panics(line in text_line()) {
        let _ = InlineParser::new().parse(&line);
    }

    /// Delimiter events always come in position order.
    #[test]
    fn events_are_sorted(line in text_line()) {
        let events = Tokenizer::new().events(&line);
        prop_assert!(events.windows(2).all(|w| w[0].position <= w[1].position));
    }

    /// Every delimiter keeps an even number of hits.
    #[test]
    fn delimiter_hits_are_paired(line in text_line()) {
        for hit in Tokenizer::new().find_delimiters(&line) {
            prop_assert_eq!(hit.positions.len() % 2, 0);
        }
    }

    /// Text without markup is one plain fragment equal to the input.
    #[test]
    fn delimiter_free_text_is_plain(text in delimiter_free()) {
        let fragments = InlineParser::new().parse(&text);
        prop_assert_eq!(fragments, vec![TextFragment::plain(text.as_str())]);
    }

    /// Block segmentation never yields empty blocks.
    #[test]
    fn blocks_are_never_empty(input in markdown_string()) {
        for block in parse_blocks(&input) {
            prop_assert!(!block.text.trim().is_empty());
        }
    }

    /// Lists of plain items are recognized as lists.
    #[test]
    fn plain_lists_classify(list in list()) {
        let blocks = parse_blocks(&list);
        prop_assert_eq!(blocks.len(), 1);
        prop_assert!(blocks[0].kind.is_list());
    }
}

// =============================================================================
// Renderer Property Tests
// =============================================================================

proptest! {
    /// Conversion either succeeds or returns an error; it never panics.
    #[test]
    fn render_never_panics(input in markdown_string()) {
        let result = std::panic::catch_unwind(|| markdown_to_html(&input));
        prop_assert!(result.is_ok(), "Renderer panicked on input");
    }

    /// Serializing the same tree twice gives identical output.
    #[test]
    fn serialization_is_idempotent(input in markdown_string()) {
        if let Ok(root) = markdown_to_html_node(&input) {
            prop_assert_eq!(root.to_html().ok(), root.to_html().ok());
        }
    }

    /// The document root has one child per block, in order.
    #[test]
    fn one_child_per_block(a in heading(), b in delimiter_free(), c in list()) {
        let input = format!("{}\n\n{}\n\n{}", a, b, c);
        let root = markdown_to_html_node(&input).unwrap();
        let tags: Vec<&str> = root
            .children()
            .unwrap()
            .iter()
            .filter_map(|child| child.tag())
            .collect();
        prop_assert_eq!(tags.len(), 3);
        prop_assert!(tags[0].starts_with('h'));
        prop_assert_eq!(tags[2], "ul");
    }

    /// Bold text renders inside a `b` element.
    #[test]
    fn bold_renders(text in "[a-z]{1,20}") {
        let html = markdown_to_html(&format!("**{}**", text)).unwrap();
        prop_assert_eq!(html, format!("<div><p><b>{}</b></p></div>", text));
    }
}

#[test]
fn styled_fragment_kinds_are_delimited() {
    let fragments = InlineParser::new().parse("**a** _b_ `c`");
    assert!(fragments
        .iter()
        .filter(|f| !f.is_plain())
        .all(|f| f.kind.is_delimited() && f.kind != TextKind::Plain));
}
