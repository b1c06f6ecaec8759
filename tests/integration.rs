//! Integration tests for sitedown.
//!
//! These tests drive whole documents through segmentation, inline
//! parsing, assembly and serialization.

use sitedown_config::Config;
use sitedown_core::{BlockKind, SitedownError, TextFragment, TextKind};
use sitedown_html::HtmlNode;
use sitedown_parser::{classify, extract_title, parse_blocks, InlineParser, Tokenizer};
use sitedown_render::{markdown_to_html, markdown_to_html_node, Renderer};

fn plain(s: &str) -> TextFragment {
    TextFragment::plain(s)
}

fn styled(kind: TextKind, s: &str) -> TextFragment {
    TextFragment::new(kind, s)
}

// =============================================================================
// Inline parsing
// =============================================================================

#[test]
fn test_delimiter_free_text_is_one_plain_fragment() {
    let text = "Nothing to see here, move along.";
    assert_eq!(InlineParser::new().parse(text), vec![plain(text)]);
}

#[test]
fn test_overlap_region_emitted_once_per_style() {
    let fragments = InlineParser::new().parse("**a _b** c_");
    assert_eq!(
        fragments,
        vec![
            styled(TextKind::Bold, "a "),
            styled(TextKind::Bold, "b"),
            styled(TextKind::Italic, "b"),
            styled(TextKind::Italic, " c"),
        ]
    );
}

#[test]
fn test_odd_delimiter_count_drops_last() {
    let text = "a `b` c ` d";
    let hits = Tokenizer::new().find_delimiters(text);
    let code = hits.iter().find(|h| h.kind == TextKind::Code).unwrap();
    assert_eq!(code.positions, vec![2, 4]);

    assert_eq!(
        InlineParser::new().parse(text),
        vec![plain("a "), styled(TextKind::Code, "b"), plain(" c ` d")]
    );
}

#[test]
fn test_bold_inside_code_is_masked() {
    let text = "**bold `inside **code`**";
    let events = Tokenizer::new().events(text);
    let positions: Vec<usize> = events.iter().map(|e| e.position).collect();
    // The odd third `**` (22) is dropped first, then 15 is masked
    assert_eq!(positions, vec![0, 7, 21]);

    assert_eq!(
        markdown_to_html(text).unwrap(),
        "<div><p><b>bold </b><code>inside **code</code><b>**</b></p></div>"
    );
}

#[test]
fn test_image_takes_precedence_over_link() {
    let fragments = InlineParser::new().parse("![a](u) and [b](v)");
    assert_eq!(fragments[0], TextFragment::image("a", "u"));
    assert_eq!(fragments[1], plain(" and "));
    assert_eq!(fragments[2], TextFragment::link("b", "v"));
}

#[test]
fn test_malformed_image_is_plain() {
    let text = "![alt](broken";
    assert_eq!(InlineParser::new().parse(text), vec![plain(text)]);
}

#[test]
fn test_duplicate_links_split_at_their_own_offsets() {
    let fragments = InlineParser::new().parse("[x](y) then [x](y)");
    assert_eq!(
        fragments,
        vec![
            TextFragment::link("x", "y"),
            plain(" then "),
            TextFragment::link("x", "y"),
        ]
    );
}

// =============================================================================
// Blocks
// =============================================================================

#[test]
fn test_ordered_list_numbering() {
    assert_eq!(classify("1. a\n2. b\n4. c"), BlockKind::Paragraph);
    assert_eq!(classify("1. a\n2. b\n3. c"), BlockKind::OrderedList);
}

#[test]
fn test_block_order_preserved() {
    let kinds: Vec<BlockKind> = parse_blocks("# H\n\n> q\n\n- a\n\n```\nc\n```\n\ntext")
        .into_iter()
        .map(|b| b.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Heading(1),
            BlockKind::Quote,
            BlockKind::UnorderedList,
            BlockKind::Code,
            BlockKind::Paragraph,
        ]
    );
}

// =============================================================================
// Documents
// =============================================================================

#[test]
fn test_heading_round_trip() {
    let root = markdown_to_html_node("# Title\n\nBody").unwrap();
    assert_eq!(root.tag(), Some("div"));

    let heading = &root.children().unwrap()[0];
    assert_eq!(heading.tag(), Some("h1"));
    let text = heading.children().unwrap();
    assert_eq!(text.len(), 1);
    assert_eq!(text[0].tag(), None);
    assert_eq!(text[0].value(), Some("Title"));
}

#[test]
fn test_code_block_has_no_fences() {
    let root = markdown_to_html_node("```\nline1\nline2\n```").unwrap();
    let pre = &root.children().unwrap()[0];
    assert_eq!(pre.tag(), Some("pre"));

    let html = pre.to_html().unwrap();
    assert!(html.contains("line1"));
    assert!(html.contains("line2"));
    assert!(!html.contains("```"));
}

#[test]
fn test_serialization_is_idempotent() {
    let root = markdown_to_html_node("## Sub\n\n1. **a**\n2. [b](c)\n\n> quote").unwrap();
    assert_eq!(root.to_html().unwrap(), root.to_html().unwrap());
}

#[test]
fn test_full_page() {
    let markdown = r#"
# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> "I am in fact a Hobbit in all but size."

- It can be a **bit** wordy
- `code` in a list

1. First
2. Second
"#;
    let html = markdown_to_html(markdown).unwrap();
    assert_eq!(
        html,
        concat!(
            "<div>",
            "<h1>Tolkien Fan Club</h1>",
            r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></p>"#,
            "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
            r#"<blockquote>"I am in fact a Hobbit in all but size."</blockquote>"#,
            "<ul><li>It can be a <b>bit</b> wordy</li><li><code>code</code> in a list</li></ul>",
            "<ol><li>First</li><li>Second</li></ol>",
            "</div>"
        )
    );
}

#[test]
fn test_empty_block_reports_index() {
    let err = markdown_to_html("# ok\n\nfine\n\n****").unwrap_err();
    assert!(matches!(err, SitedownError::EmptyBlock { index: 2 }));
    assert_eq!(err.to_string(), "Block 2 produced no renderable content");
}

#[test]
fn test_missing_children_is_an_error() {
    let node = HtmlNode::Parent {
        tag: Some("div".to_string()),
        children: None,
        attrs: None,
    };
    assert!(matches!(
        node.to_html(),
        Err(SitedownError::MissingChildren { .. })
    ));
}

#[test]
fn test_title() {
    assert_eq!(extract_title("# Hello\n\nBody").unwrap(), "Hello");
    assert!(matches!(
        extract_title("## Not a title"),
        Err(SitedownError::MissingTitle)
    ));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_custom_config_changes_output() {
    let config = Config::parse(
        r#"
        [delimiters]
        Italic = "*"

        [tags]
        Root = "article"
        Code = "samp"
    "#,
    )
    .unwrap();
    let renderer = Renderer::from_config(&config).unwrap();
    assert_eq!(
        renderer.render_html("*a* **b** _c_").unwrap(),
        "<article><p><i>a</i> <b>b</b> _c_</p></article>"
    );
    assert_eq!(
        renderer.render_html("```\nx\n```").unwrap(),
        "<article><samp><code>x\n</code></samp></article>"
    );
}
