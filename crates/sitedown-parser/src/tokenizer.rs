//! Delimiter scanning for inline markdown content.
//!
//! This module finds style delimiters in a text run, pairs them into
//! open/close events, masks events that fall inside code spans, and
//! returns the surviving events in source order.

use sitedown_core::{DelimiterEvent, Role, StyleMap, TextKind};

/// Positions recorded for one configured delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterHits {
    /// The delimiter token
    pub delimiter: String,
    /// Style it toggles
    pub kind: TextKind,
    /// Byte offsets of every usable occurrence, in scan order
    pub positions: Vec<usize>,
}

/// Tokenizer for inline delimiters.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    styles: StyleMap,
}

impl Tokenizer {
    /// Create a tokenizer with the default `**`, `_` and `` ` `` delimiters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with a custom delimiter map.
    pub fn with_styles(styles: StyleMap) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    /// Scan `text` left to right and record delimiter positions.
    ///
    /// At each position the longest matching delimiter wins and the scan
    /// skips past it. A delimiter with an odd number of hits loses its
    /// last occurrence, which stays literal text.
    pub fn find_delimiters(&self, text: &str) -> Vec<DelimiterHits> {
        let mut hits: Vec<DelimiterHits> = self
            .styles
            .entries()
            .map(|(delimiter, kind)| DelimiterHits {
                delimiter: delimiter.to_string(),
                kind,
                positions: Vec::new(),
            })
            .collect();

        let mut i = 0;
        while i < text.len() {
            let rest = &text[i..];
            match hits.iter_mut().find(|h| rest.starts_with(h.delimiter.as_str())) {
                Some(hit) => {
                    hit.positions.push(i);
                    i += hit.delimiter.len();
                }
                None => {
                    i += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        for hit in &mut hits {
            if hit.positions.len() % 2 == 1 {
                hit.positions.pop();
            }
        }

        hits
    }

    /// Produce the ordered open/close events for `text`.
    ///
    /// Bold and italic events strictly inside a code span are dropped,
    /// so code content is never styled.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_parser::Tokenizer;
    /// use sitedown_core::Role;
    ///
    /// let events = Tokenizer::new().events("a **b** c");
    /// assert_eq!(events.len(), 2);
    /// assert_eq!(events[0].position, 2);
    /// assert_eq!(events[0].role, Role::Open);
    /// assert_eq!(events[1].position, 5);
    /// ```
    pub fn events(&self, text: &str) -> Vec<DelimiterEvent> {
        let mut events = Vec::new();
        for hit in self.find_delimiters(text) {
            for (i, &position) in hit.positions.iter().enumerate() {
                let role = if i % 2 == 0 { Role::Open } else { Role::Close };
                events.push(DelimiterEvent {
                    position,
                    delimiter: hit.delimiter.clone(),
                    kind: hit.kind,
                    role,
                });
            }
        }

        let code_spans = code_ranges(&events);
        if !code_spans.is_empty() {
            events.retain(|event| {
                event.kind == TextKind::Code
                    || !code_spans
                        .iter()
                        .any(|&(start, end)| start < event.position && event.position < end)
            });
        }

        events.sort_by_key(|event| event.position);
        events
    }
}

/// Byte ranges `(open, close)` of every paired code span.
pub fn code_ranges(events: &[DelimiterEvent]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut open = None;
    for event in events.iter().filter(|e| e.kind == TextKind::Code) {
        match (event.role, open) {
            (Role::Open, _) => open = Some(event.position),
            (Role::Close, Some(start)) => {
                ranges.push((start, event.position));
                open = None;
            }
            (Role::Close, None) => {}
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(tokenizer: &Tokenizer, text: &str, delimiter: &str) -> Vec<usize> {
        tokenizer
            .find_delimiters(text)
            .into_iter()
            .find(|h| h.delimiter == delimiter)
            .map(|h| h.positions)
            .unwrap_or_default()
    }

    #[test]
    fn test_no_delimiters() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.events("just words").is_empty());
    }

    #[test]
    fn test_longest_delimiter_first() {
        let tokenizer = Tokenizer::with_styles(
            StyleMap::new([("*", TextKind::Italic), ("**", TextKind::Bold)]).unwrap(),
        );
        assert_eq!(positions(&tokenizer, "**a** *b*", "**"), vec![0, 3]);
        assert_eq!(positions(&tokenizer, "**a** *b*", "*"), vec![6, 8]);
    }

    #[test]
    fn test_odd_count_drops_last() {
        let tokenizer = Tokenizer::new();
        assert_eq!(positions(&tokenizer, "`a` b`c", "`"), vec![0, 2]);
        assert_eq!(positions(&tokenizer, "**a** **b** **c", "**"), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_adjacent_delimiters() {
        let tokenizer = Tokenizer::new();
        // `****` is two bold tokens back to back
        assert_eq!(positions(&tokenizer, "a ****b** c", "**"), vec![2, 4]);
    }

    #[test]
    fn test_roles_alternate() {
        let events = Tokenizer::new().events("_a_ _b_");
        let roles: Vec<Role> = events.iter().map(|e| e.role).collect();
        assert_eq!(roles, vec![Role::Open, Role::Close, Role::Open, Role::Close]);
    }

    #[test]
    fn test_events_sorted_by_position() {
        let events = Tokenizer::new().events("**a _b** c_ `d`");
        let positions: Vec<usize> = events.iter().map(|e| e.position).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert_eq!(events.len(), 6);
    }

    #[test]
    fn test_code_span_masks_styles() {
        // Bold at 15 sits inside the code span (7, 21)
        let text = "**bold `inside **code`**";
        let events = Tokenizer::new().events(text);
        assert!(events.iter().all(|e| e.position != 15));
        assert!(events
            .iter()
            .any(|e| e.kind == TextKind::Code && e.position == 7 && e.role == Role::Open));
        assert!(events
            .iter()
            .any(|e| e.kind == TextKind::Code && e.position == 21 && e.role == Role::Close));
    }

    #[test]
    fn test_code_span_masks_italic_pair() {
        let events = Tokenizer::new().events("`a_b_c` _d_");
        let italic: Vec<usize> = events
            .iter()
            .filter(|e| e.kind == TextKind::Italic)
            .map(|e| e.position)
            .collect();
        assert_eq!(italic, vec![8, 10]);
    }

    #[test]
    fn test_code_ranges() {
        let events = Tokenizer::new().events("`a` and `b`");
        assert_eq!(code_ranges(&events), vec![(0, 2), (8, 10)]);
    }

    #[test]
    fn test_multibyte_text() {
        let events = Tokenizer::new().events("héllo **wörld**");
        let positions: Vec<usize> = events.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![7, 15]);
    }
}
