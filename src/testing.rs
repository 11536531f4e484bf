//! Testing Helpers
//!
//! Utilities for anchoring hand-built fixture trees to real source text.
//! Tests locate a node's span by searching for its exact source snippet
//! instead of hard-coding offsets, which keeps fixtures readable and
//! resilient to edits of the fixture programs.

use crate::ast::Span;

/// Byte span of the first occurrence of `needle` in `text`.
///
/// Panics when the needle is absent; fixtures are expected to contain
/// every snippet they anchor to.
pub fn find_span(text: &str, needle: &str) -> Span {
    find_nth_span(text, needle, 0)
}

/// Byte span of the `n`th (0-based) occurrence of `needle` in `text`.
pub fn find_nth_span(text: &str, needle: &str, n: usize) -> Span {
    let mut search_from = 0;
    for occurrence in 0.. {
        let position = text[search_from..]
            .find(needle)
            .map(|offset| search_from + offset)
            .unwrap_or_else(|| {
                panic!("occurrence {} of {:?} not found in fixture", n, needle)
            });
        if occurrence == n {
            return Span::new(position, position + needle.len());
        }
        search_from = position + needle.len();
    }
    unreachable!()
}

/// Byte span starting at `start_needle` and ending just after the first
/// `end_needle` that follows it. Convenient for statements whose exact
/// text is long: `span_through(text, "C.decorators", "];")`.
pub fn span_through(text: &str, start_needle: &str, end_needle: &str) -> Span {
    let start = find_span(text, start_needle).start;
    let end_start = text[start..]
        .find(end_needle)
        .map(|offset| start + offset)
        .unwrap_or_else(|| {
            panic!("{:?} not found after {:?} in fixture", end_needle, start_needle)
        });
    Span::new(start, end_start + end_needle.len())
}
