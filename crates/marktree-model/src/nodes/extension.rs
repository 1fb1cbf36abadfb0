//! Inline kinds beyond CommonMark: `==highlight==` and `\` escapes.
//!
//! Both are plain inline containers. They plug into the tree through the same
//! three pieces any new kind needs: a `MarkupKind` tag, a wrapper declared with
//! `markup_node!`, and a `visit_*` method that defaults to `default_visit`.

markup_node! {
    /// Inline content marked for highlighting (`==text==`).
    Highlight, visit_highlight
}
basic_inline_container!(Highlight);

markup_node! {
    /// A backslash escape; its child is the escaped character as text.
    EscapedCharacter, visit_escaped_character
}
basic_inline_container!(EscapedCharacter);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Markup, PlainTextConvertible};
    use crate::nodes::{InlineMarkup, Strong, Text};
    use crate::range::{SourceLocation, SourceRange};
    use rstest::rstest;

    fn span(start: usize, end: usize) -> SourceRange {
        SourceLocation::new(1, start)..SourceLocation::new(1, end)
    }

    fn children_with_ranges() -> Vec<InlineMarkup> {
        vec![
            Text::with_range("ab", Some(span(2, 4))).into(),
            Text::with_range("cd", Some(span(4, 6))).into(),
        ]
    }

    #[rstest]
    #[case::both(Some(span(1, 3)), Some(span(5, 8)), Some(span(1, 8)))]
    #[case::start_only(Some(span(1, 3)), None, Some(span(1, 3)))]
    #[case::end_only(None, Some(span(5, 8)), Some(span(5, 8)))]
    #[case::neither(None, None, Some(span(2, 6)))]
    fn highlight_marker_ranges(
        #[case] start: Option<SourceRange>,
        #[case] end: Option<SourceRange>,
        #[case] expected: Option<SourceRange>,
    ) {
        let highlight = Highlight::with_markers(children_with_ranges(), start, end);
        assert_eq!(highlight.range(), expected);
    }

    #[rstest]
    #[case::both(Some(span(1, 3)), Some(span(5, 8)), Some(span(1, 8)))]
    #[case::neither(None, None, Some(span(2, 6)))]
    fn escaped_character_uses_same_policy(
        #[case] start: Option<SourceRange>,
        #[case] end: Option<SourceRange>,
        #[case] expected: Option<SourceRange>,
    ) {
        let escaped = EscapedCharacter::with_markers(children_with_ranges(), start, end);
        assert_eq!(escaped.range(), expected);
    }

    #[test]
    fn markers_without_any_ranges_leave_range_absent() {
        let highlight = Highlight::with_markers([Text::new("x").into()], None, None);
        assert_eq!(highlight.range(), None);
    }

    #[test]
    fn new_drops_child_ranges() {
        let highlight = Highlight::new(children_with_ranges());
        assert_eq!(highlight.range(), None);
    }

    #[test]
    fn plain_text_concatenates_children() {
        let highlight = Highlight::new([
            Text::new("very ").into(),
            Strong::new([Text::new("important").into()]).into(),
        ]);
        assert_eq!(highlight.plain_text(), "very important");
    }

    #[test]
    fn escaped_character_plain_text_is_the_character() {
        let escaped = EscapedCharacter::new([Text::new("*").into()]);
        assert_eq!(escaped.plain_text(), "*");
        assert_eq!(escaped.kind(), EscapedCharacter::KIND);
    }
}
