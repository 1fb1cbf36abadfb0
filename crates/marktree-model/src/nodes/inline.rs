//! Inline node kinds.

use crate::data::MarkupData;
use crate::nodes::{InlineMarkup, raw_children, typed_children};
use crate::range::{SourceRange, resolve_marker_range};
use crate::raw::{RawNode, RawNodeData, non_empty};

markup_node! {
    /// A run of literal text.
    Text, visit_text
}

impl Text {
    pub fn new(string: impl Into<String>) -> Self {
        Self::with_range(string, None)
    }

    pub fn with_range(string: impl Into<String>, range: Option<SourceRange>) -> Self {
        Self(MarkupData::new_root(RawNode::leaf(
            RawNodeData::Text(string.into()),
            range,
        )))
    }

    /// Text delimited by markers; see [`resolve_marker_range`].
    ///
    /// Text has no children, so without markers the range is absent.
    pub fn with_markers(
        string: impl Into<String>,
        start: Option<SourceRange>,
        end: Option<SourceRange>,
    ) -> Self {
        Self::with_range(string, resolve_marker_range(start, end))
    }

    pub fn string(&self) -> &str {
        match self.0.raw().data() {
            RawNodeData::Text(string) => string,
            other => unreachable!("Text wraps a {} cell", other.kind()),
        }
    }

    pub fn with_string(&self, string: impl Into<String>) -> Self {
        let raw = self.0.raw().with_data(RawNodeData::Text(string.into()));
        Self(self.0.substitute(raw))
    }
}

markup_node! {
    /// A line ending that renders as a single space.
    SoftBreak, visit_soft_break
}

impl SoftBreak {
    pub fn new() -> Self {
        Self::with_range(None)
    }

    pub fn with_range(range: Option<SourceRange>) -> Self {
        Self(MarkupData::new_root(RawNode::leaf(RawNodeData::SoftBreak, range)))
    }
}

impl Default for SoftBreak {
    fn default() -> Self {
        Self::new()
    }
}

markup_node! {
    /// A hard line break.
    LineBreak, visit_line_break
}

impl LineBreak {
    pub fn new() -> Self {
        Self::with_range(None)
    }

    pub fn with_range(range: Option<SourceRange>) -> Self {
        Self(MarkupData::new_root(RawNode::leaf(RawNodeData::LineBreak, range)))
    }
}

impl Default for LineBreak {
    fn default() -> Self {
        Self::new()
    }
}

markup_node! {
    /// A code span. The code is stored without its backticks.
    InlineCode, visit_inline_code
}

impl InlineCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self::with_range(code, None)
    }

    pub fn with_range(code: impl Into<String>, range: Option<SourceRange>) -> Self {
        Self(MarkupData::new_root(RawNode::leaf(
            RawNodeData::InlineCode(code.into()),
            range,
        )))
    }

    pub fn code(&self) -> &str {
        match self.0.raw().data() {
            RawNodeData::InlineCode(code) => code,
            other => unreachable!("InlineCode wraps a {} cell", other.kind()),
        }
    }
}

markup_node! {
    /// Emphasized inline content, usually rendered in italics.
    Emphasis, visit_emphasis
}
basic_inline_container!(Emphasis);

markup_node! {
    /// Strongly emphasized inline content, usually rendered in bold.
    Strong, visit_strong
}
basic_inline_container!(Strong);

markup_node! {
    /// Inline content marked as deleted.
    Strikethrough, visit_strikethrough
}
basic_inline_container!(Strikethrough);

markup_node! {
    /// A link with optional destination and title around inline content.
    Link, visit_link
}

impl Link {
    /// Empty destination or title strings are stored as absent.
    pub fn new(
        destination: Option<&str>,
        title: Option<&str>,
        children: impl IntoIterator<Item = InlineMarkup>,
    ) -> Self {
        Self::with_range(destination, title, children, None)
    }

    pub fn with_range(
        destination: Option<&str>,
        title: Option<&str>,
        children: impl IntoIterator<Item = InlineMarkup>,
        range: Option<SourceRange>,
    ) -> Self {
        let data = RawNodeData::Link {
            destination: non_empty(destination.map(str::to_string)),
            title: non_empty(title.map(str::to_string)),
        };
        Self(MarkupData::new_root(RawNode::new(
            data,
            range,
            raw_children(children),
        )))
    }

    pub fn destination(&self) -> Option<&str> {
        match self.0.raw().data() {
            RawNodeData::Link { destination, .. } => destination.as_deref(),
            other => unreachable!("Link wraps a {} cell", other.kind()),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self.0.raw().data() {
            RawNodeData::Link { title, .. } => title.as_deref(),
            other => unreachable!("Link wraps a {} cell", other.kind()),
        }
    }

    pub fn with_destination(&self, destination: Option<&str>) -> Self {
        let raw = self.0.raw().with_data(RawNodeData::Link {
            destination: non_empty(destination.map(str::to_string)),
            title: self.title().map(str::to_string),
        });
        Self(self.0.substitute(raw))
    }

    pub fn inline_children(&self) -> impl Iterator<Item = InlineMarkup> + '_ {
        typed_children(&self.0)
    }

    pub fn with_inline_children(&self, children: impl IntoIterator<Item = InlineMarkup>) -> Self {
        let raw = self.0.raw().with_children(raw_children(children));
        Self(self.0.substitute(raw))
    }
}

markup_node! {
    /// An image; its inline children are the alternate text.
    Image, visit_image
}

impl Image {
    /// Empty source or title strings are stored as absent.
    pub fn new(
        source: Option<&str>,
        title: Option<&str>,
        children: impl IntoIterator<Item = InlineMarkup>,
    ) -> Self {
        Self::with_range(source, title, children, None)
    }

    pub fn with_range(
        source: Option<&str>,
        title: Option<&str>,
        children: impl IntoIterator<Item = InlineMarkup>,
        range: Option<SourceRange>,
    ) -> Self {
        let data = RawNodeData::Image {
            source: non_empty(source.map(str::to_string)),
            title: non_empty(title.map(str::to_string)),
        };
        Self(MarkupData::new_root(RawNode::new(
            data,
            range,
            raw_children(children),
        )))
    }

    pub fn source(&self) -> Option<&str> {
        match self.0.raw().data() {
            RawNodeData::Image { source, .. } => source.as_deref(),
            other => unreachable!("Image wraps a {} cell", other.kind()),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self.0.raw().data() {
            RawNodeData::Image { title, .. } => title.as_deref(),
            other => unreachable!("Image wraps a {} cell", other.kind()),
        }
    }

    pub fn inline_children(&self) -> impl Iterator<Item = InlineMarkup> + '_ {
        typed_children(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Markup, PlainTextConvertible};
    use crate::range::SourceLocation;

    fn span(start: usize, end: usize) -> SourceRange {
        SourceLocation::new(1, start)..SourceLocation::new(1, end)
    }

    #[test]
    fn text_keeps_string_and_range() {
        let text = Text::with_range("hello", Some(span(1, 6)));
        assert_eq!(text.string(), "hello");
        assert_eq!(text.range(), Some(span(1, 6)));
        assert_eq!(text.child_count(), 0);
    }

    #[test]
    fn text_markers_resolve_without_child_fallback() {
        assert_eq!(
            Text::with_markers("x", Some(span(1, 3)), Some(span(5, 8))).range(),
            Some(span(1, 8))
        );
        assert_eq!(Text::with_markers("x", None, None).range(), None);
    }

    #[test]
    fn link_normalizes_empty_strings() {
        let link = Link::new(Some(""), Some(""), [Text::new("here").into()]);
        assert_eq!(link.destination(), None);
        assert_eq!(link.title(), None);

        let link = Link::new(Some("https://example.com"), Some("Example"), []);
        assert_eq!(link.destination(), Some("https://example.com"));
        assert_eq!(link.title(), Some("Example"));
    }

    #[test]
    fn link_with_destination_keeps_title_and_children() {
        let link = Link::new(Some("a"), Some("t"), [Text::new("here").into()]);
        let edited = link.with_destination(Some("b"));

        assert_eq!(edited.destination(), Some("b"));
        assert_eq!(edited.title(), Some("t"));
        assert_eq!(edited.plain_text(), "here");
        assert_ne!(edited.root_id(), link.root_id());
        assert_eq!(link.destination(), Some("a"));
    }

    #[test]
    fn image_normalizes_empty_source() {
        let image = Image::new(Some(""), None, [Text::new("alt").into()]);
        assert_eq!(image.source(), None);
        assert_eq!(image.plain_text(), "alt");
    }

    #[test]
    fn inline_code_plain_text_keeps_backticks() {
        assert_eq!(InlineCode::new("let x").plain_text(), "`let x`");
    }

    #[test]
    fn breaks_project_to_whitespace() {
        let strong = Strong::new([
            Text::new("a").into(),
            SoftBreak::new().into(),
            Text::new("b").into(),
            LineBreak::new().into(),
            Text::new("c").into(),
        ]);
        assert_eq!(strong.plain_text(), "a b\nc");
    }

    #[test]
    fn text_edit_is_visible_through_new_parent() {
        let strong = Strong::new([Text::new("old").into()]);
        let Some(InlineMarkup::Text(text)) = strong.inline_children().next() else {
            panic!("expected a text child");
        };

        let edited = text.with_string("new");
        let parent = edited.parent().unwrap();

        assert_eq!(parent.kind(), crate::MarkupKind::Strong);
        assert_eq!(parent.root_id(), edited.root_id());
        assert_eq!(strong.plain_text(), "old");
        let Ok(new_strong) = Strong::try_from(parent) else {
            panic!("parent should be Strong");
        };
        assert_eq!(new_strong.plain_text(), "new");
    }
}
