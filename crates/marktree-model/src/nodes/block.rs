//! Block node kinds and the document root.

use crate::data::MarkupData;
use crate::nodes::{BlockMarkup, InlineMarkup, raw_children, typed_children};
use crate::range::SourceRange;
use crate::raw::{Checkbox, RawNode, RawNodeData, non_empty};

markup_node! {
    /// A paragraph of inline content.
    Paragraph, visit_paragraph
}
basic_inline_container!(Paragraph);

markup_node! {
    /// A heading of inline content. The level is not validated.
    Heading, visit_heading
}

impl Heading {
    pub fn new(level: u8, children: impl IntoIterator<Item = InlineMarkup>) -> Self {
        Self::with_range(level, children, None)
    }

    pub fn with_range(
        level: u8,
        children: impl IntoIterator<Item = InlineMarkup>,
        range: Option<SourceRange>,
    ) -> Self {
        Self(MarkupData::new_root(RawNode::new(
            RawNodeData::Heading { level },
            range,
            raw_children(children),
        )))
    }

    pub fn level(&self) -> u8 {
        match self.0.raw().data() {
            RawNodeData::Heading { level } => *level,
            other => unreachable!("Heading wraps a {} cell", other.kind()),
        }
    }

    pub fn with_level(&self, level: u8) -> Self {
        let raw = self.0.raw().with_data(RawNodeData::Heading { level });
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
    /// A quoted run of blocks (`> ...`).
    BlockQuote, visit_block_quote
}
basic_block_container!(BlockQuote);

markup_node! {
    /// The root of a parsed document.
    Document, visit_document
}
basic_block_container!(Document);

markup_node! {
    /// One item of a list, optionally with a task checkbox.
    ListItem, visit_list_item
}

impl ListItem {
    pub fn new(checkbox: Option<Checkbox>, children: impl IntoIterator<Item = BlockMarkup>) -> Self {
        Self::with_range(checkbox, children, None)
    }

    pub fn with_range(
        checkbox: Option<Checkbox>,
        children: impl IntoIterator<Item = BlockMarkup>,
        range: Option<SourceRange>,
    ) -> Self {
        Self(MarkupData::new_root(RawNode::new(
            RawNodeData::ListItem { checkbox },
            range,
            raw_children(children),
        )))
    }

    pub fn checkbox(&self) -> Option<Checkbox> {
        match self.0.raw().data() {
            RawNodeData::ListItem { checkbox } => *checkbox,
            other => unreachable!("ListItem wraps a {} cell", other.kind()),
        }
    }

    pub fn with_checkbox(&self, checkbox: Option<Checkbox>) -> Self {
        let raw = self.0.raw().with_data(RawNodeData::ListItem { checkbox });
        Self(self.0.substitute(raw))
    }

    pub fn block_children(&self) -> impl Iterator<Item = BlockMarkup> + '_ {
        typed_children(&self.0)
    }

    pub fn with_block_children(&self, children: impl IntoIterator<Item = BlockMarkup>) -> Self {
        let raw = self.0.raw().with_children(raw_children(children));
        Self(self.0.substitute(raw))
    }
}

markup_node! {
    /// A bullet list.
    UnorderedList, visit_unordered_list
}

impl UnorderedList {
    pub fn new(items: impl IntoIterator<Item = ListItem>) -> Self {
        Self::with_range(items, None)
    }

    pub fn with_range(items: impl IntoIterator<Item = ListItem>, range: Option<SourceRange>) -> Self {
        Self(MarkupData::new_root(RawNode::new(
            RawNodeData::UnorderedList,
            range,
            raw_children(items),
        )))
    }

    pub fn list_items(&self) -> impl Iterator<Item = ListItem> + '_ {
        typed_children(&self.0)
    }

    pub fn with_list_items(&self, items: impl IntoIterator<Item = ListItem>) -> Self {
        let raw = self.0.raw().with_children(raw_children(items));
        Self(self.0.substitute(raw))
    }
}

markup_node! {
    /// A numbered list starting at `start_index`.
    OrderedList, visit_ordered_list
}

impl OrderedList {
    pub fn new(start_index: u32, items: impl IntoIterator<Item = ListItem>) -> Self {
        Self::with_range(start_index, items, None)
    }

    pub fn with_range(
        start_index: u32,
        items: impl IntoIterator<Item = ListItem>,
        range: Option<SourceRange>,
    ) -> Self {
        Self(MarkupData::new_root(RawNode::new(
            RawNodeData::OrderedList { start_index },
            range,
            raw_children(items),
        )))
    }

    pub fn start_index(&self) -> u32 {
        match self.0.raw().data() {
            RawNodeData::OrderedList { start_index } => *start_index,
            other => unreachable!("OrderedList wraps a {} cell", other.kind()),
        }
    }

    pub fn list_items(&self) -> impl Iterator<Item = ListItem> + '_ {
        typed_children(&self.0)
    }

    pub fn with_list_items(&self, items: impl IntoIterator<Item = ListItem>) -> Self {
        let raw = self.0.raw().with_children(raw_children(items));
        Self(self.0.substitute(raw))
    }
}

markup_node! {
    /// A fenced or indented code block.
    CodeBlock, visit_code_block
}

impl CodeBlock {
    /// An empty language string is stored as absent.
    pub fn new(language: Option<&str>, code: impl Into<String>) -> Self {
        Self::with_range(language, code, None)
    }

    pub fn with_range(
        language: Option<&str>,
        code: impl Into<String>,
        range: Option<SourceRange>,
    ) -> Self {
        let data = RawNodeData::CodeBlock {
            language: non_empty(language.map(str::to_string)),
            code: code.into(),
        };
        Self(MarkupData::new_root(RawNode::leaf(data, range)))
    }

    pub fn language(&self) -> Option<&str> {
        match self.0.raw().data() {
            RawNodeData::CodeBlock { language, .. } => language.as_deref(),
            other => unreachable!("CodeBlock wraps a {} cell", other.kind()),
        }
    }

    pub fn code(&self) -> &str {
        match self.0.raw().data() {
            RawNodeData::CodeBlock { code, .. } => code,
            other => unreachable!("CodeBlock wraps a {} cell", other.kind()),
        }
    }
}

markup_node! {
    /// A thematic break (`---`).
    ThematicBreak, visit_thematic_break
}

impl ThematicBreak {
    pub fn new() -> Self {
        Self::with_range(None)
    }

    pub fn with_range(range: Option<SourceRange>) -> Self {
        Self(MarkupData::new_root(RawNode::leaf(RawNodeData::ThematicBreak, range)))
    }
}

impl Default for ThematicBreak {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkupError;
    use crate::kind::MarkupKind;
    use crate::markup::{Markup, PlainTextConvertible};
    use crate::nodes::{AnyMarkup, Emphasis, SoftBreak, Strong, Text};
    use crate::range::SourceLocation;
    use pretty_assertions::assert_eq;

    fn line(number: usize) -> SourceRange {
        SourceLocation::new(number, 1)..SourceLocation::new(number + 1, 1)
    }

    fn sample_document() -> Document {
        Document::new([
            Heading::new(1, [Text::new("Title").into()]).into(),
            Paragraph::new([
                Text::new("Some ").into(),
                Strong::new([Text::new("bold").into()]).into(),
                Text::new(" text").into(),
            ])
            .into(),
            UnorderedList::new([
                ListItem::new(
                    Some(Checkbox::Checked),
                    [Paragraph::new([Text::new("done").into()]).into()],
                ),
                ListItem::new(None, [Paragraph::new([Text::new("todo").into()]).into()]),
            ])
            .into(),
        ])
    }

    #[test]
    fn document_children_have_sibling_indices() {
        let document = sample_document();
        let indices: Vec<_> = document.children().map(|c| c.index_in_parent()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(document.children().all(|c| c.root_id() == document.root_id()));
    }

    #[test]
    fn construction_allocates_fresh_roots() {
        let first = Paragraph::new([]);
        let second = Paragraph::new([]);
        assert_ne!(first.root_id(), second.root_id());
    }

    #[test]
    fn heading_payload_and_plain_text() {
        let heading = Heading::with_range(
            2,
            [Text::new("Hello ").into(), Emphasis::new([Text::new("world").into()]).into()],
            Some(line(3)),
        );
        assert_eq!(heading.level(), 2);
        assert_eq!(heading.plain_text(), "Hello world");
        assert_eq!(heading.range(), Some(line(3)));
    }

    #[test]
    fn heading_with_level_keeps_children() {
        let heading = Heading::new(1, [Text::new("x").into()]);
        let edited = heading.with_level(3);
        assert_eq!(edited.level(), 3);
        assert!(edited.inline_children().count() == 1);
        assert_eq!(heading.level(), 1);
    }

    #[test]
    fn list_item_checkbox() {
        let document = sample_document();
        let Some(AnyMarkup::UnorderedList(list)) = document.child(2) else {
            panic!("expected a list");
        };
        let checkboxes: Vec<_> = list.list_items().map(|item| item.checkbox()).collect();
        assert_eq!(checkboxes, vec![Some(Checkbox::Checked), None]);

        let first = list.list_items().next().unwrap();
        let unchecked = first.with_checkbox(Some(Checkbox::Unchecked));
        assert_eq!(unchecked.checkbox(), Some(Checkbox::Unchecked));
        assert_eq!(unchecked.parent().unwrap().kind(), MarkupKind::UnorderedList);
    }

    #[test]
    fn ordered_list_start_index() {
        let list = OrderedList::new(3, [ListItem::new(None, [])]);
        assert_eq!(list.start_index(), 3);
        assert_eq!(list.list_items().count(), 1);
    }

    #[test]
    fn code_block_normalizes_empty_language() {
        let block = CodeBlock::new(Some(""), "fn main() {}\n");
        assert_eq!(block.language(), None);
        assert_eq!(block.code(), "fn main() {}\n");
        assert_eq!(CodeBlock::new(Some("rust"), "").language(), Some("rust"));
    }

    #[test]
    fn round_trip_through_children() {
        let paragraph = Paragraph::with_range(
            [Text::with_range("a", Some(line(1))).into(), SoftBreak::new().into()],
            Some(line(1)),
        );

        let rebuilt = Paragraph::new(paragraph.inline_children());
        assert!(rebuilt.has_same_structure(&paragraph));
        assert_eq!(rebuilt.range(), None);

        let preserved = Paragraph::with_range(paragraph.inline_children(), paragraph.range());
        assert_eq!(preserved.data().raw(), paragraph.data().raw());
    }

    #[test]
    fn reinterpret_rejects_wrong_kind() {
        let any: AnyMarkup = ThematicBreak::new().into();
        let error = Paragraph::try_from(any.clone()).unwrap_err();
        assert_eq!(
            error,
            MarkupError::KindMismatch {
                expected: "Paragraph",
                found: MarkupKind::ThematicBreak,
            }
        );
        assert!(ThematicBreak::try_from(any.clone()).is_ok());
        assert!(InlineMarkup::try_from(any.clone()).is_err());
        assert!(BlockMarkup::try_from(any).is_ok());
    }

    #[test]
    fn with_block_children_rebuilds_spine_only() {
        let document = sample_document();
        let Some(AnyMarkup::UnorderedList(list)) = document.child(2) else {
            panic!("expected a list");
        };
        let item = list.list_items().next().unwrap();

        let edited = item.with_block_children([ThematicBreak::new().into()]);
        let new_document = edited.root();

        assert_ne!(new_document.root_id(), document.root_id());
        assert!(std::sync::Arc::ptr_eq(
            &new_document.data().raw().children()[0],
            &document.data().raw().children()[0]
        ));
        assert_eq!(edited.child(0).unwrap().kind(), MarkupKind::ThematicBreak);
    }
}
