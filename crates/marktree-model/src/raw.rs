//! The raw tree cell shared by every typed wrapper.
//!
//! A [`RawNode`] is immutable once built and held behind an `Arc`, so any
//! number of trees may share a subtree. Construction is crate-private: the
//! typed constructors in [`crate::nodes`] are the only way to make one, which
//! keeps container children valid for their container.

use std::sync::Arc;

use crate::kind::MarkupKind;
use crate::range::{SourceRange, union_range};

/// State of a task-list checkbox on a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checkbox {
    /// `- [x]`
    Checked,
    /// `- [ ]`
    Unchecked,
}

/// Kind tag plus the payload specific to that kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawNodeData {
    Text(String),
    SoftBreak,
    LineBreak,
    InlineCode(String),
    Emphasis,
    Strong,
    Strikethrough,
    Link {
        destination: Option<String>,
        title: Option<String>,
    },
    Image {
        source: Option<String>,
        title: Option<String>,
    },
    Highlight,
    EscapedCharacter,
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    ThematicBreak,
    Paragraph,
    Heading {
        level: u8,
    },
    BlockQuote,
    UnorderedList,
    OrderedList {
        start_index: u32,
    },
    ListItem {
        checkbox: Option<Checkbox>,
    },
    Document,
}

impl RawNodeData {
    pub fn kind(&self) -> MarkupKind {
        match self {
            Self::Text(_) => MarkupKind::Text,
            Self::SoftBreak => MarkupKind::SoftBreak,
            Self::LineBreak => MarkupKind::LineBreak,
            Self::InlineCode(_) => MarkupKind::InlineCode,
            Self::Emphasis => MarkupKind::Emphasis,
            Self::Strong => MarkupKind::Strong,
            Self::Strikethrough => MarkupKind::Strikethrough,
            Self::Link { .. } => MarkupKind::Link,
            Self::Image { .. } => MarkupKind::Image,
            Self::Highlight => MarkupKind::Highlight,
            Self::EscapedCharacter => MarkupKind::EscapedCharacter,
            Self::CodeBlock { .. } => MarkupKind::CodeBlock,
            Self::ThematicBreak => MarkupKind::ThematicBreak,
            Self::Paragraph => MarkupKind::Paragraph,
            Self::Heading { .. } => MarkupKind::Heading,
            Self::BlockQuote => MarkupKind::BlockQuote,
            Self::UnorderedList => MarkupKind::UnorderedList,
            Self::OrderedList { .. } => MarkupKind::OrderedList,
            Self::ListItem { .. } => MarkupKind::ListItem,
            Self::Document => MarkupKind::Document,
        }
    }
}

/// Immutable tree cell: tag and payload, optional provenance, ordered children.
#[derive(Debug, PartialEq, Eq)]
pub struct RawNode {
    data: RawNodeData,
    range: Option<SourceRange>,
    children: Vec<Arc<RawNode>>,
}

impl RawNode {
    pub(crate) fn new(
        data: RawNodeData,
        range: Option<SourceRange>,
        children: Vec<Arc<RawNode>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            data,
            range,
            children,
        })
    }

    pub(crate) fn leaf(data: RawNodeData, range: Option<SourceRange>) -> Arc<Self> {
        Self::new(data, range, Vec::new())
    }

    pub fn kind(&self) -> MarkupKind {
        self.data.kind()
    }

    pub fn data(&self) -> &RawNodeData {
        &self.data
    }

    pub fn range(&self) -> Option<&SourceRange> {
        self.range.as_ref()
    }

    pub fn children(&self) -> &[Arc<RawNode>] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Compares tags, payloads and children recursively, ignoring ranges.
    pub fn has_same_structure(&self, other: &RawNode) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.data == other.data
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.has_same_structure(b))
    }

    /// New cell with the same data and range but different children.
    pub(crate) fn with_children(&self, children: Vec<Arc<RawNode>>) -> Arc<Self> {
        Self::new(self.data.clone(), self.range.clone(), children)
    }

    /// New cell with the same range and children but different data.
    pub(crate) fn with_data(&self, data: RawNodeData) -> Arc<Self> {
        Self::new(data, self.range.clone(), self.children.clone())
    }

    /// Range covering every child that carries one.
    pub(crate) fn children_range(children: &[Arc<RawNode>]) -> Option<SourceRange> {
        union_range(children.iter().filter_map(|child| child.range()))
    }

    /// Appends this node's plain-text projection to `out`.
    pub(crate) fn write_plain_text(&self, out: &mut String) {
        match &self.data {
            RawNodeData::Text(string) => out.push_str(string),
            RawNodeData::InlineCode(code) => {
                out.push('`');
                out.push_str(code);
                out.push('`');
            }
            RawNodeData::SoftBreak => out.push(' '),
            RawNodeData::LineBreak => out.push('\n'),
            _ => self.write_children_plain_text(out),
        }
    }

    /// Appends the projection of every inline child; other children are skipped.
    pub(crate) fn write_children_plain_text(&self, out: &mut String) {
        for child in &self.children {
            if child.kind().is_inline() {
                child.write_plain_text(out);
            }
        }
    }
}

/// Maps an empty string to `None`.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
