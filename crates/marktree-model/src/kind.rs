//! MarkupKind enum naming every node kind in the document tree.
//!
//! Inline and block kinds share a single enum. The category predicates are
//! exhaustive matches: adding a kind means deciding where it belongs.

use std::fmt;

/// All node kinds of the document model.
///
/// The set is closed for matching inside the crate. New kinds are added by
/// appending a variant, a typed wrapper, and a `visit_*` method with a
/// default body on [`MarkupVisitor`](crate::MarkupVisitor).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkupKind {
    // === Inline leaves ===
    /// Literal text run
    Text,
    /// Line ending inside a paragraph that renders as a space
    SoftBreak,
    /// Hard line break (trailing backslash or two spaces)
    LineBreak,
    /// Code span (`` `code` ``)
    InlineCode,

    // === Inline containers ===
    /// Emphasis `*text*`
    Emphasis,
    /// Strong emphasis `**text**`
    Strong,
    /// Strikethrough `~~text~~`
    Strikethrough,
    /// Standard link `[text](url "title")`
    Link,
    /// Image `![alt](src "title")`
    Image,
    /// Highlighted run `==text==`
    Highlight,
    /// Backslash-escaped character `\*`
    EscapedCharacter,

    // === Block leaves ===
    /// Fenced or indented code block
    CodeBlock,
    /// Thematic break (`---`, `***`)
    ThematicBreak,

    // === Block containers ===
    /// Paragraph block
    Paragraph,
    /// ATX or setext heading
    Heading,
    /// Blockquote container (`> ...`)
    BlockQuote,
    /// Bullet list
    UnorderedList,
    /// Numbered list
    OrderedList,
    /// Individual list item
    ListItem,

    // === Root ===
    /// Root document node
    Document,
}

impl MarkupKind {
    /// Returns true if this kind may appear inside inline content.
    pub fn is_inline(self) -> bool {
        match self {
            Self::Text
            | Self::SoftBreak
            | Self::LineBreak
            | Self::InlineCode
            | Self::Emphasis
            | Self::Strong
            | Self::Strikethrough
            | Self::Link
            | Self::Image
            | Self::Highlight
            | Self::EscapedCharacter => true,
            Self::CodeBlock
            | Self::ThematicBreak
            | Self::Paragraph
            | Self::Heading
            | Self::BlockQuote
            | Self::UnorderedList
            | Self::OrderedList
            | Self::ListItem
            | Self::Document => false,
        }
    }

    /// Returns true if this kind may appear as a child of a block container.
    ///
    /// `Document` is neither inline nor block: it only ever appears as a root.
    pub fn is_block(self) -> bool {
        !self.is_inline() && self != Self::Document
    }

    /// Returns true if this kind never carries children.
    pub fn is_leaf(self) -> bool {
        match self {
            Self::Text
            | Self::SoftBreak
            | Self::LineBreak
            | Self::InlineCode
            | Self::CodeBlock
            | Self::ThematicBreak => true,
            Self::Emphasis
            | Self::Strong
            | Self::Strikethrough
            | Self::Link
            | Self::Image
            | Self::Highlight
            | Self::EscapedCharacter
            | Self::Paragraph
            | Self::Heading
            | Self::BlockQuote
            | Self::UnorderedList
            | Self::OrderedList
            | Self::ListItem
            | Self::Document => false,
        }
    }

    /// Returns true if a node of this kind may hold a `child` node.
    ///
    /// Matches the child types the typed constructors take: inline content
    /// for paragraphs, headings and inline containers, blocks for block
    /// containers, list items for lists, and nothing for leaves.
    pub fn accepts_child(self, child: MarkupKind) -> bool {
        match self {
            Self::Emphasis
            | Self::Strong
            | Self::Strikethrough
            | Self::Link
            | Self::Image
            | Self::Highlight
            | Self::EscapedCharacter
            | Self::Paragraph
            | Self::Heading => child.is_inline(),
            Self::BlockQuote | Self::ListItem | Self::Document => child.is_block(),
            Self::UnorderedList | Self::OrderedList => child == Self::ListItem,
            Self::Text
            | Self::SoftBreak
            | Self::LineBreak
            | Self::InlineCode
            | Self::CodeBlock
            | Self::ThematicBreak => false,
        }
    }

    /// Display name, matching the typed wrapper's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::SoftBreak => "SoftBreak",
            Self::LineBreak => "LineBreak",
            Self::InlineCode => "InlineCode",
            Self::Emphasis => "Emphasis",
            Self::Strong => "Strong",
            Self::Strikethrough => "Strikethrough",
            Self::Link => "Link",
            Self::Image => "Image",
            Self::Highlight => "Highlight",
            Self::EscapedCharacter => "EscapedCharacter",
            Self::CodeBlock => "CodeBlock",
            Self::ThematicBreak => "ThematicBreak",
            Self::Paragraph => "Paragraph",
            Self::Heading => "Heading",
            Self::BlockQuote => "BlockQuote",
            Self::UnorderedList => "UnorderedList",
            Self::OrderedList => "OrderedList",
            Self::ListItem => "ListItem",
            Self::Document => "Document",
        }
    }
}

impl fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
