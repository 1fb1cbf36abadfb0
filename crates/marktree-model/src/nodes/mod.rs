//! Typed wrappers, one per [`MarkupKind`], plus the sum types that group them.
//!
//! Every wrapper holds a [`MarkupData`] whose raw cell is known to carry the
//! wrapper's tag. The public constructors build that cell themselves and so
//! cannot fail; the only checked path is [`TryFrom<AnyMarkup>`], which
//! reinterprets an existing node as a specific kind.

use std::sync::Arc;

use crate::data::MarkupData;
use crate::kind::MarkupKind;
use crate::markup::{Markup, PlainTextConvertible};
use crate::range::{SourceRange, resolve_marker_range};
use crate::raw::RawNode;
use crate::visitor::MarkupVisitor;

/// Declares a typed wrapper and wires it into [`Markup`], the visitor and
/// [`TryFrom<AnyMarkup>`].
macro_rules! markup_node {
    ($(#[$meta:meta])* $name:ident, $visit:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(pub(crate) $crate::data::MarkupData);

        impl $name {
            /// Kind tag carried by every value of this type.
            pub const KIND: $crate::kind::MarkupKind = $crate::kind::MarkupKind::$name;

            /// Returns this node as the root of a new tree.
            pub fn detached_from_parent(&self) -> Self {
                Self(self.0.detached())
            }
        }

        impl $crate::markup::Markup for $name {
            fn data(&self) -> &$crate::data::MarkupData {
                &self.0
            }

            fn accept<V: $crate::visitor::MarkupVisitor>(&self, visitor: &mut V) -> V::Result {
                visitor.$visit(self)
            }
        }

        impl TryFrom<$crate::nodes::AnyMarkup> for $name {
            type Error = $crate::error::MarkupError;

            fn try_from(markup: $crate::nodes::AnyMarkup) -> Result<Self, Self::Error> {
                let data = $crate::markup::Markup::data(&markup);
                if data.kind() == Self::KIND {
                    Ok(Self(data.clone()))
                } else {
                    log::debug!(
                        "refusing to reinterpret {} node as {}",
                        data.kind(),
                        stringify!($name)
                    );
                    Err($crate::error::MarkupError::KindMismatch {
                        expected: stringify!($name),
                        found: data.kind(),
                    })
                }
            }
        }
    };
}

/// Constructors and child access for containers whose only payload is their
/// inline children.
macro_rules! basic_inline_container {
    ($name:ident) => {
        impl $name {
            /// Builds the node without a source range.
            ///
            /// To inherit the children's combined range instead, use
            /// `with_markers(children, None, None)`.
            pub fn new(children: impl IntoIterator<Item = $crate::nodes::InlineMarkup>) -> Self {
                Self::with_range(children, None)
            }

            pub fn with_range(
                children: impl IntoIterator<Item = $crate::nodes::InlineMarkup>,
                range: Option<$crate::range::SourceRange>,
            ) -> Self {
                let children = $crate::nodes::raw_children(children);
                Self($crate::data::MarkupData::new_root($crate::raw::RawNode::new(
                    $crate::raw::RawNodeData::$name,
                    range,
                    children,
                )))
            }

            /// Builds the node from its opening and closing marker ranges.
            ///
            /// Without either marker the range covers the children's ranges.
            pub fn with_markers(
                children: impl IntoIterator<Item = $crate::nodes::InlineMarkup>,
                start: Option<$crate::range::SourceRange>,
                end: Option<$crate::range::SourceRange>,
            ) -> Self {
                let children = $crate::nodes::raw_children(children);
                let range = $crate::nodes::resolve_range(start, end, &children);
                Self($crate::data::MarkupData::new_root($crate::raw::RawNode::new(
                    $crate::raw::RawNodeData::$name,
                    range,
                    children,
                )))
            }

            pub fn inline_children(&self) -> impl Iterator<Item = $crate::nodes::InlineMarkup> + '_ {
                $crate::nodes::typed_children(&self.0)
            }

            pub fn with_inline_children(
                &self,
                children: impl IntoIterator<Item = $crate::nodes::InlineMarkup>,
            ) -> Self {
                let raw = self.0.raw().with_children($crate::nodes::raw_children(children));
                Self(self.0.substitute(raw))
            }
        }
    };
}

/// Constructors and child access for containers whose only payload is their
/// block children.
macro_rules! basic_block_container {
    ($name:ident) => {
        impl $name {
            /// Builds the node without a source range.
            pub fn new(children: impl IntoIterator<Item = $crate::nodes::BlockMarkup>) -> Self {
                Self::with_range(children, None)
            }

            pub fn with_range(
                children: impl IntoIterator<Item = $crate::nodes::BlockMarkup>,
                range: Option<$crate::range::SourceRange>,
            ) -> Self {
                let children = $crate::nodes::raw_children(children);
                Self($crate::data::MarkupData::new_root($crate::raw::RawNode::new(
                    $crate::raw::RawNodeData::$name,
                    range,
                    children,
                )))
            }

            pub fn block_children(&self) -> impl Iterator<Item = $crate::nodes::BlockMarkup> + '_ {
                $crate::nodes::typed_children(&self.0)
            }

            pub fn with_block_children(
                &self,
                children: impl IntoIterator<Item = $crate::nodes::BlockMarkup>,
            ) -> Self {
                let raw = self.0.raw().with_children($crate::nodes::raw_children(children));
                Self(self.0.substitute(raw))
            }
        }
    };
}

mod block;
mod extension;
mod inline;

pub use block::{
    BlockQuote, CodeBlock, Document, Heading, ListItem, OrderedList, Paragraph, ThematicBreak,
    UnorderedList,
};
pub use extension::{EscapedCharacter, Highlight};
pub use inline::{
    Emphasis, Image, InlineCode, LineBreak, Link, SoftBreak, Strikethrough, Strong, Text,
};

/// Declares a sum type over typed wrappers, dispatching [`Markup`] to the
/// wrapped node.
macro_rules! markup_union {
    ($(#[$meta:meta])* $union:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub enum $union {
            $($variant($variant),)+
        }

        impl Markup for $union {
            fn data(&self) -> &MarkupData {
                match self {
                    $(Self::$variant(node) => node.data(),)+
                }
            }

            fn accept<V: MarkupVisitor>(&self, visitor: &mut V) -> V::Result {
                match self {
                    $(Self::$variant(node) => node.accept(visitor),)+
                }
            }
        }

        $(
            impl From<$variant> for $union {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )+
    };
}

/// A [`markup_union`] that is a subset of [`AnyMarkup`].
macro_rules! markup_category {
    ($(#[$meta:meta])* $union:ident, $expected:literal { $($variant:ident),+ $(,)? }) => {
        markup_union! { $(#[$meta])* $union { $($variant),+ } }

        impl From<$union> for AnyMarkup {
            fn from(node: $union) -> Self {
                match node {
                    $($union::$variant(node) => Self::$variant(node),)+
                }
            }
        }

        impl TryFrom<AnyMarkup> for $union {
            type Error = $crate::error::MarkupError;

            fn try_from(markup: AnyMarkup) -> Result<Self, Self::Error> {
                match markup {
                    $(AnyMarkup::$variant(node) => Ok(Self::$variant(node)),)+
                    other => Err($crate::error::MarkupError::KindMismatch {
                        expected: $expected,
                        found: other.kind(),
                    }),
                }
            }
        }
    };
}

markup_union! {
    /// Any node of the tree.
    AnyMarkup {
        Text,
        SoftBreak,
        LineBreak,
        InlineCode,
        Emphasis,
        Strong,
        Strikethrough,
        Link,
        Image,
        Highlight,
        EscapedCharacter,
        CodeBlock,
        ThematicBreak,
        Paragraph,
        Heading,
        BlockQuote,
        UnorderedList,
        OrderedList,
        ListItem,
        Document,
    }
}

markup_category! {
    /// A node allowed inside inline content.
    InlineMarkup, "inline markup" {
        Text,
        SoftBreak,
        LineBreak,
        InlineCode,
        Emphasis,
        Strong,
        Strikethrough,
        Link,
        Image,
        Highlight,
        EscapedCharacter,
    }
}

markup_category! {
    /// A node allowed as a child of a block container.
    BlockMarkup, "block markup" {
        CodeBlock,
        ThematicBreak,
        Paragraph,
        Heading,
        BlockQuote,
        UnorderedList,
        OrderedList,
        ListItem,
    }
}

impl AnyMarkup {
    /// Wraps `data` in the wrapper matching its tag.
    pub(crate) fn from_data(data: MarkupData) -> Self {
        match data.kind() {
            MarkupKind::Text => Self::Text(Text(data)),
            MarkupKind::SoftBreak => Self::SoftBreak(SoftBreak(data)),
            MarkupKind::LineBreak => Self::LineBreak(LineBreak(data)),
            MarkupKind::InlineCode => Self::InlineCode(InlineCode(data)),
            MarkupKind::Emphasis => Self::Emphasis(Emphasis(data)),
            MarkupKind::Strong => Self::Strong(Strong(data)),
            MarkupKind::Strikethrough => Self::Strikethrough(Strikethrough(data)),
            MarkupKind::Link => Self::Link(Link(data)),
            MarkupKind::Image => Self::Image(Image(data)),
            MarkupKind::Highlight => Self::Highlight(Highlight(data)),
            MarkupKind::EscapedCharacter => Self::EscapedCharacter(EscapedCharacter(data)),
            MarkupKind::CodeBlock => Self::CodeBlock(CodeBlock(data)),
            MarkupKind::ThematicBreak => Self::ThematicBreak(ThematicBreak(data)),
            MarkupKind::Paragraph => Self::Paragraph(Paragraph(data)),
            MarkupKind::Heading => Self::Heading(Heading(data)),
            MarkupKind::BlockQuote => Self::BlockQuote(BlockQuote(data)),
            MarkupKind::UnorderedList => Self::UnorderedList(UnorderedList(data)),
            MarkupKind::OrderedList => Self::OrderedList(OrderedList(data)),
            MarkupKind::ListItem => Self::ListItem(ListItem(data)),
            MarkupKind::Document => Self::Document(Document(data)),
        }
    }

    /// Returns this node as the root of a new tree.
    pub fn detached_from_parent(&self) -> Self {
        Self::from_data(self.data().detached())
    }
}

macro_rules! plain_text_convertible {
    ($($name:ident),+ $(,)?) => {
        $(
            impl PlainTextConvertible for $name {
                fn plain_text(&self) -> String {
                    let mut out = String::new();
                    self.data().raw().write_plain_text(&mut out);
                    out
                }
            }
        )+
    };
}

plain_text_convertible!(
    InlineMarkup,
    Text,
    SoftBreak,
    LineBreak,
    InlineCode,
    Emphasis,
    Strong,
    Strikethrough,
    Link,
    Image,
    Highlight,
    EscapedCharacter,
    Paragraph,
    Heading,
);

/// Extracts the shared raw cell of each child.
pub(crate) fn raw_children<M: Markup>(children: impl IntoIterator<Item = M>) -> Vec<Arc<RawNode>> {
    children
        .into_iter()
        .map(|child| Arc::clone(child.data().raw()))
        .collect()
}

/// Marker policy with a fallback to the children's combined range.
pub(crate) fn resolve_range(
    start: Option<SourceRange>,
    end: Option<SourceRange>,
    children: &[Arc<RawNode>],
) -> Option<SourceRange> {
    resolve_marker_range(start, end).or_else(|| RawNode::children_range(children))
}

/// Children of `data` that convert to `T`; others are skipped.
pub(crate) fn typed_children<T>(data: &MarkupData) -> impl Iterator<Item = T> + '_
where
    T: TryFrom<AnyMarkup>,
{
    (0..data.child_count())
        .filter_map(move |index| data.child(index))
        .filter_map(|child| T::try_from(AnyMarkup::from_data(child)).ok())
}
