//! # marktree-model
//!
//! An immutable, extensible document tree for a Markdown processor. The
//! tokenizer and parser live elsewhere; this crate only covers what a
//! recognized construct becomes: a typed node with a verifiable kind and a
//! provenance range.
//!
//! ## Architecture Overview
//!
//! ```text
//! markers, ranges, text → typed constructor → RawNode (Arc) → MarkupData → visitor
//!                         (Strong::with_markers)  (tag + payload)  (root id + path)
//! ```
//!
//! ### Raw cells ([`raw`] module)
//!
//! A [`RawNode`] is a tag with payload, an optional [`SourceRange`] and
//! ordered children. Cells are immutable and reference counted, so edits
//! rebuild only the path from the edited node to the root and share every
//! other subtree.
//!
//! ### Identity ([`identity`] and [`data`] modules)
//!
//! Each materialized tree has a process-unique [`RootId`] taken from an atomic
//! counter. A [`MarkupData`] locates a node by that tree and its child-index
//! path, so parent and sibling lookups never need back pointers.
//!
//! ### Typed nodes ([`nodes`] module)
//!
//! One wrapper per [`MarkupKind`]. Constructors taking children and payload
//! cannot fail; reinterpreting an [`AnyMarkup`] as a specific kind is checked
//! and returns [`MarkupError::KindMismatch`] on a wrong tag.
//!
//! ### Visitors ([`visitor`] module)
//!
//! [`MarkupVisitor`] has one method per kind, each defaulting to
//! `default_visit`, so new kinds never break existing visitors.
//!
//! ## Module Structure
//!
//! ```text
//! marktree-model/
//! ├── lib.rs        # This file - public API
//! ├── kind.rs       # MarkupKind enum and category predicates
//! ├── range.rs      # SourceLocation, SourceRange, marker range resolution
//! ├── raw.rs        # RawNode cells and plain-text projection
//! ├── identity.rs   # RootId counter and NodeMetadata
//! ├── data.rs       # MarkupData: tree handle, parent/sibling lookup, edits
//! ├── markup.rs     # Markup trait, children iterator, PlainTextConvertible
//! ├── error.rs      # MarkupError
//! ├── dump.rs       # debug_description and DumpOptions
//! ├── nodes/
//! │   ├── mod.rs    # Declaration macros, AnyMarkup/InlineMarkup/BlockMarkup
//! │   ├── inline.rs # Text, Strong, Link, ...
//! │   ├── block.rs  # Document, Paragraph, Heading, lists, ...
//! │   └── extension.rs # Highlight, EscapedCharacter
//! └── visitor/
//!     ├── mod.rs    # MarkupVisitor
//!     ├── walk.rs   # descend
//!     └── rewrite.rs# rewrite_children
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use marktree_model::{
//!     Document, Markup, Paragraph, PlainTextConvertible, SourceLocation, Strong, Text,
//! };
//!
//! let open = SourceLocation::new(1, 1)..SourceLocation::new(1, 3);
//! let close = SourceLocation::new(1, 7)..SourceLocation::new(1, 9);
//! let strong = Strong::with_markers([Text::new("bold").into()], Some(open), Some(close));
//! assert_eq!(
//!     strong.range(),
//!     Some(SourceLocation::new(1, 1)..SourceLocation::new(1, 9))
//! );
//!
//! let paragraph = Paragraph::new([strong.into(), Text::new(" move").into()]);
//! assert_eq!(paragraph.plain_text(), "bold move");
//!
//! let document = Document::new([paragraph.into()]);
//! let first = document.child(0).unwrap();
//! assert_eq!(first.root_id(), document.root_id());
//! ```

pub mod data;
pub mod dump;
pub mod error;
pub mod identity;
pub mod kind;
pub mod markup;
pub mod nodes;
pub mod range;
pub mod raw;
pub mod visitor;

pub use data::MarkupData;
pub use dump::DumpOptions;
pub use error::MarkupError;
pub use identity::{NodeMetadata, RootId};
pub use kind::MarkupKind;
pub use markup::{Markup, MarkupChildren, PlainTextConvertible};
pub use nodes::{
    AnyMarkup, BlockMarkup, BlockQuote, CodeBlock, Document, Emphasis, EscapedCharacter, Heading,
    Highlight, Image, InlineCode, InlineMarkup, LineBreak, Link, ListItem, OrderedList, Paragraph,
    SoftBreak, Strikethrough, Strong, Text, ThematicBreak, UnorderedList,
};
pub use range::{SourceLocation, SourceRange, resolve_marker_range, union_range};
pub use raw::{Checkbox, RawNode, RawNodeData};
pub use visitor::{MarkupVisitor, descend, rewrite_children};
