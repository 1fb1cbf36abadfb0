//! Double-dispatch traversal over typed nodes.
//!
//! # Overview
//!
//! - [`MarkupVisitor`] - one `visit_*` method per kind, each defaulting to
//!   [`default_visit`](MarkupVisitor::default_visit)
//! - [`descend`] - walker behaviour: visit every child in order
//! - [`rewrite_children`] - rewriter behaviour: rebuild a node from its
//!   rewritten children
//!
//! A node's [`accept`](crate::Markup::accept) calls exactly one visitor
//! method, the one matching its kind. Whether and in which order children are
//! visited is up to the visitor.
//!
//! # Examples
//!
//! ## Counting nodes
//!
//! ```
//! use marktree_model::visitor::{MarkupVisitor, descend};
//! use marktree_model::{Markup, Paragraph, Strong, Text};
//!
//! #[derive(Default)]
//! struct Counter {
//!     nodes: usize,
//! }
//!
//! impl MarkupVisitor for Counter {
//!     type Result = ();
//!
//!     fn default_visit(&mut self, markup: &dyn Markup) {
//!         self.nodes += 1;
//!         descend(self, markup);
//!     }
//! }
//!
//! let paragraph = Paragraph::new([
//!     Text::new("a ").into(),
//!     Strong::new([Text::new("b").into()]).into(),
//! ]);
//! let mut counter = Counter::default();
//! paragraph.accept(&mut counter);
//! assert_eq!(counter.nodes, 4);
//! ```

mod rewrite;
mod walk;

pub use rewrite::rewrite_children;
pub use walk::descend;

use crate::markup::Markup;
use crate::nodes::{
    BlockQuote, CodeBlock, Document, Emphasis, EscapedCharacter, Heading, Highlight, Image,
    InlineCode, LineBreak, Link, ListItem, OrderedList, Paragraph, SoftBreak, Strikethrough,
    Strong, Text, ThematicBreak, UnorderedList,
};

/// Behaviour per node kind, with a fallback for every kind not overridden.
///
/// Adding a node kind adds a `visit_*` method here with a default body, so
/// existing implementations keep compiling and route the new kind to
/// `default_visit`.
pub trait MarkupVisitor {
    type Result;

    /// Called for every kind whose `visit_*` method is not overridden.
    fn default_visit(&mut self, markup: &dyn Markup) -> Self::Result;

    fn visit_document(&mut self, document: &Document) -> Self::Result {
        self.default_visit(document)
    }

    fn visit_block_quote(&mut self, block_quote: &BlockQuote) -> Self::Result {
        self.default_visit(block_quote)
    }

    fn visit_paragraph(&mut self, paragraph: &Paragraph) -> Self::Result {
        self.default_visit(paragraph)
    }

    fn visit_heading(&mut self, heading: &Heading) -> Self::Result {
        self.default_visit(heading)
    }

    fn visit_unordered_list(&mut self, unordered_list: &UnorderedList) -> Self::Result {
        self.default_visit(unordered_list)
    }

    fn visit_ordered_list(&mut self, ordered_list: &OrderedList) -> Self::Result {
        self.default_visit(ordered_list)
    }

    fn visit_list_item(&mut self, list_item: &ListItem) -> Self::Result {
        self.default_visit(list_item)
    }

    fn visit_code_block(&mut self, code_block: &CodeBlock) -> Self::Result {
        self.default_visit(code_block)
    }

    fn visit_thematic_break(&mut self, thematic_break: &ThematicBreak) -> Self::Result {
        self.default_visit(thematic_break)
    }

    fn visit_text(&mut self, text: &Text) -> Self::Result {
        self.default_visit(text)
    }

    fn visit_soft_break(&mut self, soft_break: &SoftBreak) -> Self::Result {
        self.default_visit(soft_break)
    }

    fn visit_line_break(&mut self, line_break: &LineBreak) -> Self::Result {
        self.default_visit(line_break)
    }

    fn visit_inline_code(&mut self, inline_code: &InlineCode) -> Self::Result {
        self.default_visit(inline_code)
    }

    fn visit_emphasis(&mut self, emphasis: &Emphasis) -> Self::Result {
        self.default_visit(emphasis)
    }

    fn visit_strong(&mut self, strong: &Strong) -> Self::Result {
        self.default_visit(strong)
    }

    fn visit_strikethrough(&mut self, strikethrough: &Strikethrough) -> Self::Result {
        self.default_visit(strikethrough)
    }

    fn visit_link(&mut self, link: &Link) -> Self::Result {
        self.default_visit(link)
    }

    fn visit_image(&mut self, image: &Image) -> Self::Result {
        self.default_visit(image)
    }

    fn visit_highlight(&mut self, highlight: &Highlight) -> Self::Result {
        self.default_visit(highlight)
    }

    fn visit_escaped_character(&mut self, escaped_character: &EscapedCharacter) -> Self::Result {
        self.default_visit(escaped_character)
    }
}
