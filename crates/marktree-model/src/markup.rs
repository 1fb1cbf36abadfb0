//! The `Markup` trait shared by every typed node.

use crate::data::MarkupData;
use crate::dump::{self, DumpOptions};
use crate::identity::RootId;
use crate::kind::MarkupKind;
use crate::nodes::AnyMarkup;
use crate::range::SourceRange;
use crate::visitor::MarkupVisitor;

/// Behaviour common to all typed nodes.
///
/// Everything except [`accept`](Markup::accept) is available on `dyn Markup`,
/// which is what [`MarkupVisitor::default_visit`] receives.
pub trait Markup {
    /// The underlying handle: raw cell plus position in its tree.
    fn data(&self) -> &MarkupData;

    /// Calls the `visit_*` method of `visitor` that matches this node's kind.
    fn accept<V: MarkupVisitor>(&self, visitor: &mut V) -> V::Result
    where
        Self: Sized;

    fn kind(&self) -> MarkupKind {
        self.data().kind()
    }

    /// Provenance range, or `None` for synthetically built nodes.
    fn range(&self) -> Option<SourceRange> {
        self.data().range().cloned()
    }

    fn child_count(&self) -> usize {
        self.data().child_count()
    }

    fn child(&self, index: usize) -> Option<AnyMarkup> {
        self.data().child(index).map(AnyMarkup::from_data)
    }

    fn children(&self) -> MarkupChildren<'_> {
        MarkupChildren {
            parent: self.data(),
            next: 0,
        }
    }

    fn parent(&self) -> Option<AnyMarkup> {
        self.data().parent().map(AnyMarkup::from_data)
    }

    fn root(&self) -> AnyMarkup {
        AnyMarkup::from_data(self.data().root())
    }

    fn root_id(&self) -> RootId {
        self.data().root_id()
    }

    fn index_in_parent(&self) -> usize {
        self.data().index_in_parent()
    }

    fn previous_sibling(&self) -> Option<AnyMarkup> {
        self.data().previous_sibling().map(AnyMarkup::from_data)
    }

    fn next_sibling(&self) -> Option<AnyMarkup> {
        self.data().next_sibling().map(AnyMarkup::from_data)
    }

    /// Same position in the same tree.
    fn is_identical_to(&self, other: &dyn Markup) -> bool {
        self.data().is_identical_to(other.data())
    }

    /// Same kinds, payloads and children, regardless of ranges and identity.
    fn has_same_structure(&self, other: &dyn Markup) -> bool {
        self.data().raw().has_same_structure(other.data().raw())
    }

    /// Box-drawing dump of this subtree.
    fn debug_description(&self, options: &DumpOptions) -> String {
        dump::debug_description(self.data(), options)
    }
}

/// Iterator over a node's children in document order.
#[derive(Debug, Clone)]
pub struct MarkupChildren<'a> {
    parent: &'a MarkupData,
    next: usize,
}

impl Iterator for MarkupChildren<'_> {
    type Item = AnyMarkup;

    fn next(&mut self) -> Option<Self::Item> {
        let child = self.parent.child(self.next)?;
        self.next += 1;
        Some(AnyMarkup::from_data(child))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.parent.child_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MarkupChildren<'_> {}

/// Nodes with a plain-text projection.
pub trait PlainTextConvertible {
    /// Concatenated text of this node's inline content, markup removed.
    fn plain_text(&self) -> String;
}
