//! Shared handle locating a raw node inside its owning tree.
//!
//! Nodes never point back at their parent. A [`MarkupData`] holds the tree's
//! root cell and the child-index path from that root; parent and sibling
//! queries re-walk the path from the root instead.

use std::sync::Arc;

use crate::identity::{NodeMetadata, RootId};
use crate::kind::MarkupKind;
use crate::range::SourceRange;
use crate::raw::RawNode;

#[derive(Debug)]
struct Tree {
    id: RootId,
    root: Arc<RawNode>,
}

/// A raw node together with its position in a materialized tree.
///
/// Cloning is cheap: the tree and the raw cell are reference counted.
#[derive(Debug, Clone)]
pub struct MarkupData {
    tree: Arc<Tree>,
    /// Child indices leading from the root to this node.
    path: Vec<usize>,
    raw: Arc<RawNode>,
}

impl MarkupData {
    /// Materialize `raw` as the root of a new tree with a fresh identity.
    pub(crate) fn new_root(raw: Arc<RawNode>) -> Self {
        let tree = Arc::new(Tree {
            id: RootId::new(),
            root: Arc::clone(&raw),
        });
        Self {
            tree,
            path: Vec::new(),
            raw,
        }
    }

    pub fn raw(&self) -> &Arc<RawNode> {
        &self.raw
    }

    pub fn kind(&self) -> MarkupKind {
        self.raw.kind()
    }

    pub fn range(&self) -> Option<&SourceRange> {
        self.raw.range()
    }

    pub fn root_id(&self) -> RootId {
        self.tree.id
    }

    pub fn index_in_parent(&self) -> usize {
        self.path.last().copied().unwrap_or(0)
    }

    pub fn metadata(&self) -> NodeMetadata {
        NodeMetadata {
            root_id: self.root_id(),
            index_in_parent: self.index_in_parent(),
        }
    }

    /// Number of ancestors between this node and the root.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn child_count(&self) -> usize {
        self.raw.child_count()
    }

    pub fn child(&self, index: usize) -> Option<Self> {
        let raw = Arc::clone(self.raw.children().get(index)?);
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(index);
        Some(Self {
            tree: Arc::clone(&self.tree),
            path,
            raw,
        })
    }

    pub fn parent(&self) -> Option<Self> {
        let (_, parent_path) = self.path.split_last()?;
        let raw = self.resolve(parent_path)?;
        Some(Self {
            tree: Arc::clone(&self.tree),
            path: parent_path.to_vec(),
            raw: Arc::clone(raw),
        })
    }

    pub fn root(&self) -> Self {
        Self {
            tree: Arc::clone(&self.tree),
            path: Vec::new(),
            raw: Arc::clone(&self.tree.root),
        }
    }

    pub fn previous_sibling(&self) -> Option<Self> {
        let index = self.index_in_parent().checked_sub(1)?;
        self.parent()?.child(index)
    }

    pub fn next_sibling(&self) -> Option<Self> {
        self.parent()?.child(self.index_in_parent() + 1)
    }

    /// True when both handles denote the same position in the same tree.
    pub fn is_identical_to(&self, other: &Self) -> bool {
        self.tree.id == other.tree.id && self.path == other.path
    }

    /// This node's cell as the root of a new tree.
    pub(crate) fn detached(&self) -> Self {
        Self::new_root(Arc::clone(&self.raw))
    }

    /// Replace this node's cell with `raw`, producing a new tree.
    ///
    /// Only the cells on the path from the root are rebuilt; every other
    /// subtree is shared with the original. The returned handle sits at the
    /// same path in the new tree.
    pub(crate) fn substitute(&self, raw: Arc<RawNode>) -> Self {
        let mut spine = Vec::with_capacity(self.path.len());
        let mut node = &self.tree.root;
        for &index in &self.path {
            spine.push(node);
            node = &node.children()[index];
        }

        let mut replacement = Arc::clone(&raw);
        for (ancestor, &index) in spine.iter().zip(&self.path).rev() {
            let mut children = ancestor.children().to_vec();
            children[index] = replacement;
            replacement = ancestor.with_children(children);
        }

        let tree = Arc::new(Tree {
            id: RootId::new(),
            root: replacement,
        });
        Self {
            tree,
            path: self.path.clone(),
            raw,
        }
    }

    fn resolve(&self, path: &[usize]) -> Option<&Arc<RawNode>> {
        path.iter()
            .try_fold(&self.tree.root, |node, &index| node.children().get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawNodeData;

    fn text(string: &str) -> Arc<RawNode> {
        RawNode::leaf(RawNodeData::Text(string.to_string()), None)
    }

    /// Document > Paragraph > [Text "a", Strong > [Text "b"], Text "c"]
    fn sample() -> MarkupData {
        let strong = RawNode::new(RawNodeData::Strong, None, vec![text("b")]);
        let paragraph = RawNode::new(
            RawNodeData::Paragraph,
            None,
            vec![text("a"), strong, text("c")],
        );
        let document = RawNode::new(RawNodeData::Document, None, vec![paragraph]);
        MarkupData::new_root(document)
    }

    #[test]
    fn children_carry_root_id_and_index() {
        let root = sample();
        let strong = root.child(0).and_then(|p| p.child(1)).unwrap();

        assert_eq!(strong.kind(), MarkupKind::Strong);
        assert_eq!(strong.root_id(), root.root_id());
        assert_eq!(strong.index_in_parent(), 1);
        assert_eq!(strong.depth(), 2);
    }

    #[test]
    fn parent_is_resolved_through_the_root() {
        let root = sample();
        let paragraph = root.child(0).unwrap();
        let strong = paragraph.child(1).unwrap();

        let parent = strong.parent().unwrap();
        assert!(parent.is_identical_to(&paragraph));
        assert!(root.parent().is_none());
        assert!(strong.root().is_identical_to(&root));
    }

    #[test]
    fn siblings() {
        let paragraph = sample().child(0).unwrap();
        let first = paragraph.child(0).unwrap();
        let last = paragraph.child(2).unwrap();

        assert!(first.previous_sibling().is_none());
        assert_eq!(first.next_sibling().unwrap().kind(), MarkupKind::Strong);
        assert!(last.next_sibling().is_none());
        assert_eq!(last.previous_sibling().unwrap().index_in_parent(), 1);
    }

    #[test]
    fn substitute_shares_untouched_siblings() {
        let root = sample();
        let paragraph = root.child(0).unwrap();
        let strong = paragraph.child(1).unwrap();

        let edited = strong.substitute(text("replaced"));

        assert_ne!(edited.root_id(), root.root_id());
        assert_eq!(edited.index_in_parent(), 1);
        let new_paragraph = edited.parent().unwrap();
        assert!(Arc::ptr_eq(
            &new_paragraph.raw().children()[0],
            &paragraph.raw().children()[0]
        ));
        assert_eq!(
            new_paragraph.raw().children()[1].data(),
            &RawNodeData::Text("replaced".to_string())
        );
        // The original tree is untouched.
        assert_eq!(
            root.child(0).unwrap().child(1).unwrap().kind(),
            MarkupKind::Strong
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn trees_are_shareable_across_threads() {
        assert_send_sync::<MarkupData>();
        assert_send_sync::<RawNode>();
        assert_send_sync::<crate::nodes::Document>();
        assert_send_sync::<crate::nodes::AnyMarkup>();
        assert_send_sync::<crate::nodes::InlineMarkup>();
        assert_send_sync::<crate::nodes::BlockMarkup>();
    }

    #[test]
    fn detached_gets_fresh_root() {
        let strong = sample().child(0).unwrap().child(1).unwrap();
        let detached = strong.detached();

        assert_ne!(detached.root_id(), strong.root_id());
        assert!(detached.parent().is_none());
        assert!(Arc::ptr_eq(detached.raw(), strong.raw()));
    }
}
