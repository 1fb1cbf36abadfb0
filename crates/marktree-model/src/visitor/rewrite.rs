use std::sync::Arc;

use crate::data::MarkupData;
use crate::markup::Markup;
use crate::nodes::AnyMarkup;
use crate::visitor::MarkupVisitor;

/// Rebuilds `markup` from the results of visiting each of its children.
///
/// Children for which the visitor returns `None` are dropped, as are
/// replacements the container cannot hold (see
/// [`MarkupKind::accepts_child`](crate::MarkupKind::accepts_child)). When every
/// child comes back unchanged the original node is returned, so untouched
/// subtrees stay shared; otherwise the result is a new tree.
pub fn rewrite_children<V>(visitor: &mut V, markup: &dyn Markup) -> Option<AnyMarkup>
where
    V: MarkupVisitor<Result = Option<AnyMarkup>>,
{
    let original = markup.data().raw();
    let kind = original.kind();
    let mut changed = false;
    let mut children = Vec::with_capacity(original.child_count());

    for (child, before) in markup.children().zip(original.children()) {
        match child.accept(visitor) {
            Some(rewritten) if !kind.accepts_child(rewritten.kind()) => {
                log::debug!("dropping {} rewritten into {kind}", rewritten.kind());
                changed = true;
            }
            Some(rewritten) => {
                let raw = rewritten.data().raw();
                changed |= !Arc::ptr_eq(raw, before);
                children.push(Arc::clone(raw));
            }
            None => changed = true,
        }
    }

    if !changed {
        return Some(AnyMarkup::from_data(markup.data().clone()));
    }
    log::debug!("rebuilding {} with rewritten children", markup.kind());
    Some(AnyMarkup::from_data(MarkupData::new_root(
        original.with_children(children),
    )))
}
