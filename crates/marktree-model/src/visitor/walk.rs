use crate::markup::Markup;
use crate::visitor::MarkupVisitor;

/// Visits every child of `markup` in document order.
///
/// Call from [`MarkupVisitor::default_visit`] (or any overridden `visit_*`
/// method) to walk the whole subtree pre-order.
pub fn descend<V>(visitor: &mut V, markup: &dyn Markup)
where
    V: MarkupVisitor<Result = ()>,
{
    for child in markup.children() {
        child.accept(visitor);
    }
}
