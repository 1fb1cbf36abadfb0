use thiserror::Error;

use crate::kind::MarkupKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// A node was reinterpreted as a kind (or category) it does not have.
    ///
    /// Only [`TryFrom`] conversions out of [`AnyMarkup`](crate::AnyMarkup)
    /// produce this; it indicates a caller bug rather than bad input.
    #[error("cannot reinterpret {found} node as {expected}")]
    KindMismatch {
        expected: &'static str,
        found: MarkupKind,
    },
}
