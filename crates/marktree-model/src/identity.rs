//! Root identities and per-node position metadata.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique root IDs.
static NEXT_ROOT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of one materialized tree.
///
/// Every standalone tree (a freshly constructed node, a detached node, or the
/// result of an edit) gets its own ID. IDs are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RootId(u64);

impl RootId {
    /// Allocate a new unique root ID.
    pub fn new() -> Self {
        let id = Self(NEXT_ROOT_ID.fetch_add(1, Ordering::Relaxed));
        log::trace!("allocated root id {id}");
        id
    }

    /// Get the raw ID value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for RootId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a node sits: which tree, and at which index among its siblings.
///
/// Roots report index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeMetadata {
    pub root_id: RootId,
    pub index_in_parent: usize,
}
