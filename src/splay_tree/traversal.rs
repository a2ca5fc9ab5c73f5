use alloc::vec::Vec;

use super::{NodeRef, SplayTree};
use crate::Error;
use crate::options::{BreadthFirst, DepthFirst, Emit};

/// The output buffer of a traversal, owned by the caller.
///
/// Exactly one variant is produced per call, chosen by [`Emit`], and it always
/// holds one element per node of the tree.
#[derive(Debug)]
pub enum Traversal<'a, V> {
    Keys(Vec<i32>),
    Payloads(Vec<&'a V>),
    Nodes(Vec<NodeRef<'a, V>>),
}

impl<'a, V> Traversal<'a, V> {
    /// Returns the number of emitted elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Traversal::Keys(keys) => keys.len(),
            Traversal::Payloads(payloads) => payloads.len(),
            Traversal::Nodes(nodes) => nodes.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the keys if this traversal emitted keys.
    #[must_use]
    pub fn into_keys(self) -> Option<Vec<i32>> {
        match self {
            Traversal::Keys(keys) => Some(keys),
            _ => None,
        }
    }

    /// Returns the payloads if this traversal emitted payloads.
    #[must_use]
    pub fn into_payloads(self) -> Option<Vec<&'a V>> {
        match self {
            Traversal::Payloads(payloads) => Some(payloads),
            _ => None,
        }
    }

    /// Returns the node references if this traversal emitted nodes.
    #[must_use]
    pub fn into_nodes(self) -> Option<Vec<NodeRef<'a, V>>> {
        match self {
            Traversal::Nodes(nodes) => Some(nodes),
            _ => None,
        }
    }
}

impl<V> SplayTree<V> {
    /// Visits every node depth-first in `order` and returns what `emit` selects,
    /// in visiting order.
    ///
    /// Returns `Ok(None)` for an empty tree. Never restructures the tree.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailed`] if the output buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_splay::{DepthFirst, Emit, SplayTree};
    ///
    /// let mut tree = SplayTree::new();
    /// for key in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(key, ()).unwrap();
    /// }
    ///
    /// let keys = tree.depth_first(DepthFirst::InOrder, Emit::Keys).unwrap().unwrap();
    /// assert_eq!(keys.into_keys(), Some(vec![1, 3, 4, 5, 7, 8, 9]));
    ///
    /// let empty: SplayTree<()> = SplayTree::new();
    /// assert!(empty.depth_first(DepthFirst::PreOrder, Emit::Nodes).unwrap().is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn depth_first(&self, order: DepthFirst, emit: Emit) -> Result<Option<Traversal<'_, V>>, Error> {
        if self.raw.is_empty() {
            return Ok(None);
        }

        let raw = &self.raw;
        let traversal = match emit {
            Emit::Keys => Traversal::Keys(raw.depth_first(order, move |h| raw.node(h).key())?),
            Emit::Payloads => Traversal::Payloads(raw.depth_first(order, move |h| raw.node(h).payload())?),
            Emit::Nodes => Traversal::Nodes(raw.depth_first(order, move |h| NodeRef::new(raw, h))?),
        };
        Ok(Some(traversal))
    }

    /// Visits every node level by level, enqueueing children in `direction`
    /// order, and returns what `emit` selects in visiting order.
    ///
    /// Returns `Ok(None)` for an empty tree. Never restructures the tree.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailed`] if the output buffer or the work queue cannot
    /// be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_splay::{BreadthFirst, Emit, SplayTree};
    ///
    /// let mut tree = SplayTree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key, key * 10).unwrap();
    /// }
    /// // 3 was splayed last: 3 at the root, then 2, then 1.
    /// let levels = tree.breadth_first(BreadthFirst::RightFirst, Emit::Payloads).unwrap().unwrap();
    /// assert_eq!(levels.into_payloads(), Some(vec![&30, &20, &10]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn breadth_first(&self, direction: BreadthFirst, emit: Emit) -> Result<Option<Traversal<'_, V>>, Error> {
        if self.raw.is_empty() {
            return Ok(None);
        }

        let raw = &self.raw;
        let traversal = match emit {
            Emit::Keys => Traversal::Keys(raw.breadth_first(direction, move |h| raw.node(h).key())?),
            Emit::Payloads => Traversal::Payloads(raw.breadth_first(direction, move |h| raw.node(h).payload())?),
            Emit::Nodes => Traversal::Nodes(raw.breadth_first(direction, move |h| NodeRef::new(raw, h))?),
        };
        Ok(Some(traversal))
    }
}
