use super::SplayTree;
use crate::raw::RawSplayTree;

impl<V> SplayTree<V> {
    /// Creates an empty tree that holds at most `max_nodes` nodes.
    ///
    /// Inserting into a full tree fails with
    /// [`Error::CapacityExhausted`](crate::Error::CapacityExhausted) and leaves it
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_splay::{Error, SplayTree};
    ///
    /// let mut tree = SplayTree::with_max_nodes(1);
    /// assert_eq!(tree.insert(1, ()), Ok(1));
    /// assert_eq!(tree.insert(2, ()), Err(Error::CapacityExhausted { max_nodes: 1 }));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub const fn with_max_nodes(max_nodes: usize) -> Self {
        SplayTree {
            raw: RawSplayTree::with_max_nodes(max_nodes),
        }
    }

    /// Returns the node ceiling. Defaults to `usize::MAX`.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn max_nodes(&self) -> usize {
        self.raw.max_nodes()
    }

    /// Changes the node ceiling. Lowering it below [`len`](SplayTree::len) keeps
    /// every existing node but rejects further inserts.
    pub fn set_max_nodes(&mut self, max_nodes: usize) {
        self.raw.set_max_nodes(max_nodes);
    }
}
