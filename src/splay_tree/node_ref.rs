use core::fmt;

use crate::raw::{Handle, RawSplayTree};

/// A borrowed view of one node of a [`SplayTree`](crate::SplayTree).
///
/// Valid until the next mutating call on the tree, which the borrow checker
/// enforces. Two `NodeRef`s compare equal when they point at the same node.
///
/// # Examples
///
/// ```
/// use int_splay::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(5, 'a').unwrap();
/// tree.insert(3, 'b').unwrap();
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.key(), 3);
/// let right = root.right().unwrap();
/// assert_eq!((right.key(), *right.payload()), (5, 'a'));
/// assert_eq!(right.parent(), Some(root));
/// ```
pub struct NodeRef<'a, V> {
    tree: &'a RawSplayTree<V>,
    handle: Handle,
}

impl<'a, V> NodeRef<'a, V> {
    pub(crate) const fn new(tree: &'a RawSplayTree<V>, handle: Handle) -> Self {
        Self { tree, handle }
    }

    fn at(&self, handle: Option<Handle>) -> Option<Self> {
        handle.map(|handle| Self::new(self.tree, handle))
    }

    /// Returns the node's key.
    #[must_use]
    pub fn key(&self) -> i32 {
        self.tree.node(self.handle).key()
    }

    /// Returns the node's payload.
    #[must_use]
    pub fn payload(&self) -> &'a V {
        self.tree.node(self.handle).payload()
    }

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.at(self.tree.node(self.handle).parent())
    }

    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.at(self.tree.node(self.handle).left())
    }

    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.at(self.tree.node(self.handle).right())
    }

    /// Returns `true` if this node is the tree's root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tree.root() == Some(self.handle)
    }
}

impl<V> Clone for NodeRef<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for NodeRef<'_, V> {}

impl<V> PartialEq for NodeRef<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.handle == other.handle
    }
}

impl<V> Eq for NodeRef<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for NodeRef<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef").field("key", &self.key()).field("payload", self.payload()).finish()
    }
}
