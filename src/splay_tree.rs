use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::Error;
use crate::options::Access;
use crate::raw::{Handle, RawSplayTree};

mod capacity;
mod node_ref;
mod traversal;

pub use node_ref::NodeRef;
pub use traversal::Traversal;

/// An ordered dictionary from `i32` keys to payloads, kept as a [splay tree].
///
/// Every insertion moves the new entry to the root, and so does every search
/// made with [`Access::Splay`]. Recently used keys therefore sit near the top,
/// and any sequence of operations costs amortized O(log n) each, although a
/// single operation can take O(n).
///
/// Equal keys are allowed. A key equal to one already present is placed in that
/// node's left subtree, and lookups stop at the first match on the way down, so
/// which duplicate a lookup or removal hits depends on the tree's current shape.
///
/// Nodes live in an arena and refer to each other by index, so no operation
/// hands out pointers that a later rotation could invalidate.
///
/// # Concurrency
///
/// There is no internal locking. Methods that take `&self` (including
/// [`get`](SplayTree::get), [`node`](SplayTree::node) and the traversals) never
/// write to the tree, so any number of threads may call them at once. Inserting,
/// removing and splaying searches take `&mut self`.
///
/// # Examples
///
/// ```
/// use int_splay::{Access, SplayTree};
///
/// let mut tree = SplayTree::new();
/// for (key, name) in [(5, "five"), (3, "three"), (8, "eight")] {
///     tree.insert(key, name).unwrap();
/// }
///
/// // Inserting splays: the last key in is the root.
/// assert_eq!(tree.root().map(|node| node.key()), Some(8));
///
/// // A peeking lookup leaves the shape alone, a splaying one promotes the key.
/// assert_eq!(tree.get(3), Some(&"three"));
/// assert_eq!(tree.root().map(|node| node.key()), Some(8));
/// assert_eq!(tree.search(3, Access::Splay).map(|node| *node.payload()), Some("three"));
/// assert_eq!(tree.root().map(|node| node.key()), Some(3));
///
/// assert_eq!(tree.remove(5), Some("five"));
/// assert_eq!(tree.keys().collect::<Vec<_>>(), [3, 8]);
/// ```
///
/// [splay tree]: https://en.wikipedia.org/wiki/Splay_tree
pub struct SplayTree<V> {
    raw: RawSplayTree<V>,
}

impl<V> SplayTree<V> {
    /// Makes a new, empty `SplayTree` with no node ceiling.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, "a").unwrap();
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        SplayTree { raw: RawSplayTree::new() }
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every entry, dropping all payloads.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Inserts a new entry and splays it to the root, returning the number of
    /// entries afterwards.
    ///
    /// An existing entry with the same key is kept; both are stored.
    ///
    /// # Errors
    ///
    /// - [`Error::CapacityExhausted`] if the tree is at its node ceiling.
    /// - [`Error::AllocationFailed`] if the node cannot be allocated.
    ///
    /// Either way the tree is unchanged and `payload` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.insert(37, "a"), Ok(1));
    /// assert_eq!(tree.insert(37, "b"), Ok(2));
    /// assert_eq!(tree.root().map(|node| *node.payload()), Some("b"));
    /// ```
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    pub fn insert(&mut self, key: i32, payload: V) -> Result<usize, Error> {
        self.raw.insert(key, payload)
    }

    /// Looks up `key`, splaying the found node to the root when `access` is
    /// [`Access::Splay`].
    ///
    /// A miss never changes the tree.
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    pub fn search(&mut self, key: i32, access: Access) -> Option<NodeRef<'_, V>> {
        let handle = self.raw.search(key, access)?;
        Some(NodeRef::new(&self.raw, handle))
    }

    /// Looks up `key` and returns its payload, splaying the node to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 10).unwrap();
    /// tree.insert(2, 20).unwrap();
    ///
    /// if let Some(payload) = tree.splay_get(1) {
    ///     *payload += 1;
    /// }
    /// assert_eq!(tree.root().map(|node| *node.payload()), Some(11));
    /// ```
    pub fn splay_get(&mut self, key: i32) -> Option<&mut V> {
        let handle = self.raw.search(key, Access::Splay)?;
        Some(self.raw.node_mut(handle).payload_mut())
    }

    /// Returns the node for `key` without restructuring the tree.
    #[must_use]
    pub fn node(&self, key: i32) -> Option<NodeRef<'_, V>> {
        let handle = self.raw.find(key)?;
        Some(NodeRef::new(&self.raw, handle))
    }

    /// Returns the payload for `key` without restructuring the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, "a").unwrap();
    /// assert_eq!(tree.get(1), Some(&"a"));
    /// assert_eq!(tree.get(2), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: i32) -> Option<&V> {
        let handle = self.raw.find(key)?;
        Some(self.raw.node(handle).payload())
    }

    /// Returns the payload for `key` mutably without restructuring the tree.
    pub fn get_mut(&mut self, key: i32) -> Option<&mut V> {
        let handle = self.raw.find(key)?;
        Some(self.raw.node_mut(handle).payload_mut())
    }

    #[must_use]
    pub fn contains_key(&self, key: i32) -> bool {
        self.raw.find(key).is_some()
    }

    /// Returns the root node, if any.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, V>> {
        self.raw.root().map(|handle| NodeRef::new(&self.raw, handle))
    }

    /// Removes one entry for `key` and hands its payload back.
    ///
    /// The node is splayed to the root first; its two subtrees are then joined by
    /// splaying the largest key of the left one to the top, which becomes the new
    /// root. Without a left subtree the right one is the new root.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// for key in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(key, key * 100).unwrap();
    /// }
    /// assert_eq!(tree.remove(5), Some(500));
    /// assert_eq!(tree.remove(5), None);
    /// assert_eq!(tree.len(), 6);
    /// assert_eq!(tree.root().map(|node| node.key()), Some(4));
    /// ```
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    pub fn remove(&mut self, key: i32) -> Option<V> {
        self.raw.remove(key)
    }

    /// Removes one entry for `key`, dropping its payload. Returns whether an
    /// entry was found.
    pub fn delete(&mut self, key: i32) -> bool {
        self.remove(key).is_some()
    }

    /// Empties the tree and hands back every payload, in left-first
    /// breadth-first order of the tree as it stood.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailed`] if the result cannot be allocated; the tree is
    /// then left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, String::from("one")).unwrap();
    /// tree.insert(2, String::from("two")).unwrap();
    ///
    /// assert_eq!(tree.drain_payloads().unwrap(), ["two", "one"]);
    /// assert!(tree.is_empty());
    /// ```
    pub fn drain_payloads(&mut self) -> Result<Vec<V>, Error> {
        self.raw.drain_payloads()
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(3, "c").unwrap();
    /// tree.insert(2, "b").unwrap();
    /// tree.insert(1, "a").unwrap();
    ///
    /// let (first_key, first_payload) = tree.iter().next().unwrap();
    /// assert_eq!((first_key, *first_payload), (1, "a"));
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        let mut iter = Iter {
            tree: &self.raw,
            stack: SmallVec::new(),
            remaining: self.raw.len(),
        };
        iter.descend_left(self.raw.root());
        iter
    }

    /// Gets an iterator over the keys of the tree, in sorted order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the payloads of the tree, in key order.
    #[must_use]
    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }
}

impl<V: Clone> Clone for SplayTree<V> {
    fn clone(&self) -> Self {
        SplayTree { raw: self.raw.clone() }
    }
}

impl<V: fmt::Debug> fmt::Debug for SplayTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Default for SplayTree<V> {
    fn default() -> Self {
        SplayTree::new()
    }
}

impl<'a, V> IntoIterator for &'a SplayTree<V> {
    type Item = (i32, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

/// An iterator over the entries of a `SplayTree`, sorted by key.
///
/// This `struct` is created by the [`iter`] method on [`SplayTree`].
///
/// [`iter`]: SplayTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, V> {
    tree: &'a RawSplayTree<V>,
    // Ancestors whose left subtree is being visited.
    stack: SmallVec<[Handle; 32]>,
    remaining: usize,
}

impl<V> Iter<'_, V> {
    fn descend_left(&mut self, mut current: Option<Handle>) {
        while let Some(handle) = current {
            self.stack.push(handle);
            current = self.tree.node(handle).left();
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i32, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(handle);
        self.descend_left(node.right());
        self.remaining -= 1;
        Some((node.key(), node.payload()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<V> fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

/// An iterator over the keys of a `SplayTree`, in sorted order.
///
/// This `struct` is created by the [`keys`] method on [`SplayTree`].
///
/// [`keys`]: SplayTree::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<V> Iterator for Keys<'_, V> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

impl<V> FusedIterator for Keys<'_, V> {}

/// An iterator over the payloads of a `SplayTree`, in key order.
///
/// This `struct` is created by the [`values`] method on [`SplayTree`].
///
/// [`values`]: SplayTree::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, payload)| payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

impl<V> FusedIterator for Values<'_, V> {}
