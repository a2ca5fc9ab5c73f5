use alloc::collections::TryReserveError;
use alloc::vec::Vec;
#[cfg(test)]
use core::cell::Cell;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::options::{Access, BreadthFirst};
use crate::Error;

/// The splay tree engine backing `SplayTree`.
#[derive(Clone)]
pub(crate) struct RawSplayTree<V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of live nodes reachable from `root`.
    len: usize,
    /// Ceiling on `len`.
    max_nodes: usize,
    #[cfg(test)]
    fail_next_buffer: Cell<bool>,
}

impl<V> RawSplayTree<V> {
    /// Creates a new, empty tree with no ceiling beyond what handles can address.
    pub(crate) const fn new() -> Self {
        Self::with_max_nodes(usize::MAX)
    }

    pub(crate) const fn with_max_nodes(max_nodes: usize) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            max_nodes,
            #[cfg(test)]
            fail_next_buffer: Cell::new(false),
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    pub(crate) fn set_max_nodes(&mut self, max_nodes: usize) {
        self.max_nodes = max_nodes;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<V> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<V> {
        self.nodes.get_mut(handle)
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Empties the tree, handing back every payload in left-first breadth-first
    /// order. On allocation failure the tree is left as it was.
    pub(crate) fn drain_payloads(&mut self) -> Result<Vec<V>, Error> {
        let order = self.breadth_first(BreadthFirst::LeftFirst, |handle| handle)?;
        let mut payloads = Vec::new();
        self.reserved(payloads.try_reserve_exact(order.len()))?;

        for handle in order {
            payloads.push(self.nodes.take(handle).into_payload());
        }
        self.clear();
        Ok(payloads)
    }

    /// Turns the outcome of reserving a traversal or drain buffer into the
    /// crate error, logging failures.
    pub(super) fn reserved(&self, result: Result<(), TryReserveError>) -> Result<(), Error> {
        #[cfg(test)]
        let result = if self.fail_next_buffer.take() {
            Err(super::arena::simulated_failure())
        } else {
            result
        };

        result.map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %err, len = self.len, "could not allocate traversal buffer");

            Error::from(err)
        })
    }

    // ─── Links ──────────────────────────────────────────────────────────────

    /// Hangs `child` under `parent` on `side`, fixing both ends of the link.
    fn attach(&mut self, parent: Handle, side: Side, child: Option<Handle>) {
        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(Some(parent));
        }
        self.nodes.get_mut(parent).set_child(side, child);
    }

    /// Detaches and returns the subtree under `parent` on `side`.
    fn cut(&mut self, parent: Handle, side: Side) -> Option<Handle> {
        let child = self.nodes.get(parent).child(side)?;
        self.nodes.get_mut(parent).set_child(side, None);
        self.nodes.get_mut(child).set_parent(None);
        Some(child)
    }

    fn set_root(&mut self, root: Option<Handle>) {
        if let Some(root) = root {
            self.nodes.get_mut(root).set_parent(None);
        }
        self.root = root;
    }

    fn side_in_parent(&self, child: Handle, parent: Handle) -> Side {
        self.nodes
            .get(parent)
            .side_of(child)
            .expect("`RawSplayTree::side_in_parent()` - parent and child links disagree!")
    }

    // ─── Rotation and splaying ──────────────────────────────────────────────

    /// Rotates at `node` towards `side`: the child on the opposite side (the
    /// pivot) takes `node`'s place and `node` becomes the pivot's `side` child.
    /// In-order sequence is preserved. The pivot must exist.
    fn rotate(&mut self, node: Handle, side: Side) {
        let pivot_side = side.opposite();
        let pivot = self
            .nodes
            .get(node)
            .child(pivot_side)
            .expect("`RawSplayTree::rotate()` - rotation without a pivot child!");
        let inner = self.nodes.get(pivot).child(side);
        let parent = self.nodes.get(node).parent();
        let node_side = parent.map(|parent| self.side_in_parent(node, parent));

        self.attach(node, pivot_side, inner);
        self.attach(pivot, side, Some(node));
        match (parent, node_side) {
            (Some(parent), Some(node_side)) => self.attach(parent, node_side, Some(pivot)),
            _ => self.set_root(Some(pivot)),
        }
    }

    /// Moves `node` one or two levels up with a zig, zig-zig or zig-zag step.
    /// Does nothing if `node` has no parent.
    pub(crate) fn splay_step(&mut self, node: Handle) {
        let Some(parent) = self.nodes.get(node).parent() else {
            return;
        };
        let node_side = self.side_in_parent(node, parent);

        match self.nodes.get(parent).parent() {
            // Zig: the parent is the root of its (sub)tree.
            None => self.rotate(parent, node_side.opposite()),
            Some(grandparent) => {
                let parent_side = self.side_in_parent(parent, grandparent);
                if node_side == parent_side {
                    // Zig-zig: lift the parent first, then the node.
                    self.rotate(grandparent, node_side.opposite());
                    self.rotate(parent, node_side.opposite());
                } else {
                    // Zig-zag: lift the node twice.
                    self.rotate(parent, node_side.opposite());
                    self.rotate(grandparent, parent_side.opposite());
                }
            }
        }
    }

    /// Splays `node` until it has no parent, i.e. it roots the tree (or the
    /// detached subtree it lives in).
    pub(crate) fn splay(&mut self, node: Handle) {
        while self.nodes.get(node).parent().is_some() {
            self.splay_step(node);
        }
    }

    /// Merges two detached subtrees where every key of `left` precedes every key
    /// of `right`, returning the new root.
    fn join(&mut self, left: Option<Handle>, right: Option<Handle>) -> Option<Handle> {
        let (left, right) = match (left, right) {
            (None, other) | (other, None) => return other,
            (Some(left), Some(right)) => (left, right),
        };

        // Splaying inside `left` rotates its top, so it has to be the root meanwhile.
        self.set_root(Some(left));
        let max = self.max_in(left);
        self.splay(max);
        self.attach(max, Side::Right, Some(right));

        #[cfg(feature = "tracing")]
        tracing::trace!(root = self.nodes.get(max).key(), "join: maximum of left subtree is the new root");

        Some(max)
    }

    fn max_in(&self, subtree: Handle) -> Handle {
        let mut current = subtree;
        while let Some(right) = self.nodes.get(current).right() {
            current = right;
        }
        current
    }

    // ─── Dictionary operations ──────────────────────────────────────────────

    /// Finds the first node with `key` met on the way down from the root.
    pub(crate) fn find(&self, key: i32) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(&node.key()) {
                core::cmp::Ordering::Less => node.left(),
                core::cmp::Ordering::Greater => node.right(),
                core::cmp::Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Finds `key`, splaying the hit to the root when `access` asks for it.
    pub(crate) fn search(&mut self, key: i32, access: Access) -> Option<Handle> {
        let found = self.find(key)?;
        if access == Access::Splay {
            self.splay(found);

            #[cfg(feature = "tracing")]
            tracing::trace!(key, "search: splayed to root");
        }
        Some(found)
    }

    /// Inserts a new binding and splays it to the root, returning the new length.
    ///
    /// Equal keys descend to the left, so duplicates accumulate in left subtrees.
    pub(crate) fn insert(&mut self, key: i32, payload: V) -> Result<usize, Error> {
        if self.len >= self.max_nodes {
            #[cfg(feature = "tracing")]
            tracing::debug!(key, max_nodes = self.max_nodes, "insert: tree is full");

            return Err(Error::CapacityExhausted {
                max_nodes: self.max_nodes,
            });
        }

        let handle = self.nodes.try_alloc(Node::new(key, payload))?;

        match self.root {
            None => self.set_root(Some(handle)),
            Some(root) => {
                let mut current = root;
                loop {
                    let node = self.nodes.get(current);
                    let side = if key <= node.key() { Side::Left } else { Side::Right };
                    match node.child(side) {
                        Some(next) => current = next,
                        None => {
                            self.attach(current, side, Some(handle));
                            break;
                        }
                    }
                }
                self.splay(handle);
            }
        }

        self.len += 1;
        debug_assert_eq!(self.nodes.len(), self.len);

        #[cfg(feature = "tracing")]
        tracing::trace!(key, len = self.len, "insert");

        Ok(self.len)
    }

    /// Removes the first binding for `key` met on the way down and returns its
    /// payload.
    pub(crate) fn remove(&mut self, key: i32) -> Option<V> {
        let target = self.find(key)?;
        self.splay(target);

        let left = self.cut(target, Side::Left);
        let right = self.cut(target, Side::Right);
        let root = self.join(left, right);
        self.set_root(root);
        self.len -= 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(key, len = self.len, "remove");

        Some(self.nodes.take(target).into_payload())
    }
}

#[cfg(test)]
impl<V> RawSplayTree<V> {
    /// Makes the next traversal or drain buffer reservation report an
    /// allocation failure.
    pub(crate) fn fail_next_buffer(&self) {
        self.fail_next_buffer.set(true);
    }
}
