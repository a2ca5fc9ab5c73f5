use alloc::collections::VecDeque;
use alloc::vec::Vec;

use smallvec::SmallVec;

use super::handle::Handle;
use super::raw_splay_tree::RawSplayTree;
use crate::Error;
use crate::options::{BreadthFirst, DepthFirst};

/// Pending work for the depth-first walk.
enum Frame {
    /// Schedule this subtree according to the walk order.
    Expand(Handle),
    /// Emit this node now.
    Visit(Handle),
}

impl<V> RawSplayTree<V> {
    /// Walks the tree depth-first in `order`, collecting `emit(node)` for every
    /// node into a buffer of exactly `len()` elements.
    ///
    /// The walk keeps its own stack, so a path-shaped tree costs heap rather than
    /// call-stack depth.
    pub(crate) fn depth_first<T>(&self, order: DepthFirst, mut emit: impl FnMut(Handle) -> T) -> Result<Vec<T>, Error> {
        let mut out = Vec::new();
        self.reserved(out.try_reserve_exact(self.len()))?;

        let mut stack: SmallVec<[Frame; 32]> = SmallVec::new();
        stack.extend(self.root().map(Frame::Expand));

        while let Some(frame) = stack.pop() {
            let handle = match frame {
                Frame::Visit(handle) => {
                    out.push(emit(handle));
                    continue;
                }
                Frame::Expand(handle) => handle,
            };

            // Frames are popped in reverse of the order they are pushed.
            let node = self.node(handle);
            let left = node.left().map(Frame::Expand);
            let right = node.right().map(Frame::Expand);
            match order {
                DepthFirst::PreOrder => {
                    stack.extend(right);
                    stack.extend(left);
                    stack.push(Frame::Visit(handle));
                }
                DepthFirst::InOrder => {
                    stack.extend(right);
                    stack.push(Frame::Visit(handle));
                    stack.extend(left);
                }
                DepthFirst::PostOrder => {
                    stack.push(Frame::Visit(handle));
                    stack.extend(right);
                    stack.extend(left);
                }
            }
        }

        debug_assert_eq!(out.len(), self.len());
        Ok(out)
    }

    /// Walks the tree level by level, enqueueing children in `direction` order,
    /// collecting `emit(node)` for every node into a buffer of exactly `len()`
    /// elements.
    pub(crate) fn breadth_first<T>(
        &self,
        direction: BreadthFirst,
        mut emit: impl FnMut(Handle) -> T,
    ) -> Result<Vec<T>, Error> {
        let mut out = Vec::new();
        self.reserved(out.try_reserve_exact(self.len()))?;
        // No more than `len()` nodes are ever queued.
        let mut queue = VecDeque::new();
        self.reserved(queue.try_reserve_exact(self.len()))?;
        queue.extend(self.root());

        while let Some(handle) = queue.pop_front() {
            out.push(emit(handle));

            let node = self.node(handle);
            let (first, second) = match direction {
                BreadthFirst::LeftFirst => (node.left(), node.right()),
                BreadthFirst::RightFirst => (node.right(), node.left()),
            };
            queue.extend(first);
            queue.extend(second);
        }

        debug_assert_eq!(out.len(), self.len());
        Ok(out)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    /// Inserting 1, 3, 2, 7, 6, 4 splays into
    /// ```text
    ///         4
    ///        / \
    ///       3   6
    ///      /     \
    ///     2       7
    ///    /
    ///   1
    /// ```
    fn sample() -> RawSplayTree<()> {
        let mut tree = RawSplayTree::new();
        for key in [1, 3, 2, 7, 6, 4] {
            tree.insert(key, ()).unwrap();
        }
        tree
    }

    fn keys(tree: &RawSplayTree<()>, order: DepthFirst) -> Vec<i32> {
        tree.depth_first(order, |h| tree.node(h).key()).unwrap()
    }

    #[test]
    fn sample_has_expected_shape() {
        let tree = sample();
        assert_eq!(
            tree.breadth_first(BreadthFirst::LeftFirst, |h| tree.node(h).key()).unwrap(),
            vec![4, 3, 6, 2, 7, 1]
        );
    }

    #[test]
    fn depth_first_orders() {
        let tree = sample();
        assert_eq!(keys(&tree, DepthFirst::PreOrder), vec![4, 3, 2, 1, 6, 7]);
        assert_eq!(keys(&tree, DepthFirst::InOrder), vec![1, 2, 3, 4, 6, 7]);
        assert_eq!(keys(&tree, DepthFirst::PostOrder), vec![1, 2, 3, 7, 6, 4]);
    }

    #[test]
    fn breadth_first_right_first_mirrors_siblings() {
        let tree = sample();
        assert_eq!(
            tree.breadth_first(BreadthFirst::RightFirst, |h| tree.node(h).key()).unwrap(),
            vec![4, 6, 3, 7, 2, 1]
        );
    }

    #[test]
    fn empty_tree_yields_empty_buffers() {
        let tree: RawSplayTree<()> = RawSplayTree::new();
        assert!(keys(&tree, DepthFirst::InOrder).is_empty());
        assert!(tree.breadth_first(BreadthFirst::LeftFirst, |h| h).unwrap().is_empty());
    }
}
