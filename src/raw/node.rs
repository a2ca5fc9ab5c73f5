use super::handle::Handle;

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single key/payload binding and its links.
///
/// `parent` is a back-reference only; a node owns the subtrees under `left` and
/// `right`. Keys in the left subtree are `<=` this key, keys in the right subtree
/// are `>`.
#[derive(Clone)]
pub(crate) struct Node<V> {
    key: i32,
    payload: V,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<V> Node<V> {
    /// Creates a detached node.
    pub(crate) const fn new(key: i32, payload: V) -> Self {
        Self {
            key,
            payload,
            parent: None,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> i32 {
        self.key
    }

    #[inline]
    pub(crate) const fn payload(&self) -> &V {
        &self.payload
    }

    #[inline]
    pub(crate) fn payload_mut(&mut self) -> &mut V {
        &mut self.payload
    }

    pub(crate) fn into_payload(self) -> V {
        self.payload
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Returns which side `child` hangs on, if it is a child of this node at all.
    pub(crate) fn side_of(&self, child: Handle) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }

    // The setters below touch one side of a link only; `RawSplayTree::attach`
    // keeps both sides in agreement.

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
