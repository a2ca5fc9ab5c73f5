//! Per-call options for searches and traversals.
//!
//! Each choice is a plain enum, so a call always names exactly one order, one
//! direction or one output kind. Integrators migrating from bit-flag option
//! words can convert with `TryFrom<u32>`; the accepted values are the constants
//! in [`flags`].

use crate::Error;

/// Legacy option bits accepted by the `TryFrom<u32>` conversions.
pub mod flags {
    /// Drop payloads along with their nodes. A removal with this bit is
    /// [`SplayTree::delete`](crate::SplayTree::delete); one without it is
    /// [`SplayTree::remove`](crate::SplayTree::remove), which hands the payload back.
    pub const DELETE_FREE_DATA: u32 = 0x1;
    /// Splay the node a search finds. A search word without it only peeks.
    pub const SEARCH_SPLAY: u32 = 0x2;
    /// Emit payloads.
    pub const SEARCH_DATA: u32 = 0x4;
    /// Emit keys.
    pub const SEARCH_KEYS: u32 = 0x8;
    /// Emit node references.
    pub const SEARCH_NODES: u32 = 0x10;
    /// Depth-first, node before its subtrees.
    pub const DFS_PRE_ORDER: u32 = 0x20;
    /// Depth-first, node between its subtrees.
    pub const DFS_IN_ORDER: u32 = 0x40;
    /// Depth-first, node after its subtrees.
    pub const DFS_POST_ORDER: u32 = 0x80;
    /// Breadth-first, left child enqueued first.
    pub const BFS_LEFT_FIRST: u32 = 0x100;
    /// Breadth-first, right child enqueued first.
    pub const BFS_RIGHT_FIRST: u32 = 0x200;
}

/// Whether a search may restructure the tree.
///
/// # Examples
///
/// ```
/// use int_splay::{Access, SplayTree};
///
/// let mut tree = SplayTree::new();
/// tree.insert(1, "one").unwrap();
/// tree.insert(2, "two").unwrap();
///
/// assert_eq!(tree.search(1, Access::Peek).map(|node| node.is_root()), Some(false));
/// assert_eq!(tree.search(1, Access::Splay).map(|node| node.is_root()), Some(true));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Access {
    /// Splay the found node to the root.
    #[default]
    Splay,
    /// Read-only lookup; never writes to the tree.
    Peek,
}

/// Depth-first visiting order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum DepthFirst {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, node, right subtree: ascending key order.
    #[default]
    InOrder,
    /// Left subtree, right subtree, then node.
    PostOrder,
}

/// Which child a breadth-first walk enqueues first, fixing sibling order within
/// each level.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum BreadthFirst {
    #[default]
    LeftFirst,
    RightFirst,
}

/// What a traversal emits for each node.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Emit {
    #[default]
    Keys,
    Payloads,
    Nodes,
}

/// Maps a word with exactly one of `choices` set, and nothing else, to its value.
fn single_flag<T: Copy>(bits: u32, choices: &[(u32, T)]) -> Result<T, Error> {
    choices
        .iter()
        .find(|&&(flag, _)| bits == flag)
        .map(|&(_, value)| value)
        .ok_or(Error::InvalidOptions(bits))
}

impl TryFrom<u32> for Access {
    type Error = Error;

    /// `SEARCH_SPLAY` splays; a zero word peeks.
    fn try_from(bits: u32) -> Result<Self, Error> {
        single_flag(bits, &[(flags::SEARCH_SPLAY, Access::Splay), (0, Access::Peek)])
    }
}

impl TryFrom<u32> for DepthFirst {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Error> {
        single_flag(
            bits,
            &[
                (flags::DFS_PRE_ORDER, DepthFirst::PreOrder),
                (flags::DFS_IN_ORDER, DepthFirst::InOrder),
                (flags::DFS_POST_ORDER, DepthFirst::PostOrder),
            ],
        )
    }
}

impl TryFrom<u32> for BreadthFirst {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Error> {
        single_flag(
            bits,
            &[
                (flags::BFS_LEFT_FIRST, BreadthFirst::LeftFirst),
                (flags::BFS_RIGHT_FIRST, BreadthFirst::RightFirst),
            ],
        )
    }
}

impl TryFrom<u32> for Emit {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Error> {
        single_flag(
            bits,
            &[
                (flags::SEARCH_KEYS, Emit::Keys),
                (flags::SEARCH_DATA, Emit::Payloads),
                (flags::SEARCH_NODES, Emit::Nodes),
            ],
        )
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn single_bits_convert() {
        assert_eq!(DepthFirst::try_from(flags::DFS_POST_ORDER), Ok(DepthFirst::PostOrder));
        assert_eq!(BreadthFirst::try_from(flags::BFS_RIGHT_FIRST), Ok(BreadthFirst::RightFirst));
        assert_eq!(Emit::try_from(flags::SEARCH_DATA), Ok(Emit::Payloads));
    }

    #[test]
    fn search_word_selects_access() {
        assert_eq!(Access::try_from(flags::SEARCH_SPLAY), Ok(Access::Splay));
        assert_eq!(Access::try_from(0), Ok(Access::Peek));

        let mixed = flags::SEARCH_SPLAY | flags::SEARCH_KEYS;
        assert_eq!(Access::try_from(mixed), Err(Error::InvalidOptions(mixed)));
        assert_eq!(Access::try_from(flags::DELETE_FREE_DATA), Err(Error::InvalidOptions(flags::DELETE_FREE_DATA)));
    }

    #[test]
    fn legacy_bits_do_not_overlap() {
        let all = [
            flags::DELETE_FREE_DATA,
            flags::SEARCH_SPLAY,
            flags::SEARCH_DATA,
            flags::SEARCH_KEYS,
            flags::SEARCH_NODES,
            flags::DFS_PRE_ORDER,
            flags::DFS_IN_ORDER,
            flags::DFS_POST_ORDER,
            flags::BFS_LEFT_FIRST,
            flags::BFS_RIGHT_FIRST,
        ];
        let combined = all.iter().fold(0, |acc, &bit| {
            assert_eq!(bit.count_ones(), 1);
            assert_eq!(acc & bit, 0);
            acc | bit
        });
        assert_eq!(combined, 0x3FF);
    }

    #[test]
    fn ambiguous_or_empty_words_are_rejected() {
        let both = flags::DFS_PRE_ORDER | flags::DFS_IN_ORDER;
        assert_eq!(DepthFirst::try_from(both), Err(Error::InvalidOptions(both)));
        assert_eq!(BreadthFirst::try_from(0), Err(Error::InvalidOptions(0)));
        assert_eq!(Emit::try_from(flags::DFS_IN_ORDER), Err(Error::InvalidOptions(flags::DFS_IN_ORDER)));
    }
}
