//! An integer-keyed splay tree for Rust.
//!
//! This crate provides [`SplayTree`], an ordered dictionary from `i32` keys to
//! arbitrary payloads that restructures itself on access: inserted entries, and
//! entries found by a splaying search, are rotated up to the root. Keys used
//! often or recently stay cheap to reach.
//!
//! # Example
//!
//! ```
//! use int_splay::{Access, BreadthFirst, DepthFirst, Emit, SplayTree};
//!
//! let mut tree = SplayTree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, key.to_string()).unwrap();
//! }
//!
//! // The last insert sits at the root.
//! assert_eq!(tree.root().unwrap().key(), 9);
//!
//! // Peek without restructuring, or splay to promote the entry.
//! assert_eq!(tree.get(4).map(String::as_str), Some("4"));
//! assert!(tree.search(4, Access::Splay).unwrap().is_root());
//!
//! // Removal joins the two subtrees under the largest smaller key.
//! assert!(tree.delete(5));
//! let keys = tree.depth_first(DepthFirst::InOrder, Emit::Keys).unwrap().unwrap();
//! assert_eq!(keys.into_keys(), Some(vec![1, 3, 4, 7, 8, 9]));
//!
//! // Level-order output has one element per node.
//! let levels = tree.breadth_first(BreadthFirst::LeftFirst, Emit::Nodes).unwrap().unwrap();
//! assert_eq!(levels.len(), tree.len());
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Fallible allocation** - Running out of memory is reported as [`Error::AllocationFailed`]
//!   and leaves the tree as it was
//! - **`tracing`** (optional) - Emits `tracing` events for inserts, removals, splaying
//!   searches and failed allocations
//!
//! # Implementation
//!
//! Nodes are kept in an arena and linked by index, with a parent link on every
//! node. Splaying walks a node up with the classic zig, zig-zig and zig-zag steps,
//! so the tree never stores heights or balance information.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod options;
pub mod splay_tree;

pub use error::Error;
pub use options::{Access, BreadthFirst, DepthFirst, Emit};
pub use splay_tree::{NodeRef, SplayTree, Traversal};
