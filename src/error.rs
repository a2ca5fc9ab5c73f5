use alloc::collections::TryReserveError;

/// Failures reported by [`SplayTree`](crate::SplayTree) operations.
///
/// A failed call never leaves a partial change behind: the tree is exactly as it
/// was before the call. A missing key is not an error and is reported through
/// `Option`/`bool` returns instead.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The tree already holds its maximum number of nodes.
    #[error("tree is full ({max_nodes} nodes)")]
    CapacityExhausted {
        /// The node ceiling that was hit.
        max_nodes: usize,
    },
    /// Allocating a node or an output buffer failed.
    #[error("allocation failed")]
    AllocationFailed(#[from] TryReserveError),
    /// Legacy option bits with none, several, or unknown flags set.
    #[error("invalid option bits {0:#x}")]
    InvalidOptions(u32),
}
