mod arena;
mod handle;
mod node;
mod raw_splay_tree;
mod traverse;

pub(crate) use handle::Handle;
pub(crate) use raw_splay_tree::RawSplayTree;
