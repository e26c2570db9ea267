//! A k-d tree of boxed nodes, each owning its two subtrees.

mod index;
mod node;

pub use index::PointerKDTree;
pub use node::Node;
