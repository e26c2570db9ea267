//! A k-d tree stored as parallel arrays indexed by insertion position.
//!
//! No per-node allocation and no pointer chasing: a node is just a position `i`, and its axis,
//! children and coordinates are `axes[i]`, `lefts[i]`, `rights[i]` and the per-axis coordinate
//! arrays at `i`.

mod index;
mod search;

pub use index::FlatKDTree;
