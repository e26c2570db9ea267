#![doc = include_str!("../README.md")]

mod builder;
mod distance;
mod error;
pub mod flat;
mod geo;
mod geokdtree;
mod kdtree;
mod point;
pub mod pointer;
mod sort;
mod r#trait;
mod r#type;

pub use builder::{KDTreeBuilder, SortedPoints};
pub use distance::squared_distance;
pub use error::{GeoKDTreeError, Result};
pub use flat::FlatKDTree;
pub use geo::{lat_lon_to_point, lat_lon_to_xyz, GEO_AXIS_COUNT};
pub use geokdtree::GeoKDTree;
pub use kdtree::KDTree;
pub use point::Point;
pub use pointer::{Node, PointerKDTree};
pub use r#trait::{Coords, KDTreeIndex, Neighbor, TreeLayout};
pub use r#type::CoordNum;
pub use sort::split_at_median;

#[cfg(test)]
pub(crate) mod test;
