use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoKDTreeError {
    /// The index holds no points, so there is nothing to return.
    #[error("Cannot query an empty index.")]
    EmptyIndex,

    /// A point was added with no coordinates at all.
    #[error("Points must have at least one coordinate.")]
    ZeroDimension,

    /// A point's coordinate count differs from the index's axis count.
    #[error("Point {index} has {found} coordinates when expected {expected}.")]
    DimensionMismatch {
        /// Insertion index of the offending point
        index: usize,
        /// Axis count of the index
        expected: usize,
        /// Coordinate count of the offending point
        found: usize,
    },

    /// A query point's coordinate count differs from the index's axis count.
    #[error("Query has {found} coordinates when expected {expected}.")]
    QueryDimensionMismatch {
        /// Axis count of the index
        expected: usize,
        /// Coordinate count of the query
        found: usize,
    },

    /// A point has a NaN or infinite coordinate. NaN cannot be ordered along an axis and an
    /// infinite value makes distances NaN.
    #[error("Point {index} has a non-finite coordinate.")]
    NonFiniteCoordinate {
        /// Insertion index of the offending point
        index: usize,
    },

    /// The query point has a NaN or infinite coordinate.
    #[error("Query has a non-finite coordinate.")]
    NonFiniteQuery,

    /// Point ids are stored as `u32`.
    #[error("Cannot index more than {} points.", u32::MAX)]
    TooManyPoints,
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoKDTreeError>;
