//! Nearest-neighbor lookup over latitude/longitude pairs.

use geo_traits::CoordTrait;

use crate::builder::KDTreeBuilder;
use crate::error::Result;
use crate::flat::FlatKDTree;
use crate::geo::{lat_lon_to_xyz, GEO_AXIS_COUNT};
use crate::r#trait::{Neighbor, TreeLayout};

/// A static k-d tree over `(latitude, longitude)` pairs in degrees.
///
/// Points are projected onto the unit sphere (see [`lat_lon_to_xyz`]) and indexed in three
/// dimensions, so the closest point is the closest by great-circle distance: there is no
/// distortion near the poles and no seam at the antimeridian.
///
/// ```
/// use geokdtree::GeoKDTree;
///
/// let cities = [
///     (34.0522, -118.2437), // Los Angeles
///     (40.7128, -74.0060),  // New York
///     (37.7749, -122.4194), // San Francisco
///     (51.5074, -0.1278),   // London
///     (48.8566, 2.3522),    // Paris
/// ];
/// let tree = GeoKDTree::new(&cities).unwrap();
///
/// let seattle = (47.6062, -122.3321);
/// assert_eq!(tree.closest_idx(seattle).unwrap(), 2);
/// assert_eq!(tree.closest_point(seattle).unwrap(), (37.7749, -122.4194));
/// ```
#[derive(Debug, Clone)]
pub struct GeoKDTree<T = FlatKDTree<f64>> {
    points: Vec<(f64, f64)>,
    tree: T,
}

impl GeoKDTree {
    /// Build a tree in the default flat layout from `(latitude, longitude)` pairs.
    pub fn new(points: &[(f64, f64)]) -> Result<Self> {
        Self::build(points)
    }

    /// Build a tree from coordinates with `x` as longitude and `y` as latitude.
    pub fn from_coords<C: CoordTrait<T = f64>>(
        coords: impl IntoIterator<Item = C>,
    ) -> Result<Self> {
        let points: Vec<(f64, f64)> = coords.into_iter().map(|c| (c.y(), c.x())).collect();
        Self::build(&points)
    }
}

impl<T: TreeLayout<f64>> GeoKDTree<T> {
    /// Build a tree in layout `T` from `(latitude, longitude)` pairs.
    pub fn build(points: &[(f64, f64)]) -> Result<Self> {
        let mut builder = KDTreeBuilder::<f64>::with_capacity(GEO_AXIS_COUNT, points.len());
        for &(lat, lon) in points {
            builder.add(&lat_lon_to_xyz(lat, lon))?;
        }
        let tree = builder.finish();
        log::debug!("indexed {} geographic points", points.len());
        Ok(Self {
            points: points.to_vec(),
            tree,
        })
    }

    fn nearest(&self, (lat, lon): (f64, f64)) -> Result<Neighbor<f64>> {
        self.tree.nearest(&lat_lon_to_xyz(lat, lon))
    }

    /// The position in the original input of the closest point to `(lat, lon)`.
    pub fn closest_idx(&self, query: (f64, f64)) -> Result<usize> {
        Ok(self.nearest(query)?.index as usize)
    }

    /// The closest original `(latitude, longitude)` pair to `query`.
    pub fn closest_point(&self, query: (f64, f64)) -> Result<(f64, f64)> {
        let idx = self.closest_idx(query)?;
        Ok(self.points[idx])
    }

    /// The closest point's index and its squared chordal distance on the unit sphere.
    ///
    /// The distance orders results correctly but is not a great-circle distance.
    pub fn closest_idx_with_distance(&self, query: (f64, f64)) -> Result<(usize, f64)> {
        let nearest = self.nearest(query)?;
        Ok((nearest.index as usize, nearest.sq_dist))
    }

    /// [`closest_idx`][Self::closest_idx] for a coordinate with `x` as longitude and `y` as
    /// latitude.
    pub fn closest_idx_coord(&self, coord: &impl CoordTrait<T = f64>) -> Result<usize> {
        self.closest_idx((coord.y(), coord.x()))
    }

    /// The original `(latitude, longitude)` pairs, in input order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points are indexed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The underlying tree over projected points.
    pub fn tree(&self) -> &T {
        &self.tree
    }
}
