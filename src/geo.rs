//! Projection of latitude/longitude onto the unit sphere.
//!
//! The squared straight-line (chordal) distance between two points on the unit sphere is
//! `2 - 2·cos(θ)`, where `θ` is their great-circle angle. It is strictly increasing in `θ` over
//! `[0, π]`, so the nearest neighbor by Euclidean distance among projected points is the nearest
//! neighbor by great-circle distance among the original coordinates.

use crate::point::Point;

/// Number of axes of a projected point.
pub const GEO_AXIS_COUNT: usize = 3;

/// Convert a latitude/longitude pair in degrees into a unit vector `[x, y, z]`.
///
/// ```
/// use geokdtree::lat_lon_to_xyz;
///
/// let [x, y, z] = lat_lon_to_xyz(0., 90.);
/// assert!(x.abs() < 1e-12);
/// assert!((y - 1.).abs() < 1e-12);
/// assert_eq!(z, 0.);
/// ```
#[inline]
pub fn lat_lon_to_xyz(lat: f64, lon: f64) -> [f64; 3] {
    let lat_rad = lat.to_radians();
    let lon_rad = lon.to_radians();
    let cos_lat = lat_rad.cos();
    [
        cos_lat * lon_rad.cos(),
        cos_lat * lon_rad.sin(),
        lat_rad.sin(),
    ]
}

/// Project a latitude/longitude pair and tag it with `payload`.
pub fn lat_lon_to_point<P>(lat: f64, lon: f64, payload: P) -> Point<f64, P> {
    Point::with_payload(lat_lon_to_xyz(lat, lon).to_vec(), payload)
}
