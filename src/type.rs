use std::fmt::Debug;

use num_traits::Float;

/// A trait for types that can be used as indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. The median partition
/// and the branch-and-bound pruning both rely on IEEE float semantics (NaN rejection, exact
/// monotonic subtraction), so only `f32` and `f64` are supported.
pub trait CoordNum: private::Sealed + Float + Default + Debug + Send + Sync + 'static {}

impl CoordNum for f32 {}

impl CoordNum for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
