//! Concave hulls of planar point sets.
//!
//! The hull is grown one boundary vertex at a time from the `k` nearest
//! neighbours of the current vertex, preferring the candidate that keeps the
//! boundary tightest around the cloud. Whenever a walk cannot continue without
//! crossing itself, or leaves an input point outside the polygon, the whole
//! computation is restarted with `k + 1`.
//!
//! ```rust
//! # pub fn main() {
//! # use khull::concave_hull;
//! # use khull::data::Point;
//! let square = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([0.0, 10.0]),
//!   Point::new([10.0, 10.0]),
//!   Point::new([10.0, 0.0]),
//!   Point::new([5.0, 5.0]),
//! ];
//! let hull = concave_hull(square, 3).unwrap();
//! assert!(hull.is_closed());
//! assert_eq!(hull.len(), 5);
//! assert!(hull.contains(&Point::new([5.0, 5.0])));
//! # }
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use num_traits::{Float, FloatConst};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::Debug;

pub mod algorithms;
pub mod data;
mod intersection;
mod utils;

pub use intersection::Intersects;

#[doc(inline)]
pub use algorithms::concave_hull::{concave_hull, concave_hull_with, KnnParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three distinct points.
  InsufficientPoints,
  /// The neighbour count reached the number of distinct points.
  NeighborCountTooLarge,
  /// The configured attempt limit was reached before a hull was found.
  AttemptsExhausted,
  NonFiniteCoordinate,
  /// A point was removed from a working set that does not hold it. The hull
  /// computation never returns this; it asserts against it in debug builds.
  PointNotFound,
  OpenBoundary,
  DuplicatePoints,
  SelfIntersections,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientPoints => write!(f, "Insufficient points"),
      Error::NeighborCountTooLarge => write!(
        f,
        "Neighbour count is not smaller than the number of distinct points"
      ),
      Error::AttemptsExhausted => write!(f, "Attempt limit reached without a valid hull"),
      Error::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
      Error::PointNotFound => write!(f, "Point not found in working set"),
      Error::OpenBoundary => write!(f, "Open boundary"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::SelfIntersections => write!(f, "Self intersections"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

impl TotalOrd for usize {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self.cmp(other)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate type of points and hulls.
pub trait HullScalar: Float + FloatConst + TotalOrd + Debug + 'static {
  /// Value identity usable as a hash key. `0.0` and `-0.0` share a key.
  fn hash_key(self) -> OrderedFloat<f64>;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl HullScalar for $ty {
        fn hash_key(self) -> OrderedFloat<f64> {
          OrderedFloat(f64::from(self))
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
