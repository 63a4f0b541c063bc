// Strategies for generating points and point clouds.
use crate::data::Point;

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;

/// Points with arbitrary finite coordinates.
pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  (-1e6..1e6, -1e6..1e6).prop_map(|(x, y)| Point::new([x, y]))
}

/// Points on a small integer grid. Duplicates, collinear runs and tied
/// distances are common.
pub fn any_grid_point() -> impl Strategy<Value = Point<f64>> {
  (-8i8..=8, -8i8..=8).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn any_point_cloud(len: Range<usize>) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_grid_point(), len)
}
