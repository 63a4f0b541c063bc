use crate::data::{normalize_angle, Point, PointSet};
use crate::{HullScalar, TotalOrd};

/// The `k` points of `set` closest to `origin`, nearest first.
///
/// Equal distances are ordered by insertion rank, so the result does not
/// depend on how the set is stored.
///
/// # Time complexity
/// $O(n \log n)$
pub fn nearest<T: HullScalar>(set: &PointSet<T>, origin: &Point<T>, k: usize) -> Vec<Point<T>> {
  let mut candidates: Vec<(T, usize, Point<T>)> = set
    .iter_ranked()
    .map(|(rank, pt)| (origin.distance(pt), rank, *pt))
    .collect();
  // Ranks are unique, so the key is a total order.
  candidates.sort_unstable_by(|a, b| TotalOrd::total_cmp(&(a.0, a.1), &(b.0, b.1)));
  candidates.truncate(k);
  candidates.into_iter().map(|(_, _, pt)| pt).collect()
}

/// Order `candidates` by how sharply the boundary turns to reach them from
/// `origin`, sharpest first.
///
/// The turn of a candidate is `previous_angle - angle(candidate -> origin)`,
/// normalized into `[0, 2π)`. The sort is stable: equal turns keep the order of
/// `candidates`.
pub fn rank_by_angle<T: HullScalar>(
  candidates: &[Point<T>],
  origin: &Point<T>,
  previous_angle: T,
) -> Vec<Point<T>> {
  let mut ranked: Vec<(T, Point<T>)> = candidates
    .iter()
    .map(|pt| (normalize_angle(previous_angle - pt.angle_to(origin)), *pt))
    .collect();
  ranked.sort_by(|a, b| TotalOrd::total_cmp(&b.0, &a.0));
  ranked.into_iter().map(|(_, pt)| pt).collect()
}
