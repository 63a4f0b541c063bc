use std::collections::HashSet;

use super::{segments_intersect, LineSegment, Point};
use crate::{Error, HullScalar};

/// Boundary of a point set, as an ordered list of vertices.
///
/// Hulls produced by [`concave_hull`](crate::concave_hull) are closed: the
/// first vertex is repeated as the last one. The single exception is an input
/// of exactly three distinct points, which is returned as-is with no closing
/// repeat. Check [`Hull::is_closed`] if the distinction matters.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull<T> {
  points: Vec<Point<T>>,
}

impl<T> Hull<T> {
  /// $O(1)$ Wrap a vertex list without checking it.
  pub fn new_unchecked(points: Vec<Point<T>>) -> Hull<T> {
    Hull { points }
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point<T>> {
    self.points
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.points.iter()
  }

  /// Consecutive vertex pairs. A closed hull yields every boundary edge.
  pub fn iter_edges(&self) -> impl Iterator<Item = LineSegment<T>> + '_
  where
    T: Copy,
  {
    self
      .points
      .windows(2)
      .map(|pair| LineSegment::new(pair[0], pair[1]))
  }
}

impl<T: HullScalar> Hull<T> {
  pub fn is_closed(&self) -> bool {
    self.points.len() > 1 && self.points.first() == self.points.last()
  }

  /// Even-odd ray casting.
  ///
  /// Points on the boundary may be classified either way.
  ///
  /// # Time complexity
  /// $O(n)$
  pub fn contains(&self, pt: &Point<T>) -> bool {
    let [x, y] = pt.array;
    let n = self.points.len();
    if n == 0 {
      return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
      let [xi, yi] = self.points[i].array;
      let [xj, yj] = self.points[j].array;
      if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
        inside = !inside;
      }
      j = i;
    }
    inside
  }

  /// Shoelace area. Positive for counter-clockwise boundaries.
  pub fn signed_area(&self) -> T {
    let n = self.points.len();
    if n < 3 {
      return T::zero();
    }
    let twice = (0..n)
      .map(|i| {
        let [x1, y1] = self.points[i].array;
        let [x2, y2] = self.points[(i + 1) % n].array;
        x1 * y2 - x2 * y1
      })
      .fold(T::zero(), |acc, v| acc + v);
    twice / (T::one() + T::one())
  }

  /// Check that the hull is a closed simple polygon.
  ///
  /// # Errors
  /// * [`Error::InsufficientPoints`] for fewer than three distinct vertices.
  /// * [`Error::OpenBoundary`] if the first vertex is not repeated at the end.
  /// * [`Error::DuplicatePoints`] if a vertex occurs twice.
  /// * [`Error::SelfIntersections`] if two non-adjacent edges cross.
  ///
  /// # Time complexity
  /// $O(n^2)$
  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 4 {
      return Err(Error::InsufficientPoints);
    }
    if !self.is_closed() {
      return Err(Error::OpenBoundary);
    }
    let mut seen = HashSet::with_capacity(self.points.len());
    for pt in &self.points[..self.points.len() - 1] {
      if !seen.insert(pt.key()) {
        return Err(Error::DuplicatePoints);
      }
    }

    let edges: Vec<LineSegment<T>> = self.iter_edges().collect();
    let m = edges.len();
    for i in 0..m {
      for j in i + 2..m {
        // The first and last edges meet at the closing vertex.
        if i == 0 && j == m - 1 {
          continue;
        }
        if segments_intersect(&edges[i], &edges[j]) {
          return Err(Error::SelfIntersections);
        }
      }
    }
    Ok(())
  }
}

impl<T> IntoIterator for Hull<T> {
  type Item = Point<T>;
  type IntoIter = std::vec::IntoIter<Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}
