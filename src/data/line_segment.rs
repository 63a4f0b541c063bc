use super::Point;

use crate::{HullScalar, Intersects};

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Directed, finite line segment from `src` to `dst`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T> {
  pub src: Point<T>,
  pub dst: Point<T>,
}

impl<T> LineSegment<T> {
  pub const fn new(src: Point<T>, dst: Point<T>) -> LineSegment<T> {
    LineSegment { src, dst }
  }
}

impl<T: HullScalar> LineSegment<T> {
  pub fn length(&self) -> T {
    self.src.distance(&self.dst)
  }
}

impl<T> From<(Point<T>, Point<T>)> for LineSegment<T> {
  fn from((src, dst): (Point<T>, Point<T>)) -> LineSegment<T> {
    LineSegment { src, dst }
  }
}

impl<T> From<std::ops::Range<(T, T)>> for LineSegment<T> {
  fn from(range: std::ops::Range<(T, T)>) -> LineSegment<T> {
    LineSegment {
      src: range.start.into(),
      dst: range.end.into(),
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

// Parametric form: a.src + t * (a.dst - a.src) == b.src + u * (b.dst - b.src).
// Only crossings strictly inside both segments count. Parallel segments,
// collinear overlaps included, never intersect.
impl<'a, T> Intersects for &'a LineSegment<T>
where
  T: HullScalar,
{
  type Result = Point<T>;
  fn intersect(self, other: &'a LineSegment<T>) -> Option<Self::Result> {
    let [x1, y1] = self.src.array;
    let [x2, y2] = self.dst.array;
    let [x3, y3] = other.src.array;
    let [x4, y4] = other.dst.array;

    let denom = (x2 - x1) * (y4 - y3) - (y2 - y1) * (x4 - x3);
    if denom == T::zero() {
      return None;
    }
    let t = ((x3 - x1) * (y4 - y3) - (y3 - y1) * (x4 - x3)) / denom;
    let u = ((x3 - x1) * (y2 - y1) - (y3 - y1) * (x2 - x1)) / denom;
    let interior = |s: T| s > T::zero() && s < T::one();
    if interior(t) && interior(u) {
      Some(Point::new([x1 + t * (x2 - x1), y1 + t * (y2 - y1)]))
    } else {
      None
    }
  }
}

/// True iff the two segments cross at a point interior to both.
///
/// Touching endpoints and parallel segments do not count as intersecting,
/// even when the segments overlap along a common line.
///
/// # Examples
///
/// ```rust
/// # use khull::data::{segments_intersect, LineSegment};
/// let a = LineSegment::from((0.0, 0.0)..(2.0, 2.0));
/// let b = LineSegment::from((0.0, 2.0)..(2.0, 0.0));
/// assert!(segments_intersect(&a, &b));
///
/// let c = LineSegment::from((1.0, 1.0)..(3.0, 3.0));
/// assert!(!segments_intersect(&a, &c));
/// ```
pub fn segments_intersect<T: HullScalar>(a: &LineSegment<T>, b: &LineSegment<T>) -> bool {
  a.intersect(b).is_some()
}

///////////////////////////////////////////////////////////////////////////////
// Tests
