use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Deref;
use std::ops::Index;

use crate::HullScalar;

/// Hashable value identity of a point.
pub(crate) type PointKey = [OrderedFloat<f64>; 2];

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T: HullScalar> Point<T> {
  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  /// Euclidean distance.
  pub fn distance(&self, rhs: &Point<T>) -> T {
    let dx = rhs.array[0] - self.array[0];
    let dy = rhs.array[1] - self.array[1];
    (dx * dx + dy * dy).sqrt()
  }

  /// Direction of the segment `self -> rhs`, measured from the negative X
  /// axis and normalized into `[0, 2π)`.
  ///
  /// A segment pointing along the negative X axis has angle zero and the angle
  /// grows as the segment turns towards positive Y.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use khull::data::Point;
  /// # use std::f64::consts::{FRAC_PI_2, PI};
  /// let origin = Point::new([0.0, 0.0]);
  /// assert_eq!(origin.angle_to(&Point::new([-1.0, 0.0])), 0.0);
  /// assert_eq!(origin.angle_to(&Point::new([0.0, 1.0])), FRAC_PI_2);
  /// assert_eq!(origin.angle_to(&Point::new([1.0, 0.0])), PI);
  /// ```
  pub fn angle_to(&self, rhs: &Point<T>) -> T {
    let dy = rhs.array[1] - self.array[1];
    let dx = self.array[0] - rhs.array[0];
    normalize_angle(dy.atan2(dx))
  }

  pub(crate) fn key(&self) -> PointKey {
    [self.array[0].hash_key(), self.array[1].hash_key()]
  }
}

/// Wraps an angle into `[0, 2π)`.
pub fn normalize_angle<T: HullScalar>(angle: T) -> T {
  let turn = T::TAU();
  let rem = angle % turn;
  if rem >= T::zero() {
    return rem;
  }
  // A tiny negative remainder rounds up to a full turn.
  let wrapped = rem + turn;
  if wrapped >= turn {
    T::zero()
  } else {
    wrapped
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T> From<Point<T>> for (T, T) {
  fn from(point: Point<T>) -> (T, T) {
    let [x, y] = point.array;
    (x, y)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}
