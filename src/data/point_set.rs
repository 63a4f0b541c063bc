use std::collections::HashSet;

use super::point::PointKey;
use super::Point;
use crate::utils::DenseCollection;
use crate::{Error, HullScalar, TotalOrd};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry<T> {
  rank: usize,
  point: Point<T>,
}

/// Working set of distinct candidate points.
///
/// Every point is stamped with an insertion rank when it is added. Ranks only
/// grow, so a re-added point sorts after everything already present. Ties in
/// neighbour and angle ordering are broken by rank.
#[derive(Debug, Clone)]
pub struct PointSet<T> {
  entries: DenseCollection<PointKey, Entry<T>>,
  next_rank: usize,
  closing: Option<PointKey>,
}

/// Drop repeated points, keeping the first occurrence of each.
pub fn deduplicate<T: HullScalar>(points: Vec<Point<T>>) -> Vec<Point<T>> {
  let mut seen = HashSet::with_capacity(points.len());
  points
    .into_iter()
    .filter(|pt| seen.insert(pt.key()))
    .collect()
}

impl<T: HullScalar> PointSet<T> {
  pub fn new() -> PointSet<T> {
    PointSet::with_capacity(0)
  }

  pub fn with_capacity(capacity: usize) -> PointSet<T> {
    PointSet {
      entries: DenseCollection::with_capacity(capacity),
      next_rank: 0,
      closing: None,
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.entries.contains_key(&pt.key())
  }

  /// Append a point. Returns `false` if an equal point is already present.
  pub fn add(&mut self, pt: Point<T>) -> bool {
    let entry = Entry {
      rank: self.next_rank,
      point: pt,
    };
    let added = self.entries.insert(pt.key(), entry);
    if added {
      self.next_rank += 1;
    }
    added
  }

  /// Remove the point equal to `pt`.
  ///
  /// # Errors
  /// [`Error::PointNotFound`] if no such point is in the set.
  pub fn remove(&mut self, pt: &Point<T>) -> Result<Point<T>, Error> {
    let key = pt.key();
    let entry = self.entries.remove(&key).ok_or(Error::PointNotFound)?;
    if self.closing == Some(key) {
      self.closing = None;
    }
    Ok(entry.point)
  }

  /// Re-admit the seed point as a candidate that may close the boundary.
  pub fn allow_closing(&mut self, seed: Point<T>) {
    self.add(seed);
    self.closing = Some(seed.key());
  }

  pub fn is_closing_candidate(&self, pt: &Point<T>) -> bool {
    self.closing == Some(pt.key())
  }

  /// The point with the numerically largest Y coordinate. Ties go to the
  /// earliest inserted point.
  pub fn select_seed(&self) -> Option<Point<T>> {
    self
      .iter_ranked()
      .max_by(|(a_rank, a), (b_rank, b)| {
        TotalOrd::total_cmp(a.y_coord(), b.y_coord()).then_with(|| b_rank.cmp(a_rank))
      })
      .map(|(_, pt)| *pt)
  }

  /// Points in storage order. Use the rank for ordering decisions.
  pub fn iter_ranked(&self) -> impl Iterator<Item = (usize, &Point<T>)> + '_ {
    self.entries.iter().map(|entry| (entry.rank, &entry.point))
  }

  pub fn iter(&self) -> impl Iterator<Item = &Point<T>> + '_ {
    self.entries.iter().map(|entry| &entry.point)
  }
}

impl<T: HullScalar> Default for PointSet<T> {
  fn default() -> Self {
    PointSet::new()
  }
}

impl<T: HullScalar> FromIterator<Point<T>> for PointSet<T> {
  fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
    let iter = iter.into_iter();
    let mut set = PointSet::with_capacity(iter.size_hint().0);
    for pt in iter {
      set.add(pt);
    }
    set
  }
}
