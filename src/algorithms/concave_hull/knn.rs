use claims::debug_assert_ok;
use tracing::{debug, trace};

use super::neighbors::{nearest, rank_by_angle};
use super::KnnParams;
use crate::data::{deduplicate, segments_intersect, Hull, LineSegment, Point, PointSet};
use crate::{Error, HullScalar};

// Reasons an attempt is abandoned in favour of a larger neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escalation {
  AllCandidatesIntersect,
  PointOutside,
  Unclosed,
}

#[derive(Debug)]
enum Attempt<T> {
  Closed(Hull<T>),
  Escalate(Escalation),
}

/// $O(k n^2)$ per attempt. Concave hull of `points` starting from `k`
/// neighbours.
///
/// Equivalent to [`concave_hull_with`] with `KnnParams::new(k)`.
///
/// # Errors
/// * [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
/// * [`Error::InsufficientPoints`] for fewer than three distinct points.
/// * [`Error::NeighborCountTooLarge`] if no neighbourhood smaller than the
///   point count yields a hull.
/// * [`Error::AttemptsExhausted`] after
///   [`DEFAULT_MAX_ATTEMPTS`](super::DEFAULT_MAX_ATTEMPTS) failed attempts.
///
/// # Examples
///
/// ```rust
/// # use khull::concave_hull;
/// # use khull::data::Point;
/// let pts: Vec<Point<f64>> = vec![(0., 0.), (1., 0.), (0., 1.)]
///   .into_iter()
///   .map(Point::from)
///   .collect();
/// // Three points are returned untouched.
/// let hull = concave_hull(pts.clone(), 3).unwrap();
/// assert_eq!(hull.points(), &pts[..]);
/// assert!(!hull.is_closed());
/// ```
pub fn concave_hull<T: HullScalar>(points: Vec<Point<T>>, k: usize) -> Result<Hull<T>, Error> {
  concave_hull_with(points, KnnParams::new(k))
}

/// Concave hull of `points`.
///
/// Duplicates are removed first, keeping the first occurrence. An input of
/// exactly three distinct points is returned as given, without a closing
/// repeat. Otherwise every attempt that cannot produce a closed boundary
/// enclosing all points is retried with one more neighbour.
///
/// # Errors
/// As [`concave_hull`], with [`Error::AttemptsExhausted`] raised once
/// `params.max_attempts` attempts have failed.
pub fn concave_hull_with<T: HullScalar>(
  points: Vec<Point<T>>,
  params: KnnParams,
) -> Result<Hull<T>, Error> {
  if points.iter().any(|pt| !pt.is_finite()) {
    return Err(Error::NonFiniteCoordinate);
  }
  let points = deduplicate(points);
  match points.len() {
    0..=2 => return Err(Error::InsufficientPoints),
    3 => return Ok(Hull::new_unchecked(points)),
    _ => {}
  }

  let mut k = params.neighbors();
  let mut attempts = 0;
  loop {
    if k >= points.len() {
      debug!(k, n = points.len(), "neighbourhood covers every point");
      return Err(Error::NeighborCountTooLarge);
    }
    if params.max_attempts.is_some_and(|max| attempts >= max) {
      debug!(attempts, "attempt limit reached");
      return Err(Error::AttemptsExhausted);
    }
    attempts += 1;
    match walk(&points, k)? {
      Attempt::Closed(hull) => {
        debug!(k, vertices = hull.len(), "hull closed");
        debug_assert_ok!(hull.validate());
        return Ok(hull);
      }
      Attempt::Escalate(reason) => {
        debug!(k, ?reason, "escalating");
        k += 1;
      }
    }
  }
}

// One boundary walk with a fixed neighbourhood. `points` must be distinct and
// hold at least four points.
fn walk<T: HullScalar>(points: &[Point<T>], k: usize) -> Result<Attempt<T>, Error> {
  let mut dataset: PointSet<T> = points.iter().copied().collect();
  let seed = dataset.select_seed().ok_or(Error::InsufficientPoints)?;
  debug_assert!(dataset.contains(&seed));
  dataset.remove(&seed)?;

  let mut hull = vec![seed];
  let mut current = seed;
  let mut previous_angle = T::PI();
  let mut step = 2;
  // The seed becomes reachable again once k vertices follow it.
  let stop = 2 + k;

  while (current != seed || step == 2) && !dataset.is_empty() {
    if step == stop {
      dataset.allow_closing(seed);
    }
    let candidates = rank_by_angle(&nearest(&dataset, &current, k), &current, previous_angle);
    let next = candidates.into_iter().find(|candidate| {
      !crosses_boundary(
        &hull,
        &current,
        candidate,
        dataset.is_closing_candidate(candidate),
      )
    });
    let Some(next) = next else {
      trace!(step, "every candidate crosses the boundary");
      return Ok(Attempt::Escalate(Escalation::AllCandidatesIntersect));
    };
    trace!(step, x = ?next.x_coord(), y = ?next.y_coord(), "vertex");

    previous_angle = current.angle_to(&next);
    debug_assert!(dataset.contains(&next));
    dataset.remove(&next)?;
    hull.push(next);
    current = next;
    step += 1;
  }

  if current != seed {
    return Ok(Attempt::Escalate(Escalation::Unclosed));
  }
  let hull = Hull::new_unchecked(hull);
  if dataset.iter().any(|pt| !hull.contains(pt)) {
    return Ok(Attempt::Escalate(Escalation::PointOutside));
  }
  Ok(Attempt::Closed(hull))
}

// Would the edge `current -> candidate` cross an edge already on the boundary?
// The last edge ends at `current` and is never tested. When closing, the first
// edge starts at the candidate and is skipped as well.
fn crosses_boundary<T: HullScalar>(
  hull: &[Point<T>],
  current: &Point<T>,
  candidate: &Point<T>,
  closing: bool,
) -> bool {
  let edge = LineSegment::new(*current, *candidate);
  let settled = &hull[..hull.len().saturating_sub(1)];
  settled
    .windows(2)
    .skip(usize::from(closing))
    .any(|pair| segments_intersect(&edge, &LineSegment::new(pair[0], pair[1])))
}
