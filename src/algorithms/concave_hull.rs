//! K-nearest-neighbour concave hull.
//!
//! Moreira, A. and Santos, M. Y. (2007). *Concave hull: A k-nearest neighbours
//! approach for the computation of the region occupied by a set of points.*
pub mod knn;
pub mod neighbors;

pub use knn::{concave_hull, concave_hull_with};

/// Smallest neighbour count the algorithm works with. Lower requests are
/// raised to this value.
pub const MIN_NEIGHBORS: usize = 3;

/// Attempts made by [`KnnParams::new`] before giving up with
/// [`Error::AttemptsExhausted`](crate::Error::AttemptsExhausted).
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Parameters of a concave hull computation.
///
/// ```rust
/// # use khull::KnnParams;
/// let params = KnnParams::new(1).with_max_attempts(10);
/// assert_eq!(params.neighbors(), 3);
/// assert_eq!(params.max_attempts, Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnnParams {
  /// Requested neighbour count. Escalated by one after every failed attempt.
  pub k: usize,
  /// Upper bound on full attempts. `None` escalates until `k` reaches the
  /// number of distinct points.
  pub max_attempts: Option<usize>,
}

impl KnnParams {
  /// Start from `k` neighbours with at most [`DEFAULT_MAX_ATTEMPTS`] attempts.
  pub fn new(k: usize) -> KnnParams {
    KnnParams {
      k,
      max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
    }
  }

  /// Escalate until `k` reaches the number of distinct points. Every attempt
  /// is a full recomputation, so large inputs may take many of them.
  #[must_use]
  pub fn with_unlimited_attempts(self) -> KnnParams {
    KnnParams {
      max_attempts: None,
      ..self
    }
  }

  #[must_use]
  pub fn with_max_attempts(self, max_attempts: usize) -> KnnParams {
    KnnParams {
      max_attempts: Some(max_attempts),
      ..self
    }
  }

  /// Neighbour count of the first attempt.
  pub fn neighbors(&self) -> usize {
    self.k.max(MIN_NEIGHBORS)
  }
}

impl Default for KnnParams {
  fn default() -> Self {
    KnnParams::new(MIN_NEIGHBORS)
  }
}
