mod hull;
mod line_segment;
pub(crate) mod point;
mod point_set;

pub use hull::Hull;
pub use line_segment::*;
pub use point::{normalize_angle, Point};
pub use point_set::{deduplicate, PointSet};
