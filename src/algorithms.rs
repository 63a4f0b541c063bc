pub mod concave_hull;

#[doc(inline)]
pub use concave_hull::knn::concave_hull;
