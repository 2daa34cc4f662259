mod distance_matrix;
pub use distance_matrix::{DistanceMatrix, ShapeError};

mod random_matrix;
pub use random_matrix::RandomDistanceMatrix;

mod argmax;

/// Module containing mathematical utilities.
pub mod math {
    pub use super::argmax::*;
}

pub mod traits;

/// The default sentinel for `i64` matrices, which are the most common case.
///
/// It is the same value as [`Weight::DEFAULT_SENTINEL`](traits::Weight) for
/// every weight type.
pub const DEFAULT_SENTINEL: i64 = 1_000_000_000;
