//! Diameter of dense weighted directed graphs.
//!
//! The diameter is the largest shortest-path distance between two nodes. It
//! is obtained in two explicit steps: the
//! [Floyd–Warshall](crate::algo::floyd_warshall) algorithm turns the matrix of
//! direct distances into the matrix of shortest-path distances, and [`reduce`]
//! extracts its maximum entry. [`reduce`] never runs the first step by
//! itself: it must be given a matrix of shortest-path distances. The
//! functions [`compute`] and [`compute_in_place`] perform both steps, and
//! additionally reject graphs with negative cycles.
//!
//! If some node cannot reach some other node the diameter is the sentinel of
//! the matrix (see [`Diameter::is_infinite`]).

mod output;
pub use output::Diameter;

use crate::{
    algo::floyd_warshall,
    traits::Weight,
    utils::{math, DistanceMatrix, ShapeError},
};
use dsi_progress_logger::ProgressLog;
use thiserror::Error;

/// Errors reported by [`compute`] and [`compute_in_place`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiameterError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// Node `node` reaches itself through a cycle of negative weight, so
    /// distances are not defined.
    #[error("Node {node} lies on a negative cycle")]
    NegativeCycle { node: usize },
}

/// Returns the largest entry of a matrix of shortest-path distances.
///
/// Diagonal entries are included, so graphs whose distances are all negative
/// have a negative diameter.
///
/// # Errors
///
/// [`ShapeError::Empty`] if the matrix has no nodes.
///
/// # Examples
/// ```
/// # use dense_diameter::{algo::{diameter, floyd_warshall}, utils::DistanceMatrix};
/// # use dsi_progress_logger::no_logging;
/// let mut m = DistanceMatrix::from_rows(vec![vec![0, 1], vec![1, 0]], 1_000_000_000)?;
/// floyd_warshall::run_in_place(&mut m, no_logging![]);
/// assert_eq!(diameter::reduce(&m)?.distance, 1);
/// # Ok::<(), dense_diameter::utils::ShapeError>(())
/// ```
pub fn reduce<W: Weight>(distances: &DistanceMatrix<W>) -> Result<Diameter<W>, ShapeError> {
    let n = distances.num_nodes();
    let (argmax, max) = math::argmax(distances.as_slice()).ok_or(ShapeError::Empty)?;

    Ok(Diameter {
        distance: max,
        source: argmax / n,
        target: argmax % n,
        sentinel: distances.sentinel(),
    })
}

/// Computes the diameter of the graph whose direct distances are in
/// `matrix`, which is left untouched.
///
/// See [`compute_in_place`].
pub fn compute<W: Weight>(
    matrix: &DistanceMatrix<W>,
    pl: &mut impl ProgressLog,
) -> Result<Diameter<W>, DiameterError> {
    if matrix.is_empty() {
        return Err(ShapeError::Empty.into());
    }
    let mut distances = matrix.clone();
    compute_in_place(&mut distances, pl)
}

/// Computes the diameter of the graph whose direct distances are in
/// `matrix`, leaving the shortest-path distances in `matrix`.
///
/// # Errors
///
/// * [`DiameterError::Shape`] if the matrix is empty.
/// * [`DiameterError::NegativeCycle`] if some node lies on a negative cycle;
///   `matrix` then contains the (meaningless) output of the Floyd–Warshall
///   recurrence.
pub fn compute_in_place<W: Weight>(
    matrix: &mut DistanceMatrix<W>,
    pl: &mut impl ProgressLog,
) -> Result<Diameter<W>, DiameterError> {
    if matrix.is_empty() {
        return Err(ShapeError::Empty.into());
    }
    floyd_warshall::run_in_place(matrix, pl);
    if let Some(node) = floyd_warshall::negative_cycle(matrix) {
        pl.info(format_args!("Negative cycle through node {}", node));
        return Err(DiameterError::NegativeCycle { node });
    }
    let diameter = reduce(matrix)?;
    pl.info(format_args!("Diameter: {}", diameter));
    Ok(diameter)
}
