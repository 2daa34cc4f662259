//! The Floyd–Warshall algorithm for all-pairs shortest paths on dense
//! graphs.
//!
//! The algorithm transforms a matrix of direct distances (the weight of the
//! arc from *i* to *j*, zero on the diagonal, and the sentinel for missing
//! arcs) into the matrix of shortest-path distances in Θ(*n*³) time and
//! constant additional space.
//!
//! Negative weights are accepted, but negative cycles are not detected by
//! the algorithm: the entries of pairs affected by a negative cycle are those
//! produced by the recurrence, and have no meaning as distances. Use
//! [`negative_cycle`] after the computation to check whether this happened.

use crate::{traits::Weight, utils::DistanceMatrix};
use dsi_progress_logger::ProgressLog;

/// Replaces each entry of `matrix` with the length of the shortest path
/// between the two nodes, or leaves the sentinel if there is no path.
///
/// After the *k*-th iteration of the outer loop entry (*i*, *j*) is the
/// length of the shortest path from *i* to *j* whose intermediate nodes are
/// all smaller than or equal to *k*. An arc is relaxed only if both halves
/// are not the sentinel, so the sentinel never takes part in a sum. Sums are
/// computed with [`Weight::path_sum`], so the computation never overflows,
/// not even when a negative cycle drives distances down at each iteration.
///
/// # Examples
/// ```
/// # use dense_diameter::{algo::floyd_warshall, utils::DistanceMatrix};
/// # use dsi_progress_logger::no_logging;
/// const S: i64 = 1_000_000_000;
/// let mut m = DistanceMatrix::from_rows(vec![[0, 1, S], [S, 0, 2], [S, S, 0]], S)?;
/// floyd_warshall::run_in_place(&mut m, no_logging![]);
/// assert_eq!(m[(0, 2)], 3);
/// assert_eq!(m[(2, 0)], S);
/// # Ok::<(), dense_diameter::utils::ShapeError>(())
/// ```
pub fn run_in_place<W: Weight>(matrix: &mut DistanceMatrix<W>, pl: &mut impl ProgressLog) {
    let n = matrix.num_nodes();
    let sentinel = matrix.sentinel();
    pl.item_name("intermediate node");
    pl.expected_updates(Some(n));
    pl.start("Computing all-pairs shortest paths...");

    let d = matrix.as_mut_slice();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                // (i, k) is reread at each step: with a negative loop on k
                // it changes when j == k.
                let d_ik = d[i * n + k];
                let d_kj = d[k * n + j];
                if d_ik != sentinel && d_kj != sentinel {
                    let via_k = d_ik.path_sum(d_kj);
                    if via_k < d[i * n + j] {
                        d[i * n + j] = via_k;
                    }
                }
            }
        }
        pl.light_update();
    }

    pl.done();
}

/// Returns a new matrix containing the shortest-path distances of `matrix`,
/// which is left untouched.
///
/// This is [`run_in_place`] on a copy; it needs *n*² additional entries.
pub fn run<W: Weight>(matrix: &DistanceMatrix<W>, pl: &mut impl ProgressLog) -> DistanceMatrix<W> {
    let mut distances = matrix.clone();
    run_in_place(&mut distances, pl);
    distances
}

/// Returns the first node with a negative distance from itself in a matrix
/// already processed by [`run_in_place`], or [`None`].
///
/// A negative diagonal entry means that the node reaches itself through a
/// negative cycle, so some entries of the matrix are not shortest-path
/// distances.
pub fn negative_cycle<W: Weight>(distances: &DistanceMatrix<W>) -> Option<usize> {
    (0..distances.num_nodes()).find(|&i| distances[(i, i)] < W::ZERO)
}
