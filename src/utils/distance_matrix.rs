use super::traits::Weight;
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// The reasons a [`DistanceMatrix`] cannot be built, or cannot be used by an
/// algorithm.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A row has a length different from the number of rows.
    #[error("Row {row} has {actual} entries, but the matrix has {expected} rows")]
    Jagged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A flat buffer does not contain exactly n² entries.
    #[error("Expected {expected} entries, found {actual}")]
    WrongLength { expected: usize, actual: usize },
    /// The matrix has no nodes.
    #[error("The matrix is empty")]
    Empty,
    /// An arc refers to a node that does not exist.
    #[error("Arc ({from}, {to}) out of bounds for {num_nodes} nodes")]
    ArcOutOfBounds {
        from: usize,
        to: usize,
        num_nodes: usize,
    },
}

/// A dense n×n matrix of distances between the nodes of a directed graph.
///
/// Entry (*i*, *j*) contains the best known weight of a path from *i* to *j*,
/// or the [sentinel](DistanceMatrix::sentinel) if no such path is known.
/// Entries are stored in row-major order in a single boxed slice, so a matrix
/// is square by construction: jagged or non-square inputs are rejected with a
/// [`ShapeError`] when the matrix is built.
///
/// Every matrix carries its own sentinel, which defaults to
/// [`Weight::DEFAULT_SENTINEL`]; it must exceed any distance actually
/// achievable in the graph.
///
/// # Examples
/// ```
/// # use dense_diameter::utils::DistanceMatrix;
/// let m = DistanceMatrix::from_rows(vec![vec![0, 1], vec![1, 0]], 1_000_000_000)?;
/// assert_eq!(m.num_nodes(), 2);
/// assert_eq!(m[(0, 1)], 1);
/// # Ok::<(), dense_diameter::utils::ShapeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W: Weight> {
    num_nodes: usize,
    sentinel: W,
    data: Box<[W]>,
}

impl<W: Weight> DistanceMatrix<W> {
    /// Creates a matrix with no arcs: zeros on the diagonal, the sentinel
    /// everywhere else.
    pub fn new(num_nodes: usize, sentinel: W) -> Self {
        let mut data = vec![sentinel; num_nodes * num_nodes].into_boxed_slice();
        for i in 0..num_nodes {
            data[i * num_nodes + i] = W::ZERO;
        }
        Self {
            num_nodes,
            sentinel,
            data,
        }
    }

    /// Creates a matrix with no arcs using [`Weight::DEFAULT_SENTINEL`].
    pub fn with_default_sentinel(num_nodes: usize) -> Self {
        Self::new(num_nodes, W::DEFAULT_SENTINEL)
    }

    /// Builds a matrix from its rows, which must all have as many entries as
    /// there are rows.
    ///
    /// The diagonal is taken as is.
    pub fn from_rows<R: AsRef<[W]>, I>(rows: I, sentinel: W) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = R>,
        I::IntoIter: ExactSizeIterator,
    {
        let rows = rows.into_iter();
        let num_nodes = rows.len();
        let mut data = Vec::with_capacity(num_nodes * num_nodes);
        for (row, entries) in rows.enumerate() {
            let entries = entries.as_ref();
            if entries.len() != num_nodes {
                return Err(ShapeError::Jagged {
                    row,
                    expected: num_nodes,
                    actual: entries.len(),
                });
            }
            data.extend_from_slice(entries);
        }
        Ok(Self {
            num_nodes,
            sentinel,
            data: data.into_boxed_slice(),
        })
    }

    /// Builds a matrix with `num_nodes` rows from a row-major buffer of
    /// `num_nodes`² entries.
    pub fn from_flat(
        num_nodes: usize,
        data: impl Into<Box<[W]>>,
        sentinel: W,
    ) -> Result<Self, ShapeError> {
        let data = data.into();
        let expected = num_nodes * num_nodes;
        if data.len() != expected {
            return Err(ShapeError::WrongLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            num_nodes,
            sentinel,
            data,
        })
    }

    /// Builds the direct-distance matrix of a graph with `num_nodes` nodes
    /// from a list of weighted arcs `(source, target, weight)`.
    ///
    /// Parallel arcs keep the smallest weight. Loops overwrite the zero on the
    /// diagonal only if their weight is negative.
    pub fn from_arcs(
        num_nodes: usize,
        arcs: impl IntoIterator<Item = (usize, usize, W)>,
        sentinel: W,
    ) -> Result<Self, ShapeError> {
        let mut matrix = Self::new(num_nodes, sentinel);
        for (source, target, weight) in arcs {
            if source >= num_nodes || target >= num_nodes {
                return Err(ShapeError::ArcOutOfBounds {
                    from: source,
                    to: target,
                    num_nodes,
                });
            }
            let entry = &mut matrix[(source, target)];
            if *entry == sentinel || weight < *entry {
                *entry = weight;
            }
        }
        Ok(matrix)
    }

    /// Returns the number of nodes, that is, the number of rows.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the value representing the absence of a path.
    #[inline(always)]
    pub fn sentinel(&self) -> W {
        self.sentinel
    }

    /// Returns true if the matrix has no nodes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> W {
        self[(i, j)]
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, weight: W) {
        self[(i, j)] = weight;
    }

    /// Returns true if entry (`i`, `j`) is not the sentinel.
    #[inline(always)]
    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self[(i, j)] != self.sentinel
    }

    /// Returns row `i`, that is, the distances from node `i`.
    pub fn row(&self, i: usize) -> &[W] {
        &self.data[i * self.num_nodes..(i + 1) * self.num_nodes]
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[W]> + '_ {
        (0..self.num_nodes).map(move |i| self.row(i))
    }

    /// Returns all entries in row-major order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[W] {
        &self.data
    }

    /// Returns all entries in row-major order, mutably.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [W] {
        &mut self.data
    }

    /// Copies the entries into a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<W>> {
        self.rows().map(<[W]>::to_vec).collect()
    }
}

impl<W: Weight> Index<(usize, usize)> for DistanceMatrix<W> {
    type Output = W;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &W {
        debug_assert!(i < self.num_nodes && j < self.num_nodes);
        &self.data[i * self.num_nodes + j]
    }
}

impl<W: Weight> IndexMut<(usize, usize)> for DistanceMatrix<W> {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut W {
        debug_assert!(i < self.num_nodes && j < self.num_nodes);
        &mut self.data[i * self.num_nodes + j]
    }
}
