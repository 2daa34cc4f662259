use crate::traits::Weight;
use std::fmt::{self, Display};

/// The diameter of a graph, together with a pair of nodes realizing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diameter<W: Weight> {
    /// The largest distance between two nodes, or the sentinel if some node
    /// cannot reach some other node.
    pub distance: W,
    /// A diametral pair: `distance` is the distance from `source` to
    /// `target`. This is the first such pair in row-major order.
    pub source: usize,
    pub target: usize,
    /// The sentinel of the matrix the diameter was computed on.
    pub sentinel: W,
}

impl<W: Weight> Diameter<W> {
    /// Returns true if the graph is not strongly connected, in which case
    /// [`distance`](Self::distance) is the sentinel.
    pub fn is_infinite(&self) -> bool {
        self.distance == self.sentinel
    }

    /// Returns the diameter, or [`None`] if it is infinite.
    pub fn finite(&self) -> Option<W> {
        if self.is_infinite() {
            None
        } else {
            Some(self.distance)
        }
    }
}

impl<W: Weight> Display for Diameter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "∞ ({} cannot reach {})", self.source, self.target)
        } else {
            write!(f, "{} (from {} to {})", self.distance, self.source, self.target)
        }
    }
}
