use super::{traits::Weight, DistanceMatrix};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Generates random dense distance matrices.
///
/// Each off-diagonal entry independently becomes an arc with probability
/// `p`, with a weight drawn uniformly from a closed integer interval (by
/// default \[1..100\]); the remaining entries are set to the sentinel. The
/// diagonal is always zero, so loops are never generated.
///
/// Generation is deterministic for a given seed of the [pseudorandom number
/// generator](SmallRng).
///
/// # Examples
/// ```
/// # use dense_diameter::utils::RandomDistanceMatrix;
/// let m = RandomDistanceMatrix::new(10, 0.8, 0).generate::<i64>();
/// assert_eq!(m.num_nodes(), 10);
/// assert_eq!(m[(3, 3)], 0);
/// ```
#[derive(Debug, Clone)]
pub struct RandomDistanceMatrix {
    n: usize,
    p: f64,
    seed: u64,
    min_weight: u32,
    max_weight: u32,
}

impl RandomDistanceMatrix {
    /// Creates a new generator, given the number of nodes, the probability
    /// of an arc between any two distinct nodes, and a seed.
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self {
            n,
            p,
            seed,
            min_weight: 1,
            max_weight: 100,
        }
    }

    /// Sets the closed interval from which arc weights are drawn.
    pub fn weights(mut self, min_weight: u32, max_weight: u32) -> Self {
        assert!(
            min_weight <= max_weight,
            "min_weight ({}) must not exceed max_weight ({})",
            min_weight,
            max_weight
        );
        self.min_weight = min_weight;
        self.max_weight = max_weight;
        self
    }

    /// Generates a matrix using [`Weight::DEFAULT_SENTINEL`].
    pub fn generate<W: Weight>(&self) -> DistanceMatrix<W> {
        self.generate_with_sentinel(W::DEFAULT_SENTINEL)
    }

    /// Generates a matrix using the given sentinel.
    ///
    /// The sentinel should be larger than `(n - 1) * max_weight`, the
    /// longest possible simple path.
    ///
    /// # Panics
    ///
    /// If `max_weight` is not representable in `W`, or it is not smaller than
    /// the sentinel.
    pub fn generate_with_sentinel<W: Weight>(&self, sentinel: W) -> DistanceMatrix<W> {
        assert!(
            matches!(W::from_weight(self.max_weight), Some(max) if max < sentinel),
            "max_weight ({}) must be representable and smaller than the sentinel ({})",
            self.max_weight,
            sentinel
        );
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut matrix = DistanceMatrix::new(self.n, sentinel);
        for i in 0..self.n {
            for j in 0..self.n {
                if i != j && rng.random_bool(self.p) {
                    let weight = rng.random_range(self.min_weight..=self.max_weight);
                    // Representable, as it does not exceed max_weight
                    if let Some(weight) = W::from_weight(weight) {
                        matrix[(i, j)] = weight;
                    }
                }
            }
        }
        matrix
    }
}
