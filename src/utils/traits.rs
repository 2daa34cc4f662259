use common_traits::Number;
use std::fmt::{Debug, Display};
use std::ops::Add;

/// The numeric type of the entries of a
/// [`DistanceMatrix`](crate::utils::DistanceMatrix).
///
/// A weight is a [`Number`], whose `ZERO` is the distance of a node from
/// itself. Besides that, a weight type provides a default *sentinel*, that
/// is, the large finite value used to represent the absence of a path. The
/// sentinel is never added to anything: algorithms check for it before
/// relaxing. It must nonetheless be larger than any distance that can be
/// actually achieved, or unreachable and reachable pairs become
/// indistinguishable.
pub trait Weight: Number + Add<Output = Self> + PartialOrd + Debug + Display {
    /// The sentinel used when none is specified, 10⁹ for all implementing
    /// types.
    const DEFAULT_SENTINEL: Self;

    /// Returns the length of the concatenation of two paths.
    ///
    /// Integer weights saturate at the bounds of the type, so sums of
    /// distances driven down by a negative cycle never overflow.
    fn path_sum(self, other: Self) -> Self;

    /// Converts a positive edge weight into this type, or returns [`None`]
    /// if it is not representable.
    fn from_weight(value: u32) -> Option<Self>;
}

macro_rules! impl_int_weight {
    ($($ty:ty),*) => {$(
        impl Weight for $ty {
            const DEFAULT_SENTINEL: Self = 1_000_000_000;

            #[inline(always)]
            fn path_sum(self, other: Self) -> Self {
                <$ty>::saturating_add(self, other)
            }

            #[inline(always)]
            fn from_weight(value: u32) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }
    )*};
}

impl_int_weight!(i32, i64, u32, u64);

macro_rules! impl_float_weight {
    ($($ty:ty),*) => {$(
        impl Weight for $ty {
            const DEFAULT_SENTINEL: Self = 1e9;

            #[inline(always)]
            fn path_sum(self, other: Self) -> Self {
                self + other
            }

            #[inline(always)]
            fn from_weight(value: u32) -> Option<Self> {
                Some(value as $ty)
            }
        }
    )*};
}

impl_float_weight!(f32, f64);
