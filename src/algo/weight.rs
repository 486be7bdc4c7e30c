use std::ops::{Add, Sub};

/// A weight type usable as edge data in cost-based graph algorithms.
///
/// The type must have a dedicated infinity value that compares greater than all
/// finite values. Implementations are only provided for unsigned integers, as
/// the cost-reduction arithmetic of the TSP solver requires nonnegative weights.
pub trait GraphWeight:
    Ord + Add<Output = Self> + Sub<Output = Self> + Sized + Copy + std::fmt::Debug
{
    /// The infinity value of this type.
    fn infinity() -> Self;

    /// The zero value of this type.
    fn zero() -> Self;

    /// Adds the given weight to this weight, returning infinity if either
    /// summand is infinity or the sum would overflow.
    fn saturating_add(self, rhs: Self) -> Self;

    /// Returns true if this weight is the infinity value.
    fn is_infinity(self) -> bool {
        self == Self::infinity()
    }
}

macro_rules! impl_graph_weight {
    ($weight_type:ty) => {
        impl GraphWeight for $weight_type {
            #[inline]
            fn infinity() -> Self {
                Self::MAX
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                self.checked_add(rhs).unwrap_or(Self::MAX)
            }
        }
    };
}

impl_graph_weight!(usize);
impl_graph_weight!(u8);
impl_graph_weight!(u16);
impl_graph_weight!(u32);
impl_graph_weight!(u64);
impl_graph_weight!(u128);
