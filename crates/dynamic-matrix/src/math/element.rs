use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

/// Numeric capability required by container arithmetic.
///
/// Implemented for every type that can be default-constructed, cloned,
/// compared for equality and combined with `+`, `-` and `*` into itself,
/// and that has an additive identity (the dot-product accumulator).
pub trait Element:
    Clone + Default + PartialEq + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Element for T where
    T: Clone
        + Default
        + PartialEq
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
{
}

/// Primitive integer usable as a checked index, signed or unsigned.
pub trait ElementIndex: Copy {
    /// Offset into storage, or `None` when the value is negative or does not fit.
    fn to_offset(self) -> Option<usize>;

    /// The index as reported in errors.
    fn to_signed(self) -> i128;
}

macro_rules! impl_element_index {
    ($($t:ty),*) => {
        $(
            impl ElementIndex for $t {
                #[inline]
                fn to_offset(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_signed(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_element_index!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indices_have_no_offset() {
        assert_eq!((-1i32).to_offset(), None);
        assert_eq!((-1i64).to_signed(), -1);
        assert_eq!(7u8.to_offset(), Some(7));
        assert_eq!(usize::MAX.to_signed(), usize::MAX as i128);
    }
}
