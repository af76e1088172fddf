//! Numeric traits for cell values.
//!
//! Cell values are summed into every ancestor node, and ancestors are brought
//! up to date by adding the difference between a child's new and old sums, so
//! a value type must support both addition and subtraction. Sums are checked, so
//! the value type must also support checked arithmetic. Any signed primitive
//! integer works; `i64` is the default everywhere.

pub use num::{CheckedAdd, CheckedSub, Num, One, Signed, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{AddAssign, SubAssign};

/// "Trait alias" for types that can be stored in cells of a
/// `SparseRegionTree`.
pub trait RegionValue:
    'static
    + fmt::Debug
    + fmt::Display
    + Copy
    + Eq
    + Num
    + CheckedAdd
    + CheckedSub
    + AddAssign
    + SubAssign
    + Sum
{
}
impl<T> RegionValue for T where
    T: 'static
        + fmt::Debug
        + fmt::Display
        + Copy
        + Eq
        + Num
        + CheckedAdd
        + CheckedSub
        + AddAssign
        + SubAssign
        + Sum
{
}

/// Returns `total - old + new`, or `None` if the result does not fit in `T`.
///
/// For signed integers, whenever the result fits, at least one of the two
/// orders of evaluation stays in range throughout.
pub(crate) fn checked_replace<T: RegionValue>(total: T, old: T, new: T) -> Option<T> {
    total
        .checked_sub(&old)
        .and_then(|t| t.checked_add(&new))
        .or_else(|| total.checked_add(&new).and_then(|t| t.checked_sub(&old)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total<T: RegionValue>(values: &[T]) -> T {
        values.iter().copied().sum()
    }

    #[test]
    fn test_region_value_primitives() {
        assert_eq!(6_i64, total(&[1, 2, 3]));
        assert_eq!(-1_i32, total(&[1, -2]));
        assert_eq!(0_i128, total::<i128>(&[]));
        assert!(<i64 as Zero>::is_zero(&total::<i64>(&[5, -5])));
    }

    #[test]
    fn test_checked_replace() {
        assert_eq!(Some(7_i64), checked_replace(5, 3, 5));
        // Only one order of evaluation stays in range.
        assert_eq!(Some(80_i8), checked_replace(100, -100, -120));
        assert_eq!(Some(-80_i8), checked_replace(-100, 100, 120));
        assert_eq!(None, checked_replace(i64::MAX, 0, 1));
        assert_eq!(None, checked_replace(i64::MIN, 1, 0));
        assert_eq!(Some(i64::MAX), checked_replace(i64::MAX, -1, -1));
    }
}
