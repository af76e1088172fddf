//! 3D integer vectors.
//!
//! Cell coordinates are `isize` so that intermediate results such as
//! `min - 1` never wrap, even though every coordinate in a universe is
//! positive.

use std::fmt;
use std::ops::*;

use crate::axis::{Axis, AXES};

/// 3-dimensional vector with `isize` components.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IVec3D(pub [isize; 3]);

impl fmt::Display for IVec3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self[Axis::X], self[Axis::Y], self[Axis::Z])
    }
}

// Implement indexing using `Axis`.
impl Index<Axis> for IVec3D {
    type Output = isize;
    #[inline]
    fn index(&self, axis: Axis) -> &isize {
        &self.0[axis as usize]
    }
}
impl IndexMut<Axis> for IVec3D {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut isize {
        &mut self.0[axis as usize]
    }
}

impl From<[isize; 3]> for IVec3D {
    #[inline]
    fn from(array: [isize; 3]) -> Self {
        Self(array)
    }
}

impl IVec3D {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: isize, y: isize, z: isize) -> Self {
        Self([x, y, z])
    }
    /// Creates a vector consisting of all zeros.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }
    /// Creates a vector using `value` for all components.
    #[inline]
    pub const fn repeat(value: isize) -> Self {
        Self([value; 3])
    }
    /// Creates a vector by evaluating `generator` for each axis.
    #[inline]
    pub fn from_fn(mut generator: impl FnMut(Axis) -> isize) -> Self {
        let mut ret = Self::default();
        for &ax in AXES {
            ret[ax] = generator(ax);
        }
        ret
    }

    /// Creates a vector by taking the minimum of the corresponding components
    /// in `v1` and `v2`.
    #[inline]
    pub fn min(v1: Self, v2: Self) -> Self {
        Self::from_fn(|ax| std::cmp::min(v1[ax], v2[ax]))
    }
    /// Creates a vector by taking the maximum of the corresponding components
    /// in `v1` and `v2`.
    #[inline]
    pub fn max(v1: Self, v2: Self) -> Self {
        Self::from_fn(|ax| std::cmp::max(v1[ax], v2[ax]))
    }

    /// Returns the sum of the components of the vector.
    #[inline]
    pub fn sum(self) -> isize {
        self.0.iter().sum()
    }
    /// Returns the product of the components of the vector.
    #[inline]
    pub fn product(self) -> isize {
        self.0.iter().product()
    }

    /// Returns `true` if every component of `self` is less than or equal to
    /// the corresponding component of `other`.
    #[inline]
    pub fn all_le(self, other: Self) -> bool {
        AXES.iter().all(|&ax| self[ax] <= other[ax])
    }
}

impl Add for IVec3D {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|ax| self[ax] + rhs[ax])
    }
}
impl Sub for IVec3D {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|ax| self[ax] - rhs[ax])
    }
}
impl Add<isize> for IVec3D {
    type Output = Self;
    #[inline]
    fn add(self, rhs: isize) -> Self {
        Self::from_fn(|ax| self[ax] + rhs)
    }
}
impl Sub<isize> for IVec3D {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: isize) -> Self {
        Self::from_fn(|ax| self[ax] - rhs)
    }
}
impl Neg for IVec3D {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_fn(|ax| -self[ax])
    }
}
impl AddAssign for IVec3D {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign for IVec3D {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
pub(crate) mod tests;
