//! 3D integer rectangular prisms ("boxes").
//!
//! Boxes are inclusive on both ends: a box whose minimum and maximum corners
//! are equal contains exactly one cell.

use std::fmt;

use crate::axis::{Axis, AXES, OCTANT_COUNT};
use crate::vec3::IVec3D;

/// Axis-aligned box of cells with `isize` coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IRect3D {
    /// Most negative corner.
    start: IVec3D,
    /// Size along each axis.
    size: IVec3D,
}

impl fmt::Display for IRect3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IRect3D({}..{})", self.min(), self.max())
    }
}

impl IRect3D {
    /// Creates a box with the given starting position and size.
    ///
    /// # Panics
    ///
    /// This function panics if `size` is zero or negative along any axis.
    #[inline]
    pub fn with_size(start: IVec3D, size: IVec3D) -> Self {
        assert!(
            IVec3D::repeat(1).all_le(size),
            "IRect3D must have positive volume",
        );
        Self { start, size }
    }

    /// Creates a box spanning between the given positions (inclusive).
    ///
    /// The corners may be given in any order; each axis is sorted
    /// independently.
    #[inline]
    pub fn span(a: IVec3D, b: IVec3D) -> Self {
        let start = IVec3D::min(a, b);
        let size = IVec3D::max(a, b) - start + 1;
        Self { start, size }
    }

    /// Creates a box containing only the given position.
    #[inline]
    pub fn single_cell(pos: IVec3D) -> Self {
        Self {
            start: pos,
            size: IVec3D::repeat(1),
        }
    }

    /// Creates a cube with the given minimum corner and side length.
    ///
    /// # Panics
    ///
    /// This function panics if `len` is zero or negative.
    #[inline]
    pub fn cube(start: IVec3D, len: isize) -> Self {
        Self::with_size(start, IVec3D::repeat(len))
    }

    /// Returns the minimum (most negative) corner of the box.
    #[inline]
    pub fn min(&self) -> IVec3D {
        self.start
    }
    /// Returns the maximum (most positive) corner of the box.
    #[inline]
    pub fn max(&self) -> IVec3D {
        self.start + self.size - 1
    }
    /// Returns a vector of the lengths of the box along each axis.
    #[inline]
    pub fn size(&self) -> IVec3D {
        self.size
    }
    /// Returns the length of the box along the given axis.
    #[inline]
    pub fn len(&self, axis: Axis) -> isize {
        self.size[axis]
    }
    /// Returns the number of cells in the box.
    #[inline]
    pub fn count(&self) -> isize {
        self.size.product()
    }

    /// Returns `true` if the two boxes share at least one cell.
    #[inline]
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn intersects(&self, other: &Self) -> bool {
        // Iff `self` and `other` intersect along all axes, then they truly
        // intersect in 3D space.
        AXES.iter().all(|&ax| {
            //   `self` is "below" `other`.          `other` is "below" `self`.
            !(self.max()[ax] < other.min()[ax] || other.max()[ax] < self.min()[ax])
        })
    }

    /// Returns the intersection of two boxes, or `None` if they do not
    /// intersect.
    #[inline]
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let new_min = IVec3D::max(self.min(), other.min());
        let new_max = IVec3D::min(self.max(), other.max());
        if new_min.all_le(new_max) {
            Some(Self::span(new_min, new_max))
        } else {
            None
        }
    }

    /// Returns one octant of the box.
    ///
    /// Each axis is split so that the lower half is `[min, min + len/2 - 1]`
    /// and the upper half is `[min + len/2, max]`. Octant `index` takes the
    /// upper half along each axis whose bit (see `Axis::bit()`) is set.
    ///
    /// # Panics
    ///
    /// This method panics if the box is only one cell long along any axis, or
    /// if `index` is not less than 8.
    #[inline]
    pub fn octant(&self, index: usize) -> Self {
        assert!(index < OCTANT_COUNT, "octant index out of range: {}", index);
        assert!(
            IVec3D::repeat(2).all_le(self.size),
            "cannot subdivide {}",
            self,
        );
        let mut start = self.start;
        let mut size = self.size;
        for &ax in AXES {
            let lower_len = self.size[ax] / 2;
            if index & ax.bit() == 0 {
                size[ax] = lower_len;
            } else {
                start[ax] += lower_len;
                size[ax] -= lower_len;
            }
        }
        Self { start, size }
    }

    /// Returns all eight octants of the box, ordered by octant index.
    ///
    /// # Panics
    ///
    /// This method panics if the box is only one cell long along any axis.
    #[inline]
    pub fn octants(&self) -> [Self; OCTANT_COUNT] {
        std::array::from_fn(|i| self.octant(i))
    }

    /// Returns the index of the octant containing `pos`, or `None` if `pos` is
    /// outside the box.
    #[inline]
    pub fn octant_index_of(&self, pos: IVec3D) -> Option<usize> {
        if !self.contains(&pos) {
            return None;
        }
        Some(
            AXES.iter()
                .filter(|&&ax| pos[ax] >= self.start[ax] + self.size[ax] / 2)
                .map(|&ax| ax.bit())
                .sum(),
        )
    }
}

/// Trait to allow overloading of the `contains()` method.
pub trait CanContain<I> {
    /// Returns `true` if `inner` is "contained" within `self`.
    fn contains(&self, inner: &I) -> bool;
}

impl CanContain<IVec3D> for IRect3D {
    /// Returns `true` if `pos` is contained within the box.
    #[inline]
    fn contains(&self, pos: &IVec3D) -> bool {
        self.min().all_le(*pos) && pos.all_le(self.max())
    }
}
impl CanContain<IRect3D> for IRect3D {
    /// Returns `true` if `rect` is completely contained within the box; i.e.,
    /// the intersection of the two equals `rect`.
    #[inline]
    fn contains(&self, rect: &IRect3D) -> bool {
        self.contains(&rect.min()) && self.contains(&rect.max())
    }
}

#[cfg(test)]
pub(crate) mod tests;
