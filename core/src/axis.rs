//! Enumeration of axes.
//!
//! These are mainly used for indexing specific components in an `IVec3D` and
//! for picking an octant of a region.

pub use Axis::*;

/// Enumeration of the three axes of the universe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis.
    X = 0,
    /// Y axis.
    Y = 1,
    /// Z axis.
    Z = 2,
}

impl Axis {
    /// Returns the name of the axis.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Returns the bit in an octant index corresponding to this axis.
    ///
    /// An octant takes the upper half of its parent along `axis` iff this bit
    /// is set in its index.
    #[inline]
    pub const fn bit(self) -> usize {
        1 << self as usize
    }
}

/// List of axes in order.
pub const AXES: &[Axis] = &[Axis::X, Axis::Y, Axis::Z];

/// Number of octants in a subdivided region.
pub const OCTANT_COUNT: usize = 1 << AXES.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_bits() {
        assert_eq!(vec![1, 2, 4], AXES.iter().map(|ax| ax.bit()).collect::<Vec<_>>());
        assert_eq!(8, OCTANT_COUNT);
        assert_eq!("Z", Z.name());
    }
}
