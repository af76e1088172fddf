//! Wrapper type representing the layer of a node.

/// Layer of a node (32-bit unsigned integer).
///
/// Every node in a `SparseRegionTree` is a cube, and its `Layer` is the base-2
/// log of the number of cells along each axis. A node at `Layer(0)` is a leaf
/// holding a single cell; a node at `Layer(5)` spans 32x32x32 cells and has up
/// to eight children at `Layer(4)`.
#[derive(Debug, Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Layer(pub u32);

impl Layer {
    /// Highest layer supported. Cell coordinates are `isize`, and a few bits
    /// of headroom keep `min + len` from overflowing.
    pub const MAX: Layer = Layer(isize::BITS - 4);

    /// Returns the smallest layer whose nodes are at least `len` cells long
    /// along each axis.
    ///
    /// Zero and one both yield `Layer(0)`.
    #[inline]
    pub fn covering(len: usize) -> Self {
        match len.checked_next_power_of_two() {
            Some(len) => Self(len.trailing_zeros()),
            None => Self(usize::BITS),
        }
    }

    /// Returns `true` if a node at this layer is a single cell.
    #[inline]
    pub const fn is_leaf(self) -> bool {
        self.0 == 0
    }
    /// Returns the layer of this node's children.
    ///
    /// # Panics
    ///
    /// This method panics if called on `Layer(0)`.
    #[inline]
    pub fn child_layer(self) -> Layer {
        Layer(
            self.0
                .checked_sub(1)
                .expect("Tried to get layer below minimum"),
        )
    }

    /// Returns the number of cells along each axis of a node at this layer.
    ///
    /// # Panics
    ///
    /// This method panics if the layer is above `Layer::MAX`.
    #[inline]
    pub fn len(self) -> isize {
        assert!(self <= Self::MAX, "layer {} is too large", self.0);
        1 << self.0
    }
}
