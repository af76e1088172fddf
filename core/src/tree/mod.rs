//! Sparse octree for point updates and box sums.
//!
//! The universe is a cube of `2^layer` cells along each axis. Each node of the
//! tree covers a cube of the universe and stores the sum of every cell inside
//! it; a node that has never been written to is simply absent. See `Node` for
//! the layout of a single node.
//!
//! Writes descend from the root to the single leaf holding the target cell,
//! materializing missing nodes along the way, and each ancestor is adjusted by
//! the change in its child's sum. Box sums stop descending as soon as a node
//! lies entirely inside the query box, and never allocate.

use log::debug;
use thiserror::Error;

mod layer;
mod node;

use crate::num::RegionValue;
use crate::rect3::{CanContain, IRect3D};
use crate::vec3::IVec3D;
pub use layer::Layer;
use node::Node;

/// Result type returned by fallible tree routines.
pub type RegionResult<T> = Result<T, RegionError>;

/// Error encountered when addressing a cell of a `SparseRegionTree`.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RegionError {
    #[error("position {pos} is outside the universe {universe}")]
    OutOfBounds { pos: IVec3D, universe: IRect3D },
    #[error("sum of the cells in {rect} overflows")]
    Overflow { rect: IRect3D },
}

/// Cubic universe of cells holding values of type `T`, stored as a sparse
/// octree.
///
/// Every cell starts at zero. Memory use is proportional to the number of
/// distinct cells written times the depth of the tree, regardless of the size
/// of the universe.
#[derive(Debug, Clone)]
pub struct SparseRegionTree<T: RegionValue = i64> {
    root: Node<T>,
    /// Number of materialized nodes, including the root.
    node_count: usize,
}

impl<T: RegionValue> SparseRegionTree<T> {
    /// Creates an all-zero universe `2^layer` cells wide with its minimum
    /// corner at `base_pos`.
    ///
    /// # Panics
    ///
    /// This function panics if `layer` is greater than `Layer::MAX`.
    pub fn new(layer: Layer, base_pos: IVec3D) -> Self {
        assert!(
            layer <= Layer::MAX,
            "universe layer {:?} exceeds maximum {:?}",
            layer,
            Layer::MAX,
        );
        debug!("Creating {}^3 universe at {}", layer.len(), base_pos);
        Self {
            root: Node::new(layer, base_pos),
            node_count: 1,
        }
    }
    /// Creates the smallest all-zero universe covering cells `1..=len` along
    /// each axis. The side length is rounded up to a power of two.
    ///
    /// # Panics
    ///
    /// This function panics if the rounded side length would exceed
    /// `Layer::MAX`.
    pub fn with_min_len(len: usize) -> Self {
        Self::new(Layer::covering(len), IVec3D::repeat(1))
    }

    /// Returns the layer of the root node.
    #[inline]
    pub fn layer(&self) -> Layer {
        self.root.layer()
    }
    /// Returns the length of the universe along each axis.
    #[inline]
    pub fn len(&self) -> isize {
        self.layer().len()
    }
    /// Returns the box covered by the universe.
    #[inline]
    pub fn rect(&self) -> IRect3D {
        self.root.rect()
    }
    /// Returns the number of nodes currently allocated, including the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }
    /// Returns the sum of every cell in the universe.
    #[inline]
    pub fn total(&self) -> T {
        self.root.aggregate()
    }

    /// Sets the cell at `pos` to `value`, replacing its old value, and returns
    /// the new sum of the whole universe.
    ///
    /// Fails without modifying the tree if `pos` is outside the universe, or if
    /// the sum of any node containing `pos` would no longer fit in `T`.
    pub fn set(&mut self, pos: IVec3D, value: T) -> RegionResult<T> {
        if !self.rect().contains(&pos) {
            return Err(RegionError::OutOfBounds {
                pos,
                universe: self.rect(),
            });
        }
        let old = self.root.get(pos);
        self.root.set(pos, old, value, &mut self.node_count)
    }

    /// Returns the value of the cell at `pos`. Cells outside the universe are
    /// zero.
    pub fn get(&self, pos: IVec3D) -> T {
        self.root.get(pos)
    }

    /// Returns the sum of every cell in `rect`. Parts of `rect` outside the
    /// universe contribute nothing.
    pub fn sum(&self, rect: &IRect3D) -> RegionResult<T> {
        self.sum_with_visits(rect).map(|(total, _)| total)
    }
    /// Returns the sum of every cell in the box spanning `a` and `b`
    /// (inclusive).
    ///
    /// The corners may be anywhere, even at the limits of `isize`; the box is
    /// clipped to the universe before it is summed.
    pub fn sum_span(&self, a: IVec3D, b: IVec3D) -> RegionResult<T> {
        let universe = self.rect();
        let min = IVec3D::max(IVec3D::min(a, b), universe.min());
        let max = IVec3D::min(IVec3D::max(a, b), universe.max());
        if min.all_le(max) {
            self.sum(&IRect3D::span(min, max))
        } else {
            Ok(T::zero())
        }
    }
    /// Returns the sum of every cell in `rect`, along with the number of nodes
    /// examined to compute it.
    pub fn sum_with_visits(&self, rect: &IRect3D) -> RegionResult<(T, usize)> {
        let mut visits = 0;
        let total = self
            .root
            .sum(rect, &mut visits)
            .ok_or(RegionError::Overflow { rect: *rect })?;
        Ok((total, visits))
    }

    /// Returns the cached sum of the materialized node covering exactly
    /// `rect`, or `None` if there is no such node.
    pub fn node_aggregate(&self, rect: &IRect3D) -> Option<T> {
        self.root.find(rect).map(|node| node.aggregate())
    }
}
