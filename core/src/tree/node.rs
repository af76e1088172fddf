//! Nodes of a `SparseRegionTree`.

use log::trace;

use super::{Layer, RegionError, RegionResult};
use crate::axis::OCTANT_COUNT;
use crate::num::{checked_replace, RegionValue};
use crate::rect3::{CanContain, IRect3D};
use crate::vec3::IVec3D;

/// Cubic region of the universe along with the sum of every cell in it.
///
/// Children are materialized the first time a write lands inside them. An
/// empty child slot stands for an octant in which every cell is zero.
#[derive(Debug, Clone)]
pub(super) struct Node<T> {
    layer: Layer,
    rect: IRect3D,
    /// Sum of every cell in `rect`, which is also the sum of the aggregates of
    /// the materialized children.
    aggregate: T,
    children: [Option<Box<Node<T>>>; OCTANT_COUNT],
}

impl<T: RegionValue> Node<T> {
    /// Creates an all-zero node covering the cube with minimum corner
    /// `base_pos` at layer `layer`.
    pub fn new(layer: Layer, base_pos: IVec3D) -> Self {
        Self {
            layer,
            rect: IRect3D::cube(base_pos, layer.len()),
            aggregate: T::zero(),
            children: Default::default(),
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }
    pub fn rect(&self) -> IRect3D {
        self.rect
    }
    pub fn aggregate(&self) -> T {
        self.aggregate
    }

    /// Returns an iterator over the materialized children.
    pub fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.children.iter().flatten().map(|child| &**child)
    }

    /// Sets the cell at `pos` from `old` to `value` and returns the new
    /// aggregate of this node. `new_nodes` is incremented once for every child
    /// materialized on the way down.
    ///
    /// Positions outside the node are ignored. If any aggregate along the path
    /// would overflow, nothing is modified.
    pub fn set(
        &mut self,
        pos: IVec3D,
        old: T,
        value: T,
        new_nodes: &mut usize,
    ) -> RegionResult<T> {
        if self.layer.is_leaf() {
            if self.rect.min() == pos {
                self.aggregate = value;
            }
            return Ok(self.aggregate);
        }

        let index = match self.rect.octant_index_of(pos) {
            Some(i) => i,
            None => return Ok(self.aggregate),
        };
        let aggregate = checked_replace(self.aggregate, old, value)
            .ok_or(RegionError::Overflow { rect: self.rect })?;
        let child_layer = self.layer.child_layer();
        let child_base = self.rect.octant(index).min();
        // A new child is all zeros, so nothing below it can overflow.
        let child = self.children[index].get_or_insert_with(|| {
            trace!("Materializing {:?} node at {}", child_layer, child_base);
            *new_nodes += 1;
            Box::new(Node::new(child_layer, child_base))
        });
        child.set(pos, old, value, new_nodes)?;

        self.aggregate = aggregate;
        Ok(self.aggregate)
    }

    /// Returns the value of the cell at `pos`, or zero if no write has reached
    /// it.
    pub fn get(&self, pos: IVec3D) -> T {
        let mut node = self;
        while !node.layer.is_leaf() {
            let child = node
                .rect
                .octant_index_of(pos)
                .and_then(|i| node.children[i].as_deref());
            match child {
                Some(child) => node = child,
                None => return T::zero(),
            }
        }
        if node.rect.min() == pos {
            node.aggregate
        } else {
            T::zero()
        }
    }

    /// Returns the sum of every cell in both this node and `query`, or `None`
    /// if the sum over any materialized node overlapping `query` overflows.
    ///
    /// `visits` is incremented once for every node examined, including this
    /// one.
    pub fn sum(&self, query: &IRect3D, visits: &mut usize) -> Option<T> {
        *visits += 1;
        if query.contains(&self.rect) {
            // Fully covered; no need to look at the children.
            Some(self.aggregate)
        } else if self.rect.intersects(query) {
            self.children().try_fold(T::zero(), |total, child| {
                total.checked_add(&child.sum(query, visits)?)
            })
        } else {
            Some(T::zero())
        }
    }

    /// Returns the materialized node whose region is exactly `rect`, if there
    /// is one.
    pub fn find(&self, rect: &IRect3D) -> Option<&Node<T>> {
        let mut node = self;
        loop {
            if node.rect == *rect {
                return Some(node);
            }
            if node.layer.is_leaf() || !node.rect.contains(rect) {
                return None;
            }
            let index = node.rect.octant_index_of(rect.min())?;
            node = node.children[index].as_deref()?;
        }
    }

    /// Returns the number of materialized nodes in this subtree, including
    /// this one.
    pub fn count_nodes(&self) -> usize {
        1 + self.children().map(Node::count_nodes).sum::<usize>()
    }
}
