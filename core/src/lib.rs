//! Sparse 3D point-update / box-sum backend.
//!
//! The universe is a cube of integer cells, all zero until written. Cells are
//! stored in a [`SparseRegionTree`](tree::SparseRegionTree), an octree whose
//! nodes each cache the sum of every cell beneath them. Only the nodes along
//! the path to a written cell are ever allocated, so a huge universe with a
//! handful of writes costs a handful of nodes.
//!
//! The [`io`] module contains the line-oriented command loop that drives a
//! fresh tree per test case.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod axis;
pub mod io;
pub mod num;
pub mod rect3;
pub mod tree;
pub mod vec3;

pub mod traits {
    //! Traits that are useful to have in scope.

    pub use crate::num::RegionValue;
    pub use crate::rect3::CanContain;
}

pub mod prelude {
    //! Everything needed to build and query a tree.

    pub use crate::traits::*;

    pub use crate::axis::Axis;
    pub use crate::io::{run, Command, IoError, IoResult, RunOptions, RunSummary, Session};
    pub use crate::rect3::IRect3D;
    pub use crate::tree::{Layer, RegionError, RegionResult, SparseRegionTree};
    pub use crate::vec3::IVec3D;
}
