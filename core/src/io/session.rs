//! State of a single test case.

use log::trace;

use super::command::{Command, CommandError, CommandResult};
use super::RunOptions;
use crate::axis::AXES;
use crate::num::RegionValue;
use crate::tree::SparseRegionTree;
use crate::vec3::IVec3D;

/// One test case: a fresh universe covering cells `1..=n` along each axis.
#[derive(Debug, Clone)]
pub struct Session<T: RegionValue = i64> {
    n: usize,
    strict_bounds: bool,
    tree: SparseRegionTree<T>,
}

impl<T: RegionValue> Session<T> {
    /// Creates a session for an `n`x`n`x`n` grid of zeros.
    pub fn new(n: usize, options: &RunOptions) -> Self {
        Self {
            n,
            strict_bounds: options.strict_bounds,
            tree: SparseRegionTree::with_min_len(n),
        }
    }

    /// Returns the declared side length of the grid.
    pub fn n(&self) -> usize {
        self.n
    }
    /// Returns the tree backing the grid.
    pub fn tree(&self) -> &SparseRegionTree<T> {
        &self.tree
    }

    /// Applies a command, returning the sum for a query or `None` for an
    /// update.
    pub fn apply(&mut self, command: Command<T>) -> CommandResult<Option<T>> {
        trace!("Applying {:?}", command);
        match command {
            Command::Update { pos, value } => {
                self.check_in_grid(pos)?;
                self.tree.set(pos, value)?;
                Ok(None)
            }
            Command::Query { min, max } => {
                if self.strict_bounds {
                    self.check_in_grid(min)?;
                    self.check_in_grid(max)?;
                    if !min.all_le(max) {
                        return Err(CommandError::InvertedBox { min, max });
                    }
                }
                Ok(Some(self.tree.sum_span(min, max)?))
            }
        }
    }

    /// With strict bounds, rejects positions outside the declared grid. The
    /// padding that rounds the universe up to a power of two is otherwise
    /// writable.
    fn check_in_grid(&self, pos: IVec3D) -> CommandResult<()> {
        let in_grid = AXES
            .iter()
            .all(|&ax| 1 <= pos[ax] && pos[ax] as usize <= self.n);
        if self.strict_bounds && !in_grid {
            Err(CommandError::OutOfRange { pos, n: self.n })
        } else {
            Ok(())
        }
    }
}
