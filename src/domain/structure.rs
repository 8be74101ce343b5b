//! Aggregate structure port
//!
//! The session and the renderers only talk to this trait. Internal node
//! access is an explicitly declared capability: implementations that can
//! expose their node array return `Some` from [`AggregateStructure::internal_view`],
//! everything else keeps the default `None` and is rendered through range
//! queries instead.

use crate::error::StructureError;

use super::value::Value;
use super::variant::Variant;

/// Fixed-length container with point updates and range aggregation.
pub trait AggregateStructure {
    /// The aggregate computed by [`range_aggregate`](Self::range_aggregate).
    fn variant(&self) -> Variant;

    /// Number of elements. Never changes after construction.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<Value, StructureError>;

    fn set(&mut self, index: usize, value: Value) -> Result<(), StructureError>;

    /// `set(index, get(index) + delta)`.
    fn add_at(&mut self, index: usize, delta: Value) -> Result<(), StructureError>;

    /// Aggregate over the half-open range `[left, right)`.
    fn range_aggregate(&self, left: usize, right: usize) -> Result<Value, StructureError>;

    /// Direct access to the internal nodes, if the implementation has them.
    fn internal_view(&self) -> Option<InternalView<'_>> {
        None
    }
}

/// Read-only view of a heap-ordered node array.
///
/// The node at `(level, position)` is stored at `2^level - 1 + position`:
/// root at 0, level 1 at 1..=2, level 2 at 3..=6 and so on.
#[derive(Debug, Clone, Copy)]
pub struct InternalView<'a> {
    nodes: &'a [Value],
}

impl<'a> InternalView<'a> {
    pub fn new(nodes: &'a [Value]) -> Self {
        Self { nodes }
    }

    pub fn node_index(level: u32, position: usize) -> Option<usize> {
        1usize
            .checked_shl(level)
            .and_then(|width| (width - 1).checked_add(position))
    }

    /// The node at `(level, position)`, or `None` when outside the array.
    pub fn node(&self, level: u32, position: usize) -> Option<Value> {
        if position >= 1usize.checked_shl(level)? {
            return None;
        }
        let idx = Self::node_index(level, position)?;
        self.nodes.get(idx).copied()
    }
}
