//! Domain layer
//!
//! Extended values, aggregation variants, the structure port and the
//! segment tree that implements it.

pub mod segment_tree;
pub mod structure;
pub mod value;
pub mod variant;

pub use segment_tree::SegmentTree;
pub use structure::{AggregateStructure, InternalView};
pub use value::Value;
pub use variant::Variant;

/// Depth of the tree the console works with (`2^4 = 16` leaves).
pub const TREE_DEPTH: u32 = 4;

/// Number of elements in a session structure.
pub const TREE_SIZE: usize = 1 << TREE_DEPTH;

/// Build the structure for a variant at the session size.
pub fn build_structure(variant: Variant) -> Box<dyn AggregateStructure> {
    Box::new(SegmentTree::new(variant, TREE_SIZE))
}
