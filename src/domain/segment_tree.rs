//! Array-backed segment tree
//!
//! Nodes live in a single heap-ordered vector of `2 * capacity - 1` entries
//! where `capacity = len.next_power_of_two()`. Children of node `i` are
//! `2i + 1` and `2i + 2`; leaf `k` is node `capacity - 1 + k`. Padding
//! leaves past `len` hold the variant identity.

use crate::error::StructureError;

use super::structure::{AggregateStructure, InternalView};
use super::value::Value;
use super::variant::Variant;

#[derive(Debug, Clone)]
pub struct SegmentTree {
    variant: Variant,
    len: usize,
    capacity: usize,
    nodes: Vec<Value>,
}

impl SegmentTree {
    /// A tree of `len` zero elements.
    pub fn new(variant: Variant, len: usize) -> Self {
        let capacity = len.max(1).next_power_of_two();
        let mut nodes = vec![variant.identity(); 2 * capacity - 1];
        for leaf in &mut nodes[capacity - 1..capacity - 1 + len] {
            *leaf = Value::ZERO;
        }
        let mut tree = Self {
            variant,
            len,
            capacity,
            nodes,
        };
        for node in (0..capacity - 1).rev() {
            tree.pull(node);
        }
        tree
    }

    fn pull(&mut self, node: usize) {
        self.nodes[node] = self
            .variant
            .combine(self.nodes[2 * node + 1], self.nodes[2 * node + 2]);
    }

    fn leaf(&self, index: usize) -> usize {
        self.capacity - 1 + index
    }

    fn check_index(&self, index: usize) -> Result<(), StructureError> {
        if index < self.len {
            Ok(())
        } else {
            Err(StructureError::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl AggregateStructure for SegmentTree {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<Value, StructureError> {
        self.check_index(index)?;
        Ok(self.nodes[self.leaf(index)])
    }

    fn set(&mut self, index: usize, value: Value) -> Result<(), StructureError> {
        self.check_index(index)?;
        let mut node = self.leaf(index);
        self.nodes[node] = value;
        while node > 0 {
            node = (node - 1) / 2;
            self.pull(node);
        }
        Ok(())
    }

    fn add_at(&mut self, index: usize, delta: Value) -> Result<(), StructureError> {
        let current = self.get(index)?;
        let next = current.add(delta);
        if !next.fits_element() {
            return Err(StructureError::Overflow {
                value: current.to_string(),
                delta: delta.to_string(),
            });
        }
        self.set(index, next)
    }

    fn range_aggregate(&self, left: usize, right: usize) -> Result<Value, StructureError> {
        if left >= right || right > self.len {
            return Err(StructureError::InvalidRange {
                left,
                right,
                len: self.len,
            });
        }

        // Bottom-up walk over leaf positions; order is kept so that the
        // result is the same as a left-to-right fold.
        let mut acc_left = self.variant.identity();
        let mut acc_right = self.variant.identity();
        let mut lo = self.leaf(left);
        let mut hi = self.leaf(right);
        while lo < hi {
            // `lo` is a right child when its heap index is even.
            if lo % 2 == 0 {
                acc_left = self.variant.combine(acc_left, self.nodes[lo]);
                lo += 1;
            }
            if hi % 2 == 0 {
                hi -= 1;
                acc_right = self.variant.combine(self.nodes[hi], acc_right);
            }
            lo = (lo - 1) / 2;
            hi = (hi - 1) / 2;
        }
        Ok(self.variant.combine(acc_left, acc_right))
    }

    fn internal_view(&self) -> Option<InternalView<'_>> {
        Some(InternalView::new(&self.nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute(variant: Variant, values: &[Value], l: usize, r: usize) -> Value {
        values[l..r]
            .iter()
            .fold(variant.identity(), |acc, v| variant.combine(acc, *v))
    }

    #[test]
    fn fresh_tree_is_all_zero_for_every_variant() {
        for variant in Variant::ALL {
            let tree = SegmentTree::new(variant, 16);
            assert_eq!(tree.range_aggregate(0, 16), Ok(Value::ZERO));
            assert_eq!(tree.get(15), Ok(Value::ZERO));
        }
    }

    #[test]
    fn range_aggregate_matches_brute_force() {
        let raw = [5, -3, 8, 0, 12, -7, 4, 4, 1, 9, -2, 6, 3, -8, 10, 2];
        for variant in Variant::ALL {
            let mut tree = SegmentTree::new(variant, raw.len());
            let values: Vec<Value> = raw.iter().map(|v| Value::from(*v as i64)).collect();
            for (i, v) in values.iter().enumerate() {
                tree.set(i, *v).unwrap();
            }
            for l in 0..raw.len() {
                for r in l + 1..=raw.len() {
                    assert_eq!(
                        tree.range_aggregate(l, r).unwrap(),
                        brute(variant, &values, l, r),
                        "{variant} [{l}, {r})"
                    );
                }
            }
        }
    }

    #[test]
    fn non_power_of_two_length_pads_with_identity() {
        let mut tree = SegmentTree::new(Variant::Min, 5);
        tree.set(4, Value::from(-1)).unwrap();
        assert_eq!(tree.range_aggregate(0, 5), Ok(Value::from(-1)));
        assert_eq!(tree.range_aggregate(0, 4), Ok(Value::ZERO));
    }

    #[test]
    fn root_node_tracks_the_whole_range() {
        let mut tree = SegmentTree::new(Variant::Sum, 16);
        tree.set(0, Value::from(10)).unwrap();
        tree.add_at(0, Value::from(5)).unwrap();
        tree.set(15, Value::from(1)).unwrap();
        let view = tree.internal_view().unwrap();
        assert_eq!(view.node(0, 0), Some(Value::from(16)));
        assert_eq!(view.node(1, 1), Some(Value::from(1)));
    }

    #[test]
    fn invalid_access_is_an_error_not_a_panic() {
        let mut tree = SegmentTree::new(Variant::Sum, 16);
        assert!(tree.get(16).is_err());
        assert!(tree.set(99, Value::ZERO).is_err());
        assert!(tree.range_aggregate(4, 4).is_err());
        assert!(tree.range_aggregate(0, 17).is_err());
    }

    #[test]
    fn add_overflow_leaves_element_unchanged() {
        let mut tree = SegmentTree::new(Variant::Max, 16);
        tree.set(3, Value::from(i64::MAX)).unwrap();
        let err = tree.add_at(3, Value::from(1)).unwrap_err();
        assert!(matches!(err, StructureError::Overflow { .. }));
        assert_eq!(tree.get(3), Ok(Value::from(i64::MAX)));
    }
}
