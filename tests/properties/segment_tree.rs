//! Property tests for the segment tree against a brute-force model.

use proptest::prelude::*;

use segee::{AggregateStructure, SegmentTree, Value, Variant};

fn element() -> impl Strategy<Value = Value> {
    prop_oneof![
        8 => (-1_000i64..1_000).prop_map(Value::from),
        1 => Just(Value::PosInfinity),
        1 => Just(Value::NegInfinity),
    ]
}

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Sum), Just(Variant::Min), Just(Variant::Max)]
}

fn model_aggregate(variant: Variant, items: &[Value]) -> Value {
    items
        .iter()
        .fold(variant.identity(), |acc, &v| variant.combine(acc, v))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every range query agrees with folding the elements.
    #[test]
    fn property_range_aggregate_matches_model(
        variant in variant(),
        values in proptest::collection::vec(element(), 1..=16),
    ) {
        let mut tree = SegmentTree::new(variant, values.len());
        for (i, &v) in values.iter().enumerate() {
            tree.set(i, v).unwrap();
        }

        for left in 0..values.len() {
            for right in left + 1..=values.len() {
                prop_assert_eq!(
                    tree.range_aggregate(left, right).unwrap(),
                    model_aggregate(variant, &values[left..right]),
                    "[{}, {})", left, right
                );
            }
        }
    }

    /// PROPERTY: Set then single-element sum query returns the value.
    #[test]
    fn property_set_then_point_query(index in 0usize..16, v in element()) {
        let mut tree = SegmentTree::new(Variant::Sum, 16);
        tree.set(index, v).unwrap();
        prop_assert_eq!(tree.range_aggregate(index, index + 1).unwrap(), v);
    }

    /// PROPERTY: Two adds on a zero element accumulate.
    #[test]
    fn property_adds_accumulate(index in 0usize..16, a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let mut tree = SegmentTree::new(Variant::Sum, 16);
        tree.add_at(index, Value::from(a)).unwrap();
        prop_assert_eq!(tree.range_aggregate(index, index + 1).unwrap(), Value::from(a));
        tree.add_at(index, Value::from(b)).unwrap();
        prop_assert_eq!(tree.get(index).unwrap(), Value::from(a + b));
    }

    /// PROPERTY: Length never changes, whatever is written.
    #[test]
    fn property_length_is_fixed(
        variant in variant(),
        writes in proptest::collection::vec((0usize..16, element()), 0..32),
    ) {
        let mut tree = SegmentTree::new(variant, 16);
        for (i, v) in writes {
            tree.set(i, v).unwrap();
        }
        prop_assert_eq!(tree.len(), 16);
        prop_assert!(tree.set(16, Value::ZERO).is_err());
    }
}
