//! Property tests for command parsing.

use proptest::prelude::*;

use segee::{parse, Command, CommandError, Value, TREE_SIZE};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics, whatever the user types.
    #[test]
    fn property_parse_never_panics(line in "\\PC{0,60}") {
        let _ = parse(&line, TREE_SIZE);
    }

    /// PROPERTY: Any empty or inverted range is rejected for every bound.
    #[test]
    fn property_non_increasing_range_is_range_error(left in -40i64..40, delta in 0i64..40) {
        let right = left - delta;
        let result = parse(&format!("q {} {}", left, right), TREE_SIZE);
        let is_range_error = matches!(result, Err(CommandError::Range { .. }));
        prop_assert!(is_range_error, "{:?}", result);
    }

    /// PROPERTY: Ranges reaching past either end are errors, never clamped.
    #[test]
    fn property_out_of_bounds_range_is_rejected(left in -20i64..0, right in 17i64..40) {
        let left_input = format!("q {} 5", left);
        let right_input = format!("q 0 {}", right);
        prop_assert!(parse(&left_input, TREE_SIZE).is_err());
        prop_assert!(parse(&right_input, TREE_SIZE).is_err());
    }

    /// PROPERTY: Valid point commands keep index and value.
    #[test]
    fn property_valid_set_round_trips(index in 0usize..16, value in any::<i64>(), add in any::<bool>()) {
        let keyword = if add { "a" } else { "set" };
        let parsed = parse(&format!("{} {} {}", keyword, index, value), TREE_SIZE);
        let expected = if add {
            Command::Add { index, value: Value::from(value) }
        } else {
            Command::Set { index, value: Value::from(value) }
        };
        prop_assert_eq!(parsed, Ok(Some(expected)));
    }

    /// PROPERTY: Keywords are case-insensitive.
    #[test]
    fn property_keywords_ignore_case(upper in proptest::collection::vec(any::<bool>(), 5)) {
        let word: String = "query"
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        let parsed = parse(&format!("{} 0 16", word), TREE_SIZE);
        prop_assert_eq!(parsed, Ok(Some(Command::Query { left: 0, right: 16 })));
    }
}
