//! Scenario: min tree with a negative infinity

use super::{history_rows, play};

#[test]
fn scenario_min_query_sees_negative_infinity() {
    let console = play(&["2", "", "s 2 -inf", "q 0 16", "quit"]);

    let rows = history_rows(&console);
    assert_eq!(&rows[..3], &["> s 2 -inf", "> q 0 16", "-inf"]);
}

#[test]
fn scenario_min_of_fresh_tree_is_zero() {
    let console = play(&["min", "", "q 0 16", "quit"]);

    let rows = history_rows(&console);
    assert_eq!(&rows[..2], &["> q 0 16", "0"]);
}

#[test]
fn scenario_home_switches_variant() {
    let console = play(&["2", "", "s 0 -5", "/home", "3", "", "s 0 -5", "q 0 16", "quit"]);

    // The max tree starts from scratch, so 0 beats -5.
    let rows = history_rows(&console);
    assert_eq!(&rows[..3], &["> s 0 -5", "> q 0 16", "0"]);
}
