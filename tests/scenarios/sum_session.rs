//! Scenario: sum tree with infinities
//!
//! Journey: pick the sum tree, set two elements (one infinite), query,
//! add to an element and query again.

use super::{history_rows, play};

#[test]
fn scenario_sum_updates_are_silent_and_queries_answer() {
    let console = play(&[
        "1", "", "s 0 10", "s 3 inf", "q 0 4", "a 0 5", "q 0 1", "quit",
    ]);

    let rows = history_rows(&console);
    assert_eq!(
        &rows[..8],
        &[
            "> s 0 10", "> s 3 inf", "> q 0 4", "inf", "> a 0 5", "> q 0 1", "15", ">",
        ]
    );
    assert_eq!(console.shown.last().map(String::as_str), Some("Goodbye!"));
}

#[test]
fn scenario_sum_pyramid_shows_infinite_root() {
    let console = play(&["sum", "", "s 0 10", "s 3 inf", "exit"]);

    let frame = console.last_frame().expect("frame");
    // Pyramid column starts after the 32-wide panel and the 8-wide gap.
    let root_row = &frame.lines()[2];
    let pyramid: String = root_row.chars().skip(40).collect();
    assert!(pyramid.contains("inf"), "root row: {}", root_row);
    assert!(frame
        .lines()
        .last()
        .is_some_and(|indices| indices.trim_end().ends_with("15")));
}
