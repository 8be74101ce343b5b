//! Scenario: reset and error recovery

use super::{history_rows, play};

#[test]
fn scenario_reset_clears_structure_and_history() {
    let console = play(&["1", "", "s 5 7", "q 0 16", "/reset", "q 0 16", "quit"]);

    let rows = history_rows(&console);
    assert_eq!(&rows[..3], &["> q 0 16", "0", ">"]);
}

#[test]
fn scenario_malformed_value_leaves_structure_unchanged() {
    let console = play(&["1", "", "s 0 4", "s 0 abc", "q 0 1", "quit"]);

    let rows = history_rows(&console);
    assert_eq!(rows[0], "> s 0 4");
    assert_eq!(rows[1], "> s 0 abc");
    assert!(rows[2].starts_with("Invalid format: 'abc'"), "{}", rows[2]);
    assert_eq!(rows[3], "> q 0 1");
    assert_eq!(rows[4], "4");
}

#[test]
fn scenario_every_error_kind_is_one_history_entry() {
    let console = play(&[
        "1", "", "s 16 1", "q 3 3", "q 0 17", "s 1", "frob", "/nope", "quit",
    ]);

    let rows = history_rows(&console);
    assert!(rows[1].starts_with("Index Error: 16"), "{}", rows[1]);
    assert!(rows[3].starts_with("Range Error: [3, 3)"), "{}", rows[3]);
    assert!(rows[5].starts_with("Range Error: [0, 17)"), "{}", rows[5]);
    assert!(rows[7].starts_with("Usage: s"), "{}", rows[7]);
    assert!(rows[9].starts_with("Unknown command: 'frob'"), "{}", rows[9]);
    assert!(rows[11].starts_with("Unknown slash command"), "{}", rows[11]);
    assert_eq!(rows[12], ">");
}

#[test]
fn scenario_history_keeps_only_the_latest_twenty_rows() {
    let mut script = vec!["1", ""];
    let queries: Vec<String> = (0..15).map(|i| format!("q {} {}", i, i + 1)).collect();
    script.extend(queries.iter().map(String::as_str));
    script.push("quit");

    let console = play(&script);

    // 15 queries produce 30 entries; the oldest ten have scrolled away.
    let rows = history_rows(&console);
    assert_eq!(rows.len(), 20);
    assert_eq!(rows[0], "> q 5 6");
    assert_eq!(rows[19], "0");
}
