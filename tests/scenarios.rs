//! Scenario tests for Segee.
//!
//! Each scenario drives a whole session through a scripted console, from the
//! menu to the farewell, and checks what the user would see.
//!
//! Run with: cargo test --test scenarios

#[path = "scenarios/sum_session.rs"]
mod sum_session;

#[path = "scenarios/min_session.rs"]
mod min_session;

#[path = "scenarios/reset_and_errors.rs"]
mod reset_and_errors;

use segee::session::{run, RunOptions, ScriptedConsole};
use segee::ui::UiContext;

/// Run `script` from the menu and return the console for inspection.
pub fn play(script: &[&str]) -> ScriptedConsole {
    let mut console = ScriptedConsole::new(script.iter().copied());
    run(&mut console, &RunOptions::new(UiContext::plain())).expect("scripted console never fails");
    console
}

/// Text rows of the history panel in the last drawn frame.
pub fn history_rows(console: &ScriptedConsole) -> Vec<String> {
    let frame = console.last_frame().expect("at least one frame");
    frame.lines()[1..=20]
        .iter()
        .map(|line| {
            let inner: String = line.chars().skip(2).take(28).collect();
            inner.trim_end().to_string()
        })
        .collect()
}
