//! Interactive session
//!
//! A [`Session`] owns the live structure and its command history. The state
//! machine in [`machine`] moves it between the menu, the interactive loop and
//! the help screen.

pub mod console;
pub mod history;
pub mod machine;

pub use console::{Console, ScriptedConsole};
pub use history::{Entry, EntryKind, History, HISTORY_ROWS};
pub use machine::{run, Mode, RunOptions};

use crate::domain::{build_structure, AggregateStructure, Variant};
use crate::error::CommandError;
use crate::parser::{parse, Command};
use crate::ui::compositor::{compose, Frame};
use crate::ui::context::UiContext;
use crate::ui::views::history::{render_history, PANEL_WIDTH};
use crate::ui::views::pyramid::{depth_for, PyramidView};

/// What the state machine should do after a line has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Help,
    Home,
    Quit,
}

pub struct Session {
    variant: Variant,
    structure: Box<dyn AggregateStructure>,
    history: History,
}

impl Session {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            structure: build_structure(variant),
            history: History::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn structure(&self) -> &dyn AggregateStructure {
        self.structure.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Fresh structure of the same variant and an empty history.
    pub fn reset(&mut self) {
        self.structure = build_structure(self.variant);
        self.history.clear();
    }

    /// Parse and execute one input line.
    pub fn apply(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        let command = match parse(line, self.structure.len()) {
            Ok(Some(command)) => command,
            Ok(None) => return Outcome::Continue,
            Err(err) => {
                self.record_error(line, err);
                return Outcome::Continue;
            }
        };

        match command {
            Command::Set { index, value } => {
                let result = self.structure.set(index, value);
                self.record_update(line, result.map_err(CommandError::from));
            }
            Command::Add { index, value } => {
                let result = self.structure.add_at(index, value);
                self.record_update(line, result.map_err(CommandError::from));
            }
            Command::Query { left, right } => match self.structure.range_aggregate(left, right) {
                Ok(value) => {
                    self.history.push_input(line);
                    self.history.push_result(value.to_string());
                }
                Err(err) => self.record_error(line, err.into()),
            },
            Command::Reset => self.reset(),
            Command::Help => return Outcome::Help,
            Command::Home => return Outcome::Home,
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Continue
    }

    fn record_update(&mut self, line: &str, result: Result<(), CommandError>) {
        match result {
            Ok(()) => self.history.push_input(line),
            Err(err) => self.record_error(line, err),
        }
    }

    fn record_error(&mut self, line: &str, err: CommandError) {
        self.history.push_input(line);
        self.history.push_error(err.to_string());
    }

    /// History panel and pyramid side by side.
    pub fn frame(&self, ui: &UiContext) -> Frame {
        let left = render_history(&self.history, ui.color, ui.unicode);
        let right = PyramidView::new(depth_for(self.structure.len()), ui.leaf_width)
            .style(ui.color, ui.unicode)
            .render(Some(self.structure.as_ref()));
        compose(&left, &right, PANEL_WIDTH)
    }
}
