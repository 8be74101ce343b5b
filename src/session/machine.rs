//! Session state machine
//!
//! ```text
//! MenuSelect -> Confirm -> Interactive <-> Help
//!      ^                      |
//!      +------- /home --------+----> Quit
//! ```
//!
//! End of input at any prompt leaves the machine. The menu prints
//! `Exiting...`, every later state prints `Goodbye!`.

use std::io;

use crate::domain::Variant;
use crate::ui::compositor::Frame;
use crate::ui::context::UiContext;
use crate::ui::output;
use crate::ui::views::banner::{menu_items, render_banner, render_instructions};
use crate::ui::views::help::render_help;

use super::console::Console;
use super::{Outcome, Session};

pub const FAREWELL: &str = "Goodbye!";
pub const MENU_EXIT: &str = "Exiting...";

const MENU_PROMPT: &str = "Select tree type";
const CONFIRM_PROMPT: &str = "Press Enter to start...";
const COMMAND_PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Open this variant instead of showing the menu first
    pub variant: Option<Variant>,
    pub ui: UiContext,
}

impl RunOptions {
    pub fn new(ui: UiContext) -> Self {
        Self { variant: None, ui }
    }

    pub fn with_variant(mut self, variant: Option<Variant>) -> Self {
        self.variant = variant;
        self
    }
}

pub enum Mode {
    MenuSelect,
    Confirm(Variant),
    Interactive(Session),
    Help(Session),
    Quit,
}

impl Mode {
    /// Starting state: a preselected variant skips the menu.
    pub fn initial(variant: Option<Variant>) -> Self {
        match variant {
            Some(v) => Mode::Confirm(v),
            None => Mode::MenuSelect,
        }
    }
}

/// Drive the console until the user quits or input ends.
pub fn run(console: &mut dyn Console, options: &RunOptions) -> io::Result<()> {
    let mut mode = Mode::initial(options.variant);
    loop {
        mode = match mode {
            Mode::Quit => return Ok(()),
            other => step(console, &options.ui, other)?,
        };
    }
}

/// Perform one transition.
pub fn step(console: &mut dyn Console, ui: &UiContext, mode: Mode) -> io::Result<Mode> {
    match mode {
        Mode::MenuSelect => {
            console.show(&render_banner(ui.color, ui.unicode))?;
            match console.choose(MENU_PROMPT, &menu_items())? {
                Some(i) => Ok(Variant::ALL
                    .get(i)
                    .map_or(Mode::MenuSelect, |&v| Mode::Confirm(v))),
                None => {
                    console.show(MENU_EXIT)?;
                    Ok(Mode::Quit)
                }
            }
        }
        Mode::Confirm(variant) => {
            output::verbose(ui, format!("selected variant: {}", variant));
            console.show(&render_instructions(variant, ui.color))?;
            match console.read_line(CONFIRM_PROMPT)? {
                Some(_) => Ok(Mode::Interactive(Session::new(variant))),
                None => farewell(console),
            }
        }
        Mode::Interactive(mut session) => {
            console.draw(&session.frame(ui))?;
            let Some(line) = console.read_line(COMMAND_PROMPT)? else {
                return farewell(console);
            };
            output::debug(ui, format!("input: {:?}", line));
            match session.apply(&line) {
                Outcome::Continue => Ok(Mode::Interactive(session)),
                Outcome::Help => Ok(Mode::Help(session)),
                Outcome::Home => {
                    output::verbose(ui, "returning to menu");
                    Ok(Mode::MenuSelect)
                }
                Outcome::Quit => farewell(console),
            }
        }
        Mode::Help(session) => {
            let help = render_help(session.variant(), ui.color, ui.unicode);
            console.draw(&Frame::new(help.lines().map(str::to_string).collect()))?;
            match console.read_line("")? {
                Some(_) => Ok(Mode::Interactive(session)),
                None => farewell(console),
            }
        }
        Mode::Quit => Ok(Mode::Quit),
    }
}

fn farewell(console: &mut dyn Console) -> io::Result<Mode> {
    console.show(FAREWELL)?;
    Ok(Mode::Quit)
}
