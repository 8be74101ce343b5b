//! Terminal-backed console

use std::io::{self, BufRead, Write};

use crossterm::cursor::{MoveTo, Show};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::Select;

use segee::session::console::choose_by_line;
use segee::session::Console;
use segee::ui::{Frame, UiContext};

pub struct TerminalConsole {
    ui: UiContext,
}

impl TerminalConsole {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        // The interrupt handler writes to stdout, so the lock must not be
        // held while blocked on stdin.
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            // Keep the farewell off the prompt line.
            writeln!(io::stdout())?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", text)
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if self.ui.clear_screen {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(stdout, "{}", frame)?;
        stdout.flush()
    }

    fn choose(&mut self, prompt: &str, items: &[String]) -> io::Result<Option<usize>> {
        if !self.ui.caps.is_interactive() {
            return choose_by_line(self, prompt, items);
        }

        let picked = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt();
        interrupted_as_none(picked)
    }
}

/// Ctrl+C inside the menu widget counts as leaving the menu.
fn interrupted_as_none(picked: dialoguer::Result<Option<usize>>) -> io::Result<Option<usize>> {
    match picked {
        Ok(choice) => Ok(choice),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
            // The widget hides the cursor and does not restore it on interrupt.
            let _ = execute!(io::stderr(), Show);
            Ok(None)
        }
        Err(err) => Err(io::Error::other(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_menu_reads_as_no_choice() {
        let interrupted = dialoguer::Error::IO(io::Error::from(io::ErrorKind::Interrupted));
        assert_eq!(interrupted_as_none(Err(interrupted)).unwrap(), None);
    }

    #[test]
    fn test_menu_choice_and_other_errors_pass_through() {
        assert_eq!(interrupted_as_none(Ok(Some(2))).unwrap(), Some(2));
        assert_eq!(interrupted_as_none(Ok(None)).unwrap(), None);

        let broken = dialoguer::Error::IO(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(interrupted_as_none(Err(broken)).is_err());
    }
}
