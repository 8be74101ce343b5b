//! Console seam between the state machine and the outside world

use std::collections::VecDeque;
use std::io;

use crate::ui::Frame;

/// Everything the session needs from a terminal.
pub trait Console {
    /// Read one line without its terminator. `None` means end of input or
    /// interrupt.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print text followed by a newline.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Replace the screen with `frame`.
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;

    /// Pick one of `items`; `None` on end of input.
    fn choose(&mut self, prompt: &str, items: &[String]) -> io::Result<Option<usize>> {
        choose_by_line(self, prompt, items)
    }
}

/// Line-based selection used when no richer widget is available.
///
/// Prints a numbered list and re-prompts until the answer is a valid number
/// or item name.
pub fn choose_by_line<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    items: &[String],
) -> io::Result<Option<usize>> {
    if items.is_empty() {
        return Ok(None);
    }

    let mut menu = String::new();
    for (i, item) in items.iter().enumerate() {
        menu.push_str(&format!("  {}. {}\n", i + 1, item));
    }
    console.show(&menu)?;

    let prompt = format!("{} (1-{}): ", prompt, items.len());
    loop {
        let Some(line) = console.read_line(&prompt)? else {
            return Ok(None);
        };
        match parse_choice(&line, items) {
            Some(i) => return Ok(Some(i)),
            None => console.show(&invalid_choice_message(items.len()))?,
        }
    }
}

/// Resolve an answer to a zero-based item index.
///
/// Accepts the 1-based number, the full item text or its first word, all
/// case-insensitive.
pub fn parse_choice(answer: &str, items: &[String]) -> Option<usize> {
    let answer = answer.trim().to_lowercase();
    if answer.is_empty() {
        return None;
    }
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=items.len()).contains(&n).then(|| n - 1);
    }
    items.iter().position(|item| {
        let item = item.to_lowercase();
        item == answer || item.split_whitespace().next() == Some(answer.as_str())
    })
}

/// "Invalid choice. Please enter 1, 2, or 3."
pub fn invalid_choice_message(count: usize) -> String {
    let numbers: Vec<String> = (1..=count).map(|n| n.to_string()).collect();
    let list = match numbers.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{} or {}", a, b),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    };
    format!("Invalid choice. Please enter {}.", list)
}

/// Console that replays scripted input and records everything written.
///
/// Used for driving whole sessions without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    /// Every `show` call, in order
    pub shown: Vec<String>,
    /// Every frame passed to `draw`, in order
    pub frames: Vec<Frame>,
    /// Every prompt passed to `read_line`, in order
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.shown.push(text.to_string());
        Ok(())
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
