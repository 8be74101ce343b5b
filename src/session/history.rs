//! Command history
//!
//! Append-only log of echoed inputs and their results. Only the tail is
//! ever rendered; `clear` is the only way entries disappear.

/// Number of entries the history panel shows.
pub const HISTORY_ROWS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Echo of what the user typed, prefixed with the prompt marker
    Input,
    /// Textual result of a query
    Result,
    /// Message of a rejected command
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Entry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, line: &str) {
        self.push(EntryKind::Input, format!("> {}", line));
    }

    pub fn push_result(&mut self, text: impl Into<String>) {
        self.push(EntryKind::Result, text.into());
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(EntryKind::Error, text.into());
    }

    fn push(&mut self, kind: EntryKind, text: String) {
        self.entries.push(Entry { kind, text });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The most recent `rows` entries, oldest first.
    pub fn window(&self, rows: usize) -> &[Entry] {
        let start = self.entries.len().saturating_sub(rows);
        &self.entries[start..]
    }

    /// Entry texts, oldest first.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }
}
