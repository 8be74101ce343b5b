//! Diagnostics written to stderr, outside the full-screen frame.

use std::io::Write;

use crate::config::{ConfigWarning, LoadedConfig, Verbosity};
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    if ui.verbosity == Verbosity::Quiet {
        return;
    }
    let mut err = std::io::stderr().lock();
    let _ = write_config_warnings(&mut err, ui.color, warnings);
}

fn write_config_warnings(
    out: &mut impl Write,
    color: bool,
    warnings: &[ConfigWarning],
) -> std::io::Result<()> {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.source, line),
            None => w.source.clone(),
        };
        writeln!(
            out,
            "{} {} ({})",
            ColoredText::error("warning:").render(color),
            w.message,
            location
        )?;

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   Did you mean '{}'?", suggestion)?;
        }
    }
    Ok(())
}

/// Print a diagnostic line when running with `-v` or above.
pub fn verbose(ui: &UiContext, message: impl AsRef<str>) {
    if ui.is_verbose() {
        eprintln!("[segee] {}", message.as_ref());
    }
}

/// Print a diagnostic line only at debug verbosity.
pub fn debug(ui: &UiContext, message: impl AsRef<str>) {
    if ui.verbosity >= Verbosity::Debug {
        eprintln!("[segee:debug] {}", message.as_ref());
    }
}

/// Describe where configuration came from.
pub fn describe_config(loaded: &LoadedConfig) -> String {
    match &loaded.source {
        Some(path) => format!("config: {}", path.display()),
        None => "config: built-in defaults".to_string(),
    }
}
