//! Segee CLI - interactive segment tree console
//!
//! Usage: segee [--variant sum|min|max] [--color WHEN] [--ascii] [--config PATH] [-v...]

mod cli;
mod console;

use anyhow::Result;
use clap::Parser;
use crossterm::cursor::Show;
use crossterm::execute;

use segee::config::Config;
use segee::session::machine::FAREWELL;
use segee::session::{run, RunOptions};
use segee::ui::output;
use segee::ui::UiContext;

use cli::Cli;
use console::TerminalConsole;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load_or_default(cli.config.as_deref())?;
    let ui = UiContext::new(
        cli.color.map(Into::into),
        cli.ascii,
        cli.verbose,
        &loaded.config,
    );

    output::print_config_warnings(&ui, &loaded.warnings);
    output::verbose(&ui, output::describe_config(&loaded));
    output::debug(&ui, format!("terminal: {:?}", ui.caps));

    ctrlc::set_handler(|| {
        let mut stdout = std::io::stdout();
        let _ = execute!(stdout, Show);
        println!("\n{}", FAREWELL);
        std::process::exit(0);
    })?;

    let options = RunOptions::new(ui).with_variant(cli.variant.or(loaded.config.session.variant));
    let mut console = TerminalConsole::new(ui);

    // A broken terminal ends the session like a quit.
    if let Err(err) = run(&mut console, &options) {
        output::verbose(&ui, format!("console error: {}", err));
        println!("{}", FAREWELL);
    }

    output::verbose(&ui, "session ended");
    Ok(())
}
