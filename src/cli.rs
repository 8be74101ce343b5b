//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;
use segee::config::ColorMode;
use segee::Variant;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Segee - interactive segment tree console
#[derive(Parser, Debug)]
#[command(name = "segee")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Commands inside the console: set/s, add/a, query/q, /reset, /home, /help, quit.")]
pub struct Cli {
    /// Open this tree type directly (sum, min or max)
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Draw borders with plain ASCII characters
    #[arg(long)]
    pub ascii: bool,

    /// Config file to use instead of the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
