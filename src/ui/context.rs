use crate::config::{ColorMode, Config, Verbosity};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved presentation settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbosity: Verbosity,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub clear_screen: bool,
    pub leaf_width: usize,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorMode>, cli_ascii: bool, verbose: u8, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(cli_color, cli_ascii, verbose, config, caps)
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorMode>,
        cli_ascii: bool,
        verbose: u8,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !cli_ascii && config.output.unicode && caps.supports_unicode;

        let color = match cli_color.unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        let verbosity = match verbose {
            0 => config.output.verbosity,
            1 => config.output.verbosity.max(Verbosity::Verbose),
            _ => Verbosity::Debug,
        };

        Self {
            verbosity,
            caps,
            color,
            unicode,
            clear_screen: config.output.clear_screen && caps.is_tty,
            leaf_width: config.display.effective_leaf_width(),
        }
    }

    /// Plain settings for scripted consoles and tests.
    pub fn plain() -> Self {
        Self {
            verbosity: Verbosity::Quiet,
            caps: TerminalCapabilities {
                is_tty: false,
                stdin_is_tty: false,
                supports_color: false,
                supports_unicode: true,
                is_ci: false,
                width: 80,
                height: 24,
            },
            color: false,
            unicode: true,
            clear_screen: false,
            leaf_width: Config::default().display.effective_leaf_width(),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
