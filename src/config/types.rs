//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Variant;
use crate::error::SegeeResult;
use crate::ui::views::pyramid::DEFAULT_LEAF_WIDTH;

use super::loader::{self, LoadedConfig};

/// Smallest and largest accepted `display.leaf_width`.
pub const LEAF_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 6..=24;

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Clear the terminal before each frame
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
            clear_screen: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Skip the menu on startup and open this variant
    #[serde(default)]
    pub variant: Option<Variant>,
}

/// Pyramid layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_leaf_width")]
    pub leaf_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            leaf_width: default_leaf_width(),
        }
    }
}

fn default_leaf_width() -> usize {
    DEFAULT_LEAF_WIDTH
}

impl DisplayConfig {
    /// `leaf_width` clamped to the supported range.
    pub fn effective_leaf_width(&self) -> usize {
        self.leaf_width
            .clamp(*LEAF_WIDTH_RANGE.start(), *LEAF_WIDTH_RANGE.end())
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Resolve explicit path, `SEGEE_CONFIG`, user config or defaults, then
    /// apply `SEGEE_*` overrides.
    pub fn load_or_default(explicit: Option<&Path>) -> SegeeResult<LoadedConfig> {
        loader::load_or_default(explicit)
    }
}
