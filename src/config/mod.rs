//! Configuration module for Segee
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SEGEE_*)
//! 3. Config file (`--config`, `SEGEE_CONFIG`, or ~/.config/segee/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, LoadedConfig, CONFIG_ENV};
pub use types::{
    ColorMode, Config, DisplayConfig, OutputConfig, SessionConfig, Verbosity, LEAF_WIDTH_RANGE,
};
