//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Variant;
use crate::error::{SegeeError, SegeeResult};

use super::types::{ColorMode, Config, Verbosity, LEAF_WIDTH_RANGE};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SEGEE_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    /// File path, or the environment variable name for env overrides
    pub source: String,
    pub line: Option<usize>,
    pub message: String,
    pub suggestion: Option<String>,
}

/// Configuration plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SegeeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> SegeeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SegeeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                source: path.display().to_string(),
                line: find_line_number(content, &key),
                message: format!("Unknown config key '{}'", key),
                suggestion: suggest(&key, KNOWN_KEYS),
            }
        })
        .collect();

    if !LEAF_WIDTH_RANGE.contains(&config.display.leaf_width) {
        warnings.push(ConfigWarning {
            key: "leaf_width".to_string(),
            source: path.display().to_string(),
            line: find_line_number(content, "leaf_width"),
            message: format!(
                "display.leaf_width = {} is outside {}..={}; clamped",
                config.display.leaf_width,
                LEAF_WIDTH_RANGE.start(),
                LEAF_WIDTH_RANGE.end()
            ),
            suggestion: None,
        });
    }

    Ok((config, warnings))
}

/// Resolve the config file and apply environment overrides.
///
/// Priority: `explicit` (from `--config`), then `SEGEE_CONFIG`, then
/// `<config dir>/segee/config.toml`. A named file that is missing is an
/// error; a missing user config just means defaults.
pub fn load_or_default(explicit: Option<&Path>) -> SegeeResult<LoadedConfig> {
    load_or_default_impl(explicit, user_config_path(), |key| std::env::var(key).ok())
}

pub(crate) fn load_or_default_impl(
    explicit: Option<&Path>,
    user_config: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> SegeeResult<LoadedConfig> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| get_env(CONFIG_ENV).map(PathBuf::from));

    let source = match named {
        Some(path) => Some(path),
        None => user_config.filter(|p| p.exists()),
    };

    let (config, mut warnings) = match &source {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    let (config, env_warnings) = with_env_overrides(config, get_env);
    warnings.extend(env_warnings);

    Ok(LoadedConfig {
        config,
        source,
        warnings,
    })
}

/// `<config dir>/segee/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("segee").join("config.toml"))
}

/// Apply environment variable overrides (SEGEE_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    if let Some(value) = get_env("SEGEE_COLOR") {
        match value.to_lowercase().as_str() {
            "auto" => config.output.color = ColorMode::Auto,
            "always" => config.output.color = ColorMode::Always,
            "never" => config.output.color = ColorMode::Never,
            _ => warnings.push(env_warning("SEGEE_COLOR", &value, &["auto", "always", "never"])),
        }
    }

    if let Some(value) = get_env("SEGEE_VERBOSITY") {
        match value.to_lowercase().as_str() {
            "quiet" => config.output.verbosity = Verbosity::Quiet,
            "normal" => config.output.verbosity = Verbosity::Normal,
            "verbose" => config.output.verbosity = Verbosity::Verbose,
            "debug" => config.output.verbosity = Verbosity::Debug,
            _ => warnings.push(env_warning(
                "SEGEE_VERBOSITY",
                &value,
                &["quiet", "normal", "verbose", "debug"],
            )),
        }
    }

    if let Some(value) = get_env("SEGEE_UNICODE") {
        config.output.unicode = value.to_lowercase() != "false" && value != "0";
    }

    if let Some(value) = get_env("SEGEE_VARIANT") {
        match value.parse::<Variant>() {
            Ok(variant) => config.session.variant = Some(variant),
            Err(_) => warnings.push(env_warning("SEGEE_VARIANT", &value, &["sum", "min", "max"])),
        }
    }

    (config, warnings)
}

fn env_warning(var: &str, value: &str, valid: &[&str]) -> ConfigWarning {
    ConfigWarning {
        key: var.to_string(),
        source: "environment".to_string(),
        line: None,
        message: format!(
            "Invalid {} value '{}' (valid: {})",
            var,
            value,
            valid.join(", ")
        ),
        suggestion: suggest(&value.to_lowercase(), valid),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

const KNOWN_KEYS: &[&str] = &[
    "output",
    "verbosity",
    "color",
    "unicode",
    "clear_screen",
    "session",
    "variant",
    "display",
    "leaf_width",
];

fn suggest(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(crate) fn parse_for_test(content: &str) -> SegeeResult<(Config, Vec<ConfigWarning>)> {
    parse_with_warnings(content, Path::new("config.toml"))
}

#[cfg(test)]
pub(crate) fn levenshtein_for_test(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}
