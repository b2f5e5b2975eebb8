//! Engine configuration module.
//!
//! Handles loading, validating, and merging `epk.toml`. Every key is
//! optional: stock defaults are serialized to a TOML table and the project's
//! file is merged over it key by key, so a project only writes what it
//! changes.
//!
//! ## Config File Location
//!
//! ```text
//! my-film/
//! ├── film_config.json     # The film record (from the wizard)
//! └── epk.toml             # Engine settings (optional)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [validation]
//! min_stills = 8               # Fewer stills → advisory warning
//! min_synopsis_chars = 200     # Shorter synopsis → advisory warning
//! poster_min_size = [1000, 1500]
//! still_min_width = 1280
//! still_sample = 3             # How many stills get the width check
//!
//! [cover]
//! max_laurels = 4              # Award laurels shown on the cover
//!
//! [contact]
//! default_distributor = "Filmhub"
//!
//! [themes.noir]                # Add or override genre palettes
//! primary = "#111111"
//! secondary = "#000000"
//! accent = "#C0C0C0"
//!
//! [processing]
//! max_processes = 4            # Batch workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::theme::{Theme, ThemeTable, is_hex_color};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the project directory.
pub const CONFIG_FILE: &str = "epk.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Engine configuration loaded from `epk.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EpkConfig {
    /// Thresholds for advisory validation checks.
    pub validation: ValidationRules,
    /// Cover page settings.
    pub cover: CoverConfig,
    /// Contact section settings.
    pub contact: ContactConfig,
    /// Extra or replacement genre palettes, keyed by genre.
    pub themes: BTreeMap<String, Theme>,
    /// Batch processing settings.
    pub processing: ProcessingConfig,
}

impl EpkConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.validation.min_stills == 0 {
            return Err(ConfigError::Validation(
                "validation.min_stills must be at least 1".into(),
            ));
        }
        if self.cover.max_laurels == 0 {
            return Err(ConfigError::Validation(
                "cover.max_laurels must be at least 1".into(),
            ));
        }
        if self.contact.default_distributor.trim().is_empty() {
            return Err(ConfigError::Validation(
                "contact.default_distributor must not be empty".into(),
            ));
        }
        for (genre, theme) in &self.themes {
            for (slot, color) in ["primary", "secondary", "accent"].iter().zip(theme.colors()) {
                if !is_hex_color(color) {
                    return Err(ConfigError::Validation(format!(
                        "themes.{genre}.{slot} must be a hex color like #1a2b3c, got {color:?}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// The genre table with this project's overrides applied.
    pub fn theme_table(&self) -> ThemeTable {
        ThemeTable::with_overrides(&self.themes)
    }
}

/// Thresholds for the advisory checks in [`crate::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationRules {
    /// Fewer stills than this produces a warning.
    pub min_stills: usize,
    /// A synopsis shorter than this many characters produces a warning.
    pub min_synopsis_chars: usize,
    /// Minimum poster size as `[width, height]` in pixels.
    pub poster_min_size: [u32; 2],
    /// Minimum still width in pixels.
    pub still_min_width: u32,
    /// Number of stills, from the start of the gallery, checked for width.
    pub still_sample: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_stills: 8,
            min_synopsis_chars: 200,
            poster_min_size: [1000, 1500],
            still_min_width: 1280,
            still_sample: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverConfig {
    /// Most award laurels shown on the cover. The festivals section is
    /// never capped.
    pub max_laurels: usize,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self { max_laurels: 4 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Shown when the film record names no distribution company.
    pub default_distributor: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            default_distributor: "Filmhub".to_string(),
        }
    }
}

/// Batch processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of films generated in parallel.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)`, at least 1
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(EpkConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `epk.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `epk.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<EpkConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: EpkConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load engine config for a project directory.
///
/// Merges the project's `epk.toml` (if any) over stock defaults, rejects
/// unknown keys, and validates the result.
pub fn load_config(project_dir: &Path) -> Result<EpkConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(project_dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `epk.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Film EPK Engine Configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Validation thresholds (advisory warnings only; never block generation)
# ---------------------------------------------------------------------------
[validation]
# Warn when fewer production stills than this are uploaded.
min_stills = 8

# Warn when the synopsis is shorter than this many characters.
min_synopsis_chars = 200

# Warn when the poster is smaller than [width, height] pixels.
poster_min_size = [1000, 1500]

# Warn when one of the first `still_sample` stills is narrower than this.
still_min_width = 1280
still_sample = 3

# ---------------------------------------------------------------------------
# Cover page
# ---------------------------------------------------------------------------
[cover]
# Award laurels shown under the title. The full list still appears in the
# Festivals & Awards section.
max_laurels = 4

# ---------------------------------------------------------------------------
# Contact section
# ---------------------------------------------------------------------------
[contact]
# Distribution company shown when the film record leaves it blank.
default_distributor = "Filmhub"

# ---------------------------------------------------------------------------
# Genre palettes
# ---------------------------------------------------------------------------
# Built-in genres: horror, sci-fi, fantasy, comedy, drama, action,
# documentary, romance, thriller. Add a genre or override one with a table
# named after it; [themes.default] replaces the fallback palette.
#
# [themes.noir]
# primary = "#111111"
# secondary = "#000000"
# accent = "#C0C0C0"

# ---------------------------------------------------------------------------
# Batch processing
# ---------------------------------------------------------------------------
[processing]
# Maximum films generated in parallel by `film-epk batch`.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
