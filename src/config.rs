//! Board configuration.
//!
//! The only thing worth configuring is the mapping the collector uses to sort
//! files into PDFs, audio clips and images, plus two switches on how names are
//! matched and reported. Without a config file the stock defaults apply and
//! the collector behaves exactly as documented in [`crate::scan`].
//!
//! ## Config File
//!
//! Pass `--config board.toml` to any command that scans. The file is sparse:
//! keys it leaves out keep their stock value.
//!
//! ```toml
//! [extensions]
//! pdf = ["pdf"]
//! audio = ["mp3"]
//! image = ["png", "jpeg", "jpg", "webp"]
//!
//! [scan]
//! rule = "first-segment"   # or "last-segment"
//! prefix_source = false
//! ```
//!
//! Unknown keys are rejected to catch typos early, and an extension may only
//! belong to one category.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::MediaKind;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Top-level board configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Extension lists per category.
    pub extensions: ExtensionsConfig,
    /// How file names are matched against the extension lists.
    pub scan: ScanConfig,
}

/// Extensions recognised for each category. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtensionsConfig {
    pub pdf: Vec<String>,
    pub audio: Vec<String>,
    pub image: Vec<String>,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            pdf: vec!["pdf".into()],
            audio: vec!["mp3".into()],
            image: vec!["png".into(), "jpeg".into(), "jpg".into(), "webp".into()],
        }
    }
}

impl ExtensionsConfig {
    /// Flatten into an extension → kind lookup table.
    pub fn lookup(&self) -> HashMap<&str, MediaKind> {
        let mut table = HashMap::new();
        for (kind, exts) in [
            (MediaKind::Pdf, &self.pdf),
            (MediaKind::Audio, &self.audio),
            (MediaKind::Image, &self.image),
        ] {
            for ext in exts {
                table.insert(ext.as_str(), kind);
            }
        }
        table
    }
}

/// Which dot-delimited segment of a file name counts as its extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionRule {
    /// The segment between the first and second dot: `a.b.pdf` → `b`.
    #[default]
    FirstSegment,
    /// The segment after the last dot: `a.b.pdf` → `pdf`.
    LastSegment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub rule: ExtensionRule,
    /// Report `<source>/<name>` instead of the bare file name.
    ///
    /// Bare names are checked and later resolved relative to the working
    /// directory, which only lines up when the board is built from inside
    /// the source folder.
    pub prefix_source: bool,
}

impl BoardConfig {
    /// Validate that every extension is non-empty and belongs to one category.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<&str, MediaKind> = HashMap::new();
        for (kind, exts) in [
            (MediaKind::Pdf, &self.extensions.pdf),
            (MediaKind::Audio, &self.extensions.audio),
            (MediaKind::Image, &self.extensions.image),
        ] {
            for ext in exts {
                if ext.is_empty() || ext.contains('.') {
                    return Err(ConfigError::Validation(format!(
                        "extensions.{}: {ext:?} is not a valid extension",
                        kind.key()
                    )));
                }
                if let Some(other) = seen.insert(ext.as_str(), kind) {
                    return Err(ConfigError::Validation(format!(
                        "extension {ext:?} listed under both {} and {}",
                        other.key(),
                        kind.key()
                    )));
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Stock defaults as a TOML table, the base layer for user overrides.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(BoardConfig::default())?)
}

/// Lay a user config file over the stock defaults.
///
/// Sections present in both are combined key by key, so a file naming only
/// `[extensions] audio` keeps the stock PDF and image lists. A user value of
/// any other shape wins outright and is left for `deny_unknown_fields` and
/// `validate` to judge.
pub fn merge_toml(defaults: toml::Value, user: toml::Value) -> toml::Value {
    let (mut merged, user_table) = match (defaults, user) {
        (toml::Value::Table(defaults), toml::Value::Table(user)) => (defaults, user),
        (_, user) => return user,
    };
    for (key, value) in user_table {
        let value = match merged.remove(&key) {
            Some(default) => merge_toml(default, value),
            None => value,
        };
        merged.insert(key, value);
    }
    toml::Value::Table(merged)
}

/// Load a config file, or the stock defaults when `path` is `None`.
///
/// User values are merged over the defaults, unknown keys are rejected and
/// the result is validated.
pub fn load_config(path: Option<&Path>) -> Result<BoardConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let overlay: toml::Value = toml::from_str(&content)?;
            merge_toml(base, overlay)
        }
        None => base,
    };
    let config: BoardConfig = merged.try_into()?;
    config.validate()?;
    tracing::debug!(?config, "config resolved");
    Ok(config)
}

/// Fully commented stock config, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# media-board configuration
# =========================
# Every setting is optional; the values below are the defaults.
# Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Extensions per category (case-sensitive, without the dot)
# ---------------------------------------------------------------------------
[extensions]
# Embedded with an inline frame.
pdf = ["pdf"]
# Embedded with a native audio player.
audio = ["mp3"]
# Embedded with an image tag.
image = ["png", "jpeg", "jpg", "webp"]

# ---------------------------------------------------------------------------
# Scanning
# ---------------------------------------------------------------------------
[scan]
# Which part of the file name is the extension:
#   "first-segment": text between the first and second dot (a.b.pdf -> b)
#   "last-segment":  text after the last dot (a.b.pdf -> pdf)
rule = "first-segment"

# Write "<folder>/<file>" into the page instead of the bare file name.
# Leave off when building from inside the scanned folder.
prefix_source = false
"##
}
