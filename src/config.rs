//! Configuration file handling
//!
//! Settings live in a TOML file at `$QRCAST_CONFIG` or
//! `<config dir>/qrcast/config.toml`. Every field has a default, so a missing
//! or partial file is valid.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, Table};

use crate::code::ErrorCorrection;
use crate::player::playback::{SpeedSchedule, DEFAULT_SPEEDS_MS, DEFAULT_SPEED_INDEX};
use crate::player::state::{
    PlaybackSettings, DEFAULT_DRAG_RELEASE_GRACE, DEFAULT_INDEX_SCROLL_WIDTH,
    DEFAULT_MOMENTUM_RELEASE_GRACE,
};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "QRCAST_CONFIG";

/// Default maximum characters per chunk.
///
/// Fits a version-40 QR code at level L with room for the frame header.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 580;

/// Default progress label template.
pub const DEFAULT_PROGRESS_LABEL: &str = "{index}/{total}";

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Speed list must contain at least one delay")]
    EmptySpeeds,

    #[error("Speed index {index} is out of range for {len} speed(s)")]
    SpeedIndexOutOfRange { index: usize, len: usize },

    #[error("Index scroll width must be a positive number (got {0})")]
    InvalidScrollWidth(f64),

    #[error("Maximum chunk size must be at least 1")]
    ZeroChunkSize,

    #[error("Display scale must be at least 1")]
    ZeroScale,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub transfer: TransferConfig,
    pub playback: PlaybackConfig,
    pub display: DisplayConfig,
}

/// Framing and code options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Upper bound of characters per chunk
    pub max_chunk_size: usize,
    /// QR error correction level
    pub error_correction: ErrorCorrection,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            error_correction: ErrorCorrection::L,
        }
    }
}

/// Auto-advance and scrubbing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Inter-frame delays in milliseconds, cycled with the speed key. 0 pauses.
    pub speeds_ms: Vec<u64>,
    /// Starting position in `speeds_ms`
    pub initial_speed_index: usize,
    /// Scroll units per chunk on the scrub surface
    pub index_scroll_width: f64,
    /// Resume delay after a drag is released
    pub drag_release_grace_ms: u64,
    /// Resume delay after a momentum scroll settles
    pub momentum_release_grace_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speeds_ms: DEFAULT_SPEEDS_MS.to_vec(),
            initial_speed_index: DEFAULT_SPEED_INDEX,
            index_scroll_width: DEFAULT_INDEX_SCROLL_WIDTH,
            drag_release_grace_ms: DEFAULT_DRAG_RELEASE_GRACE.as_millis() as u64,
            momentum_release_grace_ms: DEFAULT_MOMENTUM_RELEASE_GRACE.as_millis() as u64,
        }
    }
}

impl PlaybackConfig {
    /// Build validated controller settings.
    pub fn to_settings(&self) -> Result<PlaybackSettings, ConfigError> {
        let settings = PlaybackSettings {
            speeds: SpeedSchedule::new(&self.speeds_ms, self.initial_speed_index)?,
            index_scroll_width: self.index_scroll_width,
            drag_release_grace: Duration::from_millis(self.drag_release_grace_ms),
            momentum_release_grace: Duration::from_millis(self.momentum_release_grace_ms),
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Terminal rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Terminal columns per QR module
    pub scale: u8,
    /// Progress label template: `{index}` (1-based), `{index0}`, `{total}`, `{checksum}`
    pub progress_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale: 1,
            progress_label: DEFAULT_PROGRESS_LABEL.to_string(),
        }
    }
}

impl Config {
    /// Resolve the config file path.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("qrcast").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Check values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transfer.max_chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.display.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        self.playback.to_settings().map(|_| ())
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, Default)]
pub struct MigrateResult {
    /// Updated TOML content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist before
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    /// Whether anything was added.
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add fields missing from `content` using default values.
///
/// Existing values, comments, and ordering are preserved.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("Config is not valid TOML")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?
        .parse()
        .context("Default config did not serialize to TOML")?;

    let mut result = MigrateResult::default();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(Table::new()));
            result.sections_added.push(section.to_string());
        }
        let Some(table) = doc[section].as_table_mut() else {
            anyhow::bail!("Config key '{}' must be a table", section);
        };

        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                result.added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    result.content = doc.to_string();
    Ok(result)
}
