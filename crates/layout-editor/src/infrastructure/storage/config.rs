//! TOML-based configuration for the layout editor.
//!
//! Reads `EditorConfig` from an explicit path or from the platform-appropriate
//! config file:
//! - Windows:  `%APPDATA%\DashboardLayout\config.toml`
//! - Linux:    `~/.config/dashboard-layout/config.toml`
//! - macOS:    `~/Library/Application Support/DashboardLayout/config.toml`
//!
//! # What is TOML? (for beginners)
//!
//! TOML (Tom's Obvious Minimal Language) is a configuration file format designed
//! to be easy to read and write.  It looks similar to INI files but with more
//! data types.  Example:
//!
//! ```toml
//! [editor]
//! log_level = "debug"
//!
//! [grid]
//! columns = 12
//! rows = 8
//!
//! [ids]
//! strategy = "sequential"
//! prefix = "chart"
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from the TOML file.  Whole sections
//! may be left out as well, so an empty file is a valid configuration.

use std::path::{Path, PathBuf};

use layout_core::{
    LayoutEditorState, LayoutError, SequentialWidgetIds, UuidWidgetIds, WidgetIdSource,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level editor configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    #[serde(default)]
    pub editor: EditorSection,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub ids: IdConfig,
}

/// General editor behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorSection {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    ///
    /// Any `EnvFilter` directive is accepted, e.g. `"layout_core=debug"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Size of the blank grid used when no layout document is given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_rows")]
    pub rows: usize,
}

/// How ids for newly created widgets are generated.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4 ids.
    #[default]
    Uuid,
    /// `prefix-1`, `prefix-2`, …
    Sequential,
}

/// Widget id generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdConfig {
    #[serde(default)]
    pub strategy: IdStrategy,
    /// Prefix for [`IdStrategy::Sequential`] ids.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_columns() -> usize {
    2
}
fn default_rows() -> usize {
    2
}
fn default_prefix() -> String {
    "widget".to_string()
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
        }
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            strategy: IdStrategy::default(),
            prefix: default_prefix(),
        }
    }
}

impl GridConfig {
    /// Builds an empty layout of the configured size.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGridSize`] if either dimension is zero.
    pub fn blank_layout(&self) -> Result<LayoutEditorState, LayoutError> {
        LayoutEditorState::blank(self.columns, self.rows)
    }
}

impl IdConfig {
    /// Creates the configured widget id source for editing `state`.
    ///
    /// Sequential ids continue after the highest `{prefix}-N` already placed
    /// in `state`.
    pub fn id_source(&self, state: &LayoutEditorState) -> Box<dyn WidgetIdSource> {
        match self.strategy {
            IdStrategy::Uuid => Box::new(UuidWidgetIds),
            IdStrategy::Sequential => {
                Box::new(SequentialWidgetIds::continuing(self.prefix.clone(), state))
            }
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads `EditorConfig` from `path`, returning `EditorConfig::default()` if
/// the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<EditorConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: EditorConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(EditorConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to `path`.
///
/// Creates the parent directory if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &EditorConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config directory for the editor.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("DashboardLayout"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("DashboardLayout")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("dashboard-layout"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
