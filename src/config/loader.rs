use std::path::{Path, PathBuf};

use crate::error::{RelocSimError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::merge::merge_toml_values;
use super::model::CONFIG_VERSION;
use super::presets;

/// Result of loading a configuration, containing both the config and metadata.
///
/// The caller decides whether to report where the tables came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    /// The file the config was read from; `None` for built-in defaults.
    pub source: Option<PathBuf>,
    /// The preset named by `extends`, if any.
    pub preset_used: Option<String>,
}

impl LoadResult {
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            config: Config::default(),
            source: None,
            preset_used: None,
        }
    }
}

pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".reloc-sim.toml";
pub const USER_CONFIG_NAME: &str = "config.toml";

fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(RelocSimError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Layer built-in defaults, the optional `extends` preset and `file_value`.
///
/// # Errors
/// Returns an error for unknown presets, unsupported versions or values that
/// do not fit the config schema.
pub fn resolve_value(file_value: toml::Value) -> Result<(Config, Option<String>)> {
    let mut layered = toml::Value::try_from(Config::default())?;

    let preset_used = file_value
        .get("extends")
        .and_then(toml::Value::as_str)
        .map(|s| s.strip_prefix("preset:").unwrap_or(s).to_string());

    if let Some(name) = &preset_used {
        tracing::debug!(preset = %name, "applying table preset");
        layered = merge_toml_values(layered, presets::load_preset(name)?);
    }
    layered = merge_toml_values(layered, file_value);

    let config: Config = layered.try_into()?;
    validate_config_version(&config)?;
    Ok((config, preset_used))
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.reloc-sim.toml` in the current directory
/// 2. `config.toml` in the platform config directory (see [`FileSystem::config_dir`])
/// 3. Built-in defaults
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    /// The first existing config file in search order.
    #[must_use]
    pub fn discover(&self) -> Option<PathBuf> {
        [self.local_config_path(), self.user_config_path()]
            .into_iter()
            .flatten()
            .find(|path| self.fs.exists(path))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        match self.discover() {
            Some(path) => self.load_from_path(&path),
            None => {
                tracing::debug!("no config file found, using built-in tables");
                Ok(LoadResult::defaults())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| RelocSimError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let value: toml::Value = toml::from_str(&content)?;
        let (config, preset_used) = resolve_value(value)?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
            preset_used,
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
