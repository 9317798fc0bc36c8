//! Config file resolution and loading.

use crate::constants;
use crate::models::config::ConfigFile;
use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the active config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or the config env var.
    Explicit(PathBuf),
    /// The system-wide default file.
    System(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub config: ConfigFile,
    pub source: ConfigSource,
    /// Set when the system file existed but could not be used.
    pub load_warning: Option<String>,
}

impl Settings {
    /// Resolve config from CLI arg, env var, or the system default path.
    pub fn resolve(config_arg: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = config_arg {
            return Self::explicit(path);
        }
        if let Ok(path) = env::var(constants::CONFIG_ENV) {
            if !path.is_empty() {
                return Self::explicit(PathBuf::from(path));
            }
        }
        Ok(Self::system(Path::new(constants::DEFAULT_CONFIG_PATH)))
    }

    fn explicit(path: PathBuf) -> Result<Self> {
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
        let config = load(&path)?;
        Ok(Self {
            config,
            source: ConfigSource::Explicit(path),
            load_warning: None,
        })
    }

    // Best-effort: a broken system file falls back to defaults.
    fn system(path: &Path) -> Self {
        if !path.exists() {
            return Self::defaults();
        }
        match load(path) {
            Ok(config) => Self {
                config,
                source: ConfigSource::System(path.to_path_buf()),
                load_warning: None,
            },
            Err(e) => Self {
                load_warning: Some(format!("ignoring {}: {:#}", path.display(), e)),
                ..Self::defaults()
            },
        }
    }

    pub fn defaults() -> Self {
        Self {
            config: ConfigFile::default(),
            source: ConfigSource::Defaults,
            load_warning: None,
        }
    }
}

pub fn load(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: ConfigFile =
        toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}
