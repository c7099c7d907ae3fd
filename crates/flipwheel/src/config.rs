use carousel::WheelLayout;
use config::{Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Entity list loaded when none is given on the command line.
    #[serde(default)]
    pub content: Option<PathBuf>,
    #[serde(default)]
    pub layout: WheelLayout,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "flipwheel", "flipwheel")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// An explicit `path` must exist; the default location is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (config_path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (get_config_path()?, false),
    };

    let s = config::Config::builder()
        .add_source(File::from(config_path).required(required))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

/// `FLIPWHEEL_LAYOUT__WINDOW_RADIUS=2` maps to `layout.window_radius`.
fn environment() -> Environment {
    Environment::with_prefix("FLIPWHEEL")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_or_default(path: Option<&Path>) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn parse_config(source: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(File::from_str(source, FileFormat::Toml))
        .build()?;
    Ok(s.try_deserialize()?)
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
        log::info!("Wrote default config to {}", path.display());
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
