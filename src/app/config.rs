use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_SPEC_FILE;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API spec configuration
    #[serde(default)]
    pub spec: SpecConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spec: SpecConfig::default(),
        }
    }
}

/// API spec location and cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecConfig {
    /// Path to the Cloud API OpenAPI document
    pub file: PathBuf,
    /// Directory holding the parsed-spec cache records
    pub cache_dir: PathBuf,
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_SPEC_FILE),
            cache_dir: default_cache_dir(),
        }
    }
}

/// Cache directory (~/.cache/acli on Linux, ~/Library/Caches/acli on macOS)
fn default_cache_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "acli") {
        proj_dirs.cache_dir().to_path_buf()
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".cache").join("acli")
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir()?;
    let global_config = config_dir.join("config.toml");
    let local_config = PathBuf::from(".acli/config.toml");

    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if global_config.exists() {
        figment = figment.merge(Toml::file(&global_config));
    }

    if local_config.exists() {
        figment = figment.merge(Toml::file(&local_config));
    }

    figment = figment.merge(Env::prefixed("ACLI_"));

    figment.extract().context("Failed to load configuration")
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "acli") {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    } else {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let config_dir = PathBuf::from(home).join(".config").join("acli");
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join("config.toml")
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
pub fn init_config() -> Result<()> {
    let config_dir = get_config_dir()?;
    let config_file = config_dir.join("config.toml");

    if !config_file.exists() {
        let default_config = Config::default();
        save_config(&default_config, Some(config_file.clone()))?;
        println!("Created default configuration at: {}", config_file.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_bundled_spec() {
        let config = Config::default();
        assert_eq!(config.spec.file, PathBuf::from("assets/acquia-spec.yaml"));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.spec.file, config.spec.file);
        assert_eq!(parsed.spec.cache_dir, config.spec.cache_dir);
    }
}
