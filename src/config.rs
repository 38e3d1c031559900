use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.license-compat/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Project-level settings.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Check behavior settings.
    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    /// Project license; overrides discovery from `pyproject.toml` / `setup.cfg`.
    pub license: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckConfig {
    /// Package names excluded from the report entirely.
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.license-compat/config.toml`
/// 3. `~/.config/license-compat/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = project_path.join(".license-compat").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-compat")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
