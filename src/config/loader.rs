use std::path::Path;

use anyhow::{Context, Result};

use super::types::Config;

/// Name of the config file picked up from the working directory.
pub const CONFIG_FILE: &str = ".dilogs";

/// Load `.dilogs` from the given directory, falling back to defaults when absent.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        log::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
        return Ok(Config::default());
    }
    load_file(&path)
}

/// Load a config file that must exist.
pub fn load_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    log::debug!("loading config from {}", path.display());
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
