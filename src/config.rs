use crate::error::{Result, VersionError};
use crate::options::VersionOptions;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".genms-version.toml";

/// Config file looked up in the user config directory
pub const USER_CONFIG_FILE: &str = "genms-version.toml";

/// Locates the config file to use, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `.genms-version.toml` in current directory
/// 3. `genms-version.toml` in the user config directory
pub fn find_config(config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads the option fragment stored in a config file, or an empty fragment.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(VersionOptions)` - Loaded or empty fragment
/// * `Err` - If a file was selected but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<VersionOptions> {
    let Some(path) = find_config(config_path) else {
        tracing::debug!("no config file found");
        return Ok(VersionOptions::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        VersionError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    let options: VersionOptions = toml::from_str(&config_str).map_err(|e| {
        VersionError::config(format!("cannot parse '{}': {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(options)
}
