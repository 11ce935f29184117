//! Configuration loading

use std::path::{Path, PathBuf};

use crate::error::{InstallerError, InstallerResult};

use super::types::InstallerConfig;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key, e.g. `deploy.stak_name`
    pub key: String,
    pub file: PathBuf,
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> InstallerResult<(InstallerConfig, Vec<ConfigWarning>)> {
    let content = std::fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: InstallerConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| InstallerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (ODKX_* prefix)
pub fn with_env_overrides(config: InstallerConfig) -> InstallerConfig {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: InstallerConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> InstallerConfig {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(path) = non_empty("ODKX_ENV_FILE") {
        config.paths.env_file = Some(PathBuf::from(path));
    }

    if let Some(path) = non_empty("ODKX_PROGRESS_FILE") {
        config.paths.progress_file = PathBuf::from(path);
    }

    if let Some(path) = non_empty("ODKX_LDAP_ENV_FILE") {
        config.paths.ldap_env_file = PathBuf::from(path);
    }

    if let Some(name) = non_empty("ODKX_STACK_NAME") {
        config.deploy.stack_name = name;
    }

    config
}
