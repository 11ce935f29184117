//! Configure Options

use std::path::PathBuf;

use crate::config::{CertbotConfig, InstallerConfig};

#[derive(Debug, Clone)]
pub struct ConfigureOptions {
    /// https environment file (`KEY=VALUE`)
    pub env_file: PathBuf,
    /// Progress cache (`progress.json`)
    pub progress_file: PathBuf,
    /// LDAP credentials file rewritten when a custom password is chosen
    pub ldap_env_file: PathBuf,
    pub certbot: CertbotConfig,
}

impl ConfigureOptions {
    pub fn from_config(config: &InstallerConfig) -> Self {
        Self {
            env_file: config.paths.env_file_path(),
            progress_file: config.paths.progress_file.clone(),
            ldap_env_file: config.paths.ldap_env_file.clone(),
            certbot: config.certbot.clone(),
        }
    }
}
