//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::InstallerResult;
use crate::infrastructure::repositories::DEFAULT_PROGRESS_FILE;
use crate::presentation::Cli;

use super::loader::{self, ConfigWarning};

/// Env file location relative to the program directory
pub const DEFAULT_ENV_FILE: &str = "config/https.env";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstallerConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub certbot: CertbotConfig,
}

/// Files the installer reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathsConfig {
    /// `None` means `<program dir>/config/https.env`
    #[serde(default)]
    pub env_file: Option<PathBuf>,

    #[serde(default = "default_progress_file")]
    pub progress_file: PathBuf,

    #[serde(default = "default_ldap_env_file")]
    pub ldap_env_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            env_file: None,
            progress_file: default_progress_file(),
            ldap_env_file: default_ldap_env_file(),
        }
    }
}

impl PathsConfig {
    pub fn env_file_path(&self) -> PathBuf {
        match &self.env_file {
            Some(path) => path.clone(),
            None => program_dir().join(DEFAULT_ENV_FILE),
        }
    }
}

fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_progress_file() -> PathBuf {
    PathBuf::from(DEFAULT_PROGRESS_FILE)
}

fn default_ldap_env_file() -> PathBuf {
    PathBuf::from("ldap.env")
}

/// A container image built from a local directory or a git URL
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageSpec {
    pub tag: String,
    pub context: String,
}

impl ImageSpec {
    fn new(tag: &str, context: &str) -> Self {
        Self {
            tag: tag.to_string(),
            context: context.to_string(),
        }
    }
}

/// Container images and the server artifact build
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_images")]
    pub images: Vec<ImageSpec>,

    #[serde(default = "default_server_repo")]
    pub server_repo: String,

    #[serde(default = "default_server_branch")]
    pub server_branch: String,

    /// Clone target directory
    #[serde(default = "default_server_dir")]
    pub server_dir: PathBuf,

    #[serde(default = "default_maven_modules")]
    pub maven_modules: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            images: default_images(),
            server_repo: default_server_repo(),
            server_branch: default_server_branch(),
            server_dir: default_server_dir(),
            maven_modules: default_maven_modules(),
        }
    }
}

fn default_images() -> Vec<ImageSpec> {
    vec![
        ImageSpec::new(
            "odk/sync-web-ui",
            "https://github.com/odk-x/sync-endpoint-web-ui.git",
        ),
        ImageSpec::new("odk/db-bootstrap", "db-bootstrap"),
        ImageSpec::new("odk/openldap", "openldap"),
        ImageSpec::new("odk/phpldapadmin", "phpldapadmin"),
    ]
}

fn default_server_repo() -> String {
    "https://github.com/odk-x/sync-endpoint".to_string()
}

fn default_server_branch() -> String {
    "master".to_string()
}

fn default_server_dir() -> PathBuf {
    PathBuf::from("sync-endpoint")
}

fn default_maven_modules() -> Vec<String> {
    vec![
        "org.opendatakit:sync-endpoint-war".to_string(),
        "org.opendatakit:sync-endpoint-docker-swarm".to_string(),
        "org.opendatakit:sync-endpoint-common-dependencies".to_string(),
    ]
}

/// Stack deployment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_stack_name")]
    pub stack_name: String,

    #[serde(default = "default_base_compose")]
    pub base_compose: PathBuf,

    #[serde(default = "default_https_certbot_compose")]
    pub https_certbot_compose: PathBuf,

    #[serde(default = "default_https_manual_compose")]
    pub https_manual_compose: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            stack_name: default_stack_name(),
            base_compose: default_base_compose(),
            https_certbot_compose: default_https_certbot_compose(),
            https_manual_compose: default_https_manual_compose(),
        }
    }
}

fn default_stack_name() -> String {
    "syncldap".to_string()
}

fn default_base_compose() -> PathBuf {
    PathBuf::from("docker-compose.yml")
}

fn default_https_certbot_compose() -> PathBuf {
    PathBuf::from("docker-compose-https-certbot.yml")
}

fn default_https_manual_compose() -> PathBuf {
    PathBuf::from("docker-compose-https.yml")
}

/// Certificate acquisition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CertbotConfig {
    /// Run certbot through sudo
    #[serde(default = "default_true")]
    pub use_sudo: bool,

    #[serde(default = "default_rsa_key_size")]
    pub rsa_key_size: u32,

    #[serde(default = "default_cert_name")]
    pub cert_name: String,
}

impl Default for CertbotConfig {
    fn default() -> Self {
        Self {
            use_sudo: true,
            rsa_key_size: default_rsa_key_size(),
            cert_name: default_cert_name(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_rsa_key_size() -> u32 {
    4096
}

fn default_cert_name() -> String {
    "bootstrap".to_string()
}

impl InstallerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> InstallerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> InstallerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ODKX_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Apply path flags given on the command line
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.env_file {
            self.paths.env_file = Some(path.clone());
        }
        if let Some(path) = &cli.progress_file {
            self.paths.progress_file = path.clone();
        }
        if let Some(path) = &cli.ldap_env_file {
            self.paths.ldap_env_file = path.clone();
        }
        self
    }
}
