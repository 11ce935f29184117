//! Installer configuration
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ODKX_*)
//! 3. Config file (`--config installer.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{
    BuildConfig, CertbotConfig, DeployConfig, ImageSpec, InstallerConfig, PathsConfig,
    DEFAULT_ENV_FILE,
};
