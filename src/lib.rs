//! odkx-init - first-run installer for the ODK-X sync endpoint
//!
//! Collects the HTTPS configuration interactively, keeps partial answers in a
//! resumable progress cache, obtains or registers a TLS certificate, and then
//! builds and deploys the service stack.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::configure::{ConfigureOutcome, ConfigureUseCase, ConfiguredInstall};
pub use application::deploy::{DeployReport, StackDispatcher};
pub use application::install::{run_install, InstallOutcome};
pub use config::InstallerConfig;
pub use domain::entities::{EnvironmentMap, ProgressRecord};
pub use domain::value_objects::{CertificateConfig, DeploymentProfile};
pub use error::{InstallerError, InstallerResult};
