//! Configure Results

use crate::domain::entities::EnvironmentMap;
use crate::domain::value_objects::{CertificateConfig, DeploymentProfile};

/// Everything the deployment phase needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredInstall {
    pub enforce_https: bool,
    /// `None` when HTTPS is not enforced
    pub certificate: Option<CertificateConfig>,
    pub env: EnvironmentMap,
}

impl ConfiguredInstall {
    pub fn profile(&self) -> DeploymentProfile {
        DeploymentProfile::select(self.enforce_https, self.certificate.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// Configuration written; continue with build and deploy
    Ready(ConfiguredInstall),
    /// The user's domain is not pointed at this host yet; stop without error
    Deferred,
}
