//! Deployment Profile Value Object
//!
//! Selects which compose overlay the stack is deployed with.

use std::fmt;

use super::CertificateConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentProfile {
    /// Plain HTTP, base compose file only
    Plain,
    /// HTTPS with a certificate from the acquisition tool
    HttpsAutomated,
    /// HTTPS with user-supplied certificate files
    HttpsManual,
}

impl DeploymentProfile {
    pub fn select(use_https: bool, certificate: Option<&CertificateConfig>) -> Self {
        match (use_https, certificate) {
            (false, _) => DeploymentProfile::Plain,
            (true, Some(CertificateConfig::Manual { .. })) => DeploymentProfile::HttpsManual,
            (true, _) => DeploymentProfile::HttpsAutomated,
        }
    }
}

impl fmt::Display for DeploymentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeploymentProfile::Plain => "plain",
            DeploymentProfile::HttpsAutomated => "https (certbot)",
            DeploymentProfile::HttpsManual => "https (manual certificate)",
        };
        f.write_str(name)
    }
}
