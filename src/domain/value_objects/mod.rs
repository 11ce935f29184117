//! Domain Value Objects

mod certificate;
mod deployment_profile;

pub use certificate::CertificateConfig;
pub use deployment_profile::DeploymentProfile;
