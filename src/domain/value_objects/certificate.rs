//! Certificate Configuration Value Object
//!
//! Where the TLS certificate for the stack comes from. Exactly one variant is
//! active per run.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateConfig {
    /// Certificate is obtained by the acquisition tool for the domain + email
    Automated,
    /// User-supplied certificate files (absolute paths)
    Manual {
        fullchain: PathBuf,
        privkey: PathBuf,
    },
}

impl CertificateConfig {
    pub fn is_manual(&self) -> bool {
        matches!(self, CertificateConfig::Manual { .. })
    }
}
