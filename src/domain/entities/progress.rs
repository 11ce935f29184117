//! Progress Record Entity
//!
//! Answers already given in an interrupted run, as stored in `progress.json`:
//!
//! ```json
//! {"env": {"HTTPS_DOMAIN": "..."}, "enforce_https": true, "manual_certificate": false}
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Keys of the progress document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressKey {
    /// Snapshot of the answered env values
    Env,
    EnforceHttps,
    ManualCertificate,
}

impl ProgressKey {
    pub const ALL: [ProgressKey; 3] = [
        ProgressKey::Env,
        ProgressKey::EnforceHttps,
        ProgressKey::ManualCertificate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressKey::Env => "env",
            ProgressKey::EnforceHttps => "enforce_https",
            ProgressKey::ManualCertificate => "manual_certificate",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_https: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_certificate: Option<bool>,
}

impl ProgressRecord {
    pub fn has(&self, key: ProgressKey) -> bool {
        match key {
            ProgressKey::Env => self.env.is_some(),
            ProgressKey::EnforceHttps => self.enforce_https.is_some(),
            ProgressKey::ManualCertificate => self.manual_certificate.is_some(),
        }
    }

    /// A record is complete only when all three keys are present.
    pub fn is_complete(&self) -> bool {
        ProgressKey::ALL.iter().all(|key| self.has(*key))
    }
}
