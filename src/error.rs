//! Error types for the installer
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for installer operations
pub type InstallerResult<T> = Result<T, InstallerError>;

/// Main error type for installer operations
///
/// Every variant is fatal for the configuration phase. Failures of the
/// external build/deploy steps are reported through `CommandOutcome`
/// instead and never surface here.
#[derive(Error, Debug)]
pub enum InstallerError {
    /// The https environment file is missing at startup
    #[error("no https configuration file found at {path}")]
    EnvFileNotFound { path: PathBuf },

    #[error("invalid domain: {domain}")]
    InvalidDomain { domain: String },

    #[error("invalid email address: {email}")]
    InvalidEmail { email: String },

    /// User declined both HTTPS enforcement and the insecure override
    #[error(
        "HTTPS is currently required to run a secure public server. \
         Please restart and select to enforce HTTPS"
    )]
    InsecureDeclined,

    /// A manual certificate path was left empty
    #[error("certificate path not provided")]
    CertificateInputMissing,

    #[error("certificate file does not exist: {path}")]
    CertificateFileMissing { path: PathBuf },

    /// The progress cache exists but cannot be parsed
    #[error("progress cache {path} is corrupt or unreadable: {message}")]
    CorruptProgress { path: PathBuf, message: String },

    /// In-place rewrite of a file failed (temp file, permissions or rename)
    #[error("failed to rewrite {path}: {source}")]
    FileRewrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external program could not be started at all
    #[error("failed to start '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("an interactive terminal is required to answer setup questions")]
    NotInteractive,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Run was interrupted by the user (Ctrl-C)
    #[error("interrupted")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InstallerError {
    /// Hint printed below the error, telling the user how to recover.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            InstallerError::EnvFileNotFound { .. } => Some(
                "Please check your paths and file permissions, and make sure your config repo is up to date.",
            ),
            InstallerError::InvalidDomain { .. } => {
                Some("Re-run this script with the correct domain.")
            }
            InstallerError::InvalidEmail { .. } => {
                Some("Re-run this script with the correct email address.")
            }
            InstallerError::CertificateInputMissing
            | InstallerError::CertificateFileMissing { .. } => {
                Some("Re-run this script with correct inputs.")
            }
            InstallerError::CorruptProgress { .. } => {
                Some("Remove the progress file to start over.")
            }
            _ => None,
        }
    }
}

impl From<dialoguer::Error> for InstallerError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                InstallerError::Interrupted
            }
            dialoguer::Error::IO(io) => InstallerError::Prompt(io.to_string()),
        }
    }
}
