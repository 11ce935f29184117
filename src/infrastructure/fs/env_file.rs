//! Env File Store
//!
//! Reads and writes the flat `KEY=VALUE` https configuration file.

use std::path::{Path, PathBuf};

use crate::domain::entities::EnvironmentMap;
use crate::error::{InstallerError, InstallerResult};

#[derive(Debug, Clone)]
pub struct EnvFileStore {
    path: PathBuf,
}

impl EnvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> InstallerResult<EnvironmentMap> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => InstallerError::EnvFileNotFound {
                path: self.path.clone(),
            },
            _ => InstallerError::Io(e),
        })?;
        let map = EnvironmentMap::parse(&content);
        tracing::debug!(path = %self.path.display(), entries = map.len(), "loaded env file");
        Ok(map)
    }

    /// Overwrite the file with one line per entry.
    ///
    /// Plain truncate-and-write: an interrupted write can leave the file
    /// truncated.
    pub fn save(&self, map: &EnvironmentMap) -> InstallerResult<()> {
        std::fs::write(&self.path, map.render())?;
        tracing::debug!(path = %self.path.display(), entries = map.len(), "saved env file");
        Ok(())
    }
}
