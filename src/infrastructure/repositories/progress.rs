//! Progress Cache Repository
//!
//! Persists partial answers to a JSON document (`progress.json`) so an
//! interrupted run can resume. Each save is a read-modify-write of the whole
//! file.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::entities::{ProgressKey, ProgressRecord};
use crate::error::{InstallerError, InstallerResult};

pub const DEFAULT_PROGRESS_FILE: &str = "progress.json";

#[derive(Debug, Clone)]
pub struct ProgressCache {
    path: PathBuf,
}

impl ProgressCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True iff the cache file exists and is non-empty.
    pub fn exists(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|m| m.is_file() && m.len() > 0)
            .unwrap_or(false)
    }

    /// True iff the cache exists and holds all three keys.
    ///
    /// A cache that exists but cannot be parsed is an error, not "incomplete".
    pub fn is_complete(&self) -> InstallerResult<bool> {
        if !self.exists() {
            return Ok(false);
        }
        Ok(self.load()?.is_complete())
    }

    pub fn load(&self) -> InstallerResult<ProgressRecord> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.corrupt(e))?;
        serde_json::from_str(&content).map_err(|e| self.corrupt(e))
    }

    /// Merge one key into the stored record.
    pub fn save(&self, key: ProgressKey, value: impl Into<Value>) -> InstallerResult<()> {
        let mut document = self.read_document()?;
        document.insert(key.as_str().to_string(), value.into());
        std::fs::write(&self.path, serde_json::to_string(&document)?)?;
        tracing::debug!(path = %self.path.display(), key = key.as_str(), "saved progress");
        Ok(())
    }

    /// Delete the cache file. A missing file is not an error.
    pub fn clear(&self) -> InstallerResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "cleared progress cache");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Raw document; an absent or empty file is an empty record.
    fn read_document(&self) -> InstallerResult<Map<String, Value>> {
        if !self.exists() {
            return Ok(Map::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.corrupt(e))?;
        match serde_json::from_str::<Value>(&content).map_err(|e| self.corrupt(e))? {
            Value::Object(map) => Ok(map),
            other => Err(self.corrupt(format!("expected a JSON object, found {other}"))),
        }
    }

    fn corrupt(&self, message: impl ToString) -> InstallerError {
        InstallerError::CorruptProgress {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use tempfile::tempdir;

    fn cache_in(dir: &Path) -> ProgressCache {
        ProgressCache::new(dir.join(DEFAULT_PROGRESS_FILE))
    }

    fn env_snapshot(domain: &str) -> Value {
        let mut env = IndexMap::new();
        env.insert("HTTPS_DOMAIN".to_string(), domain.to_string());
        serde_json::to_value(env).unwrap()
    }

    #[test]
    fn missing_or_empty_file_does_not_exist() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());
        assert!(!cache.exists());

        std::fs::write(cache.path(), "").unwrap();
        assert!(!cache.exists());
        assert!(!cache.is_complete().unwrap());
    }

    #[test]
    fn save_creates_and_merges_keys() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());

        cache.save(ProgressKey::Env, env_snapshot("a.org")).unwrap();
        cache.save(ProgressKey::EnforceHttps, true).unwrap();
        assert!(cache.exists());
        assert!(!cache.is_complete().unwrap());

        cache.save(ProgressKey::ManualCertificate, false).unwrap();
        assert!(cache.is_complete().unwrap());

        let record = cache.load().unwrap();
        assert_eq!(record.enforce_https, Some(true));
        assert_eq!(record.manual_certificate, Some(false));
        assert_eq!(
            record.env.unwrap().get("HTTPS_DOMAIN").map(String::as_str),
            Some("a.org")
        );
    }

    #[test]
    fn save_overwrites_existing_key() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());

        cache.save(ProgressKey::Env, env_snapshot("a.org")).unwrap();
        cache.save(ProgressKey::Env, env_snapshot("b.org")).unwrap();

        let record = cache.load().unwrap();
        assert_eq!(
            record.env.unwrap().get("HTTPS_DOMAIN").map(String::as_str),
            Some("b.org")
        );
    }

    #[test]
    fn writes_expected_json_shape() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());

        cache.save(ProgressKey::Env, env_snapshot("a.org")).unwrap();
        cache.save(ProgressKey::EnforceHttps, false).unwrap();

        let raw = std::fs::read_to_string(cache.path()).unwrap();
        assert_eq!(raw, r#"{"env":{"HTTPS_DOMAIN":"a.org"},"enforce_https":false}"#);
    }

    #[test]
    fn corrupt_cache_is_reported() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());
        std::fs::write(cache.path(), "{not json").unwrap();

        assert!(matches!(
            cache.load(),
            Err(InstallerError::CorruptProgress { .. })
        ));
        assert!(matches!(
            cache.is_complete(),
            Err(InstallerError::CorruptProgress { .. })
        ));
        assert!(cache.save(ProgressKey::EnforceHttps, true).is_err());
    }

    #[test]
    fn clear_removes_file_and_tolerates_missing() {
        let dir = tempdir().unwrap();
        let cache = cache_in(dir.path());

        cache.save(ProgressKey::EnforceHttps, true).unwrap();
        cache.clear().unwrap();
        assert!(!cache.path().exists());

        cache.clear().unwrap();
    }
}
