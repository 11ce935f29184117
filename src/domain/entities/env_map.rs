//! Environment Map Entity
//!
//! The flat `KEY=VALUE` configuration consumed by the deployment step.
//! Insertion order is kept so the file is written back in the order it was read.

use indexmap::IndexMap;

/// Well-known keys of the https environment file
pub mod keys {
    pub const HTTPS_DOMAIN: &str = "HTTPS_DOMAIN";
    pub const HTTPS_ADMIN_EMAIL: &str = "HTTPS_ADMIN_EMAIL";
    pub const CERT_FULLCHAIN_PATH: &str = "CERT_FULLCHAIN_PATH";
    pub const CERT_PRIVKEY_PATH: &str = "CERT_PRIVKEY_PATH";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentMap {
    entries: IndexMap<String, String>,
}

impl EnvironmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse env-file text.
    ///
    /// Blank lines, `#` comments and lines without `=` are skipped. The line is
    /// split on the first `=`, so values may themselves contain `=`.
    pub fn parse(content: &str) -> Self {
        let mut map = Self::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            map.set(key, value.trim());
        }
        map
    }

    /// Render one `KEY=VALUE` line per entry, in map order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key`, or an empty string when the key is absent.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every entry of `snapshot` into the map, overwriting existing keys.
    pub fn apply(&mut self, snapshot: &IndexMap<String, String>) {
        for (key, value) in snapshot {
            self.set(key.clone(), value.clone());
        }
    }
}

impl FromIterator<(String, String)> for EnvironmentMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
