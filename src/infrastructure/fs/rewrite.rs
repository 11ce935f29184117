//! In-place file rewrite
//!
//! Writes the edited content to a sibling temporary file, copies the original
//! permissions onto it and renames it over the original. The temporary file is
//! removed on every failure path (it is owned by a `NamedTempFile` until
//! persisted).

use std::io::Write;
use std::path::Path;

use regex::{NoExpand, Regex};
use tempfile::NamedTempFile;

use crate::error::{InstallerError, InstallerResult};

/// Replace every match of `pattern` with `replacement`, line by line.
///
/// `replacement` is inserted literally (`$` is not a capture reference).
/// Returns the number of lines that changed.
pub fn replace_in_file(path: &Path, pattern: &Regex, replacement: &str) -> InstallerResult<usize> {
    let rewrite_err = |source: std::io::Error| InstallerError::FileRewrite {
        path: path.to_path_buf(),
        source,
    };

    let original = std::fs::read_to_string(path).map_err(rewrite_err)?;
    let permissions = std::fs::metadata(path).map_err(rewrite_err)?.permissions();

    let mut changed = 0;
    let mut rewritten = String::with_capacity(original.len());
    for line in original.split_inclusive('\n') {
        let (body, ending) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };
        let replaced = pattern.replace_all(body, NoExpand(replacement));
        if replaced != body {
            changed += 1;
        }
        rewritten.push_str(&replaced);
        rewritten.push_str(ending);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(rewrite_err)?;
    tmp.write_all(rewritten.as_bytes()).map_err(rewrite_err)?;
    tmp.as_file().sync_all().map_err(rewrite_err)?;
    std::fs::set_permissions(tmp.path(), permissions).map_err(rewrite_err)?;
    tmp.persist(path).map_err(|e| rewrite_err(e.error))?;

    tracing::debug!(path = %path.display(), changed, "rewrote file in place");
    Ok(changed)
}
