//! Reading and overwriting target files
//!
//! A target is read whole, transformed in memory and written back whole.
//! Writes go through a temporary file in the target's directory that is
//! then renamed over the target, so an interrupted run leaves either the
//! old or the new content on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use similar::TextDiff;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{FixupError, Result};

/// Read the full content of a target file
pub fn read_target(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| FixupError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the content of a target file
///
/// A symlinked target is written through: the file it points to gets the
/// new content and the link stays in place.
pub fn write_target(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| FixupError::Write {
        path: path.to_path_buf(),
        source,
    };

    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match resolved.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // Keep the original permission bits on the replacement
    let permissions = fs::metadata(&resolved).map(|m| m.permissions()).ok();

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    if let Some(permissions) = permissions {
        fs::set_permissions(tmp.path(), permissions).map_err(write_err)?;
    }
    tmp.persist(&resolved).map_err(|e| write_err(e.error))?;

    debug!(path = %resolved.display(), bytes = content.len(), "target written");
    Ok(())
}

/// Backup path for `path` stamped with `stamp`, e.g. `index.js.20240101120000.bak`
pub fn backup_path(path: &Path, stamp: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.bak", stamp));
    path.with_file_name(name)
}

/// Copy the target next to itself before it is overwritten
pub fn backup_target(path: &Path) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S").to_string();
    let backup = backup_path(path, &stamp);

    fs::copy(path, &backup).map_err(|source| FixupError::Backup {
        path: path.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;

    debug!(backup = %backup.display(), "backup created");
    Ok(backup)
}

/// Unified diff between the current and rewritten content
pub fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    let name = path.display().to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", name), &format!("b/{}", name))
        .to_string()
}
