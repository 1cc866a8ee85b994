//! File and JSON helpers
//!
//! Readers treat a missing or empty file as "nothing there" (`Ok(None)`)
//! rather than an error, so callers can probe optional inputs without
//! checking first. Genuine I/O and parse failures still propagate.

use crate::errors::AppResult;
use glob::MatchOptions;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Check if a given path is a regular file with data in it
pub fn is_valid(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref())
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

/// Append data to a file, creating it if needed
pub fn write_file(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    file.write_all(data.as_ref())?;
    Ok(())
}

/// Read a file's raw bytes, or `None` if it is missing or empty
pub fn read_file(path: impl AsRef<Path>) -> AppResult<Option<Vec<u8>>> {
    let path = path.as_ref();
    if !is_valid(path) {
        debug!("Skipping unreadable or empty file: {}", path.display());
        return Ok(None);
    }
    Ok(Some(fs::read(path)?))
}

/// Read a file as text lines split on `\n`, or `None` if it is missing or empty
///
/// A trailing `\r` is kept, matching a plain split on newline. Invalid UTF-8
/// is replaced rather than rejected.
pub fn read_lines(path: impl AsRef<Path>) -> AppResult<Option<Vec<String>>> {
    Ok(read_file(path)?.map(|data| {
        String::from_utf8_lossy(&data)
            .split('\n')
            .map(str::to_string)
            .collect()
    }))
}

/// Load an arbitrary JSON file, or `None` if it is missing or empty
pub fn load_json(path: impl AsRef<Path>) -> AppResult<Option<Value>> {
    load_json_as(path)
}

/// Load a JSON file into a typed value
pub fn load_json_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> AppResult<Option<T>> {
    match read_file(path)? {
        Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
        None => Ok(None),
    }
}

/// Make a directory if it doesn't already exist
///
/// Returns true if the directory exists afterwards. Newly created
/// directories are made world-writable on unix so that tools running as
/// other users can drop output into them.
pub fn mkdir(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if path.is_dir() {
        return true;
    }

    if let Err(e) = fs::create_dir(path) {
        warn!("Failed to create directory {}: {}", path.display(), e);
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o777)) {
            warn!("Failed to set permissions on {}: {}", path.display(), e);
            return false;
        }
    }

    true
}

/// Recursively list regular files under a directory, skipping dotfiles
///
/// Hidden directories are not descended into. Results are sorted.
pub fn list_dir(directory: impl AsRef<Path>) -> AppResult<Vec<PathBuf>> {
    let directory = directory.as_ref();
    let escaped = glob::Pattern::escape(&directory.to_string_lossy());
    let pattern = format!("{}/**/*", escaped.trim_end_matches('/'));

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Decode UTF-8, handing the original bytes back on failure
pub fn utf_decode(data: Vec<u8>) -> Result<String, Vec<u8>> {
    String::from_utf8(data).map_err(|e| e.into_bytes())
}
