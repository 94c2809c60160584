//! Filesystem helpers shared by the scaffold and merge paths.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, ThemeError};

/// Recursively copy a directory tree.
///
/// The destination must not exist yet. There is no rollback: a failure
/// mid-copy leaves a partially populated destination.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        return Err(ThemeError::TargetExists(dst.to_path_buf()));
    }
    copy_tree(src, dst)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| ThemeError::io(dst, e))?;

    let entries = fs::read_dir(src).map_err(|e| ThemeError::io(src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ThemeError::io(src, e))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| ThemeError::io(&src_path, e))?;

        if file_type.is_dir() {
            copy_tree(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).map_err(|e| ThemeError::io(&src_path, e))?;
        }
    }
    Ok(())
}

/// Replace every occurrence of each token in a text file, in place.
///
/// Tokens are matched literally. The `{{...}}` placeholders contain
/// characters that are regex metacharacters, so a pattern-based replacement
/// would misbehave; literal matching is the contract here.
pub fn replace_in_file(path: &Path, replacements: &[(&str, &str)]) -> Result<()> {
    let mut content = fs::read_to_string(path).map_err(|e| ThemeError::io(path, e))?;
    for (token, value) in replacements {
        content = content.replace(token, value);
    }
    fs::write(path, content).map_err(|e| ThemeError::io(path, e))
}

/// Read and deserialize a JSON file, attaching the path to any failure.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| ThemeError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| ThemeError::json(path, e))
}
