//! Artifact output.

use crate::error::CodegenError;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `contents` to `path`, replacing any previous file.
///
/// The text goes to a hidden sibling file that is then renamed over `path`,
/// so a failed write never leaves a truncated artifact behind. The parent
/// directory must already exist.
///
/// # Errors
/// Returns `CodegenError::Write` if the file cannot be written or renamed.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), CodegenError> {
    let write_error = |source| CodegenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let staging = staging_path(path);
    if let Err(e) = fs::write(&staging, contents) {
        let _ = fs::remove_file(&staging);
        return Err(write_error(e));
    }
    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(write_error(e));
    }

    Ok(())
}

/// Returns the hidden staging path next to `path`, e.g. `.Expr.java.tmp`.
fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}
