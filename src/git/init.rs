//! Working-copy initialization

use std::path::Path;

use super::runner::GitRunner;
use crate::error::SyncError;

/// Guarantees that `path` is a git working copy bound to `remote_url`.
///
/// Idempotent: an existing working copy is left untouched, so the remote is
/// bound exactly once, at creation time. A directory that exists but is not a
/// repository is never modified; initialization refuses with
/// [`SyncError::InvalidRepositoryLocation`] instead.
pub fn ensure_initialized<R: GitRunner>(
    runner: &R,
    path: &Path,
    remote_url: &str,
) -> Result<(), SyncError> {
    let directory_exists = path.is_dir();
    let is_git_repo = path.join(".git").is_dir();

    if directory_exists && is_git_repo {
        return Ok(());
    }

    if directory_exists {
        return Err(SyncError::InvalidRepositoryLocation {
            path: path.to_path_buf(),
        });
    }

    std::fs::create_dir_all(path)?;
    runner.run(&["init"], path)?;
    runner.run(&["remote", "add", "origin", remote_url], path)?;
    Ok(())
}
