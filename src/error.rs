//! Typed error conditions for sync operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by upload and download processing.
///
/// Every variant is a definite, caller-visible failure: nothing is retried and
/// nothing is swallowed. Each error is raised at the point of detection,
/// reported once through the fatal-error event on the upload path, and then
/// propagated to the caller. Processing of the repository list stops at the
/// first failure; results already accumulated remain valid.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No local-path mapping exists for the current machine.
    #[error("Repository '{repo}' does not have a local path specified on this machine ({machine})")]
    RepositoryPathNotFound { repo: String, machine: String },

    /// The target path exists but is not a git working copy. Refusing to
    /// proceed keeps initialization from touching unrelated directory
    /// contents.
    #[error("Path '{}' exists, but it is not a git repository", .path.display())]
    InvalidRepositoryLocation { path: PathBuf },

    /// The git process could not be launched at all.
    #[error("Unable to start git process: {0}")]
    GitStart(#[source] io::Error),

    /// git exited non-zero; carries the full command, working directory and
    /// captured output for diagnosis.
    #[error("Git command 'git {command}' failed in '{dir}': {output}", dir = .working_dir.display())]
    GitCommand {
        command: String,
        working_dir: PathBuf,
        output: String,
    },

    /// A pull reported a conflict marker; manual resolution is required.
    #[error("Merge conflict in repo '{repo}' at '{}'", .path.display())]
    MergeConflict { repo: String, path: PathBuf },

    /// A filesystem operation outside git failed (directory creation).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
