//! Git command execution
//!
//! The git binary is the only integration point that spawns processes, so it
//! sits behind the [`GitRunner`] trait; tests substitute a scripted fake
//! instead of spawning real children.

use std::path::Path;
use std::process::Command;

use crate::error::SyncError;

/// Runs one git command to completion and captures its combined output.
pub trait GitRunner {
    /// Invokes `git` with `args` in `cwd`, blocking until the process exits.
    ///
    /// Returns stdout with stderr appended, verbatim; callers interpret the
    /// text (empty-status checks, conflict-marker scans, byte-count parsing).
    /// A process that cannot be launched maps to [`SyncError::GitStart`]; a
    /// non-zero exit maps to [`SyncError::GitCommand`] carrying the command
    /// text, working directory and captured output.
    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, SyncError>;
}

/// [`GitRunner`] backed by a real `git` child process.
///
/// Each call blocks until the child exits and both streams are drained.
/// There is no timeout: a hung git process hangs the caller. Concurrent
/// invocations against the same working copy are not guarded against.
pub struct GitProcess;

impl GitRunner for GitProcess {
    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, SyncError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(SyncError::GitStart)?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(SyncError::GitCommand {
                command: args.join(" "),
                working_dir: cwd.to_path_buf(),
                output: combined,
            });
        }

        Ok(combined)
    }
}
