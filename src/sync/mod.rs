//! Sync orchestration
//!
//! Drives the upload and download cycles across every repository in a
//! configuration: resolve the machine-local path, make sure the working copy
//! exists and is bound to its remote, then stage/commit/push or pull.
//! Repositories are processed strictly in configuration order; each git call
//! blocks until the child process exits, and event dispatch happens inline on
//! the same thread. A second invocation racing against the same working copy
//! is not guarded against.

mod result;


pub use result::UploadResult;

use chrono::Local;
use std::path::Path;

use crate::config::{normalize_machine, resolve_repo_path, Configuration, Repository};
use crate::error::SyncError;
use crate::events::{EventSink, Progress};
use crate::git::{ensure_initialized, has_conflict, parse_push_bytes, GitRunner};
use crate::utils::format_bytes;

/// Orchestrates upload and download runs over a set of configured
/// repositories.
pub struct Syncer<R: GitRunner> {
    runner: R,
    machine: String,
    sinks: Vec<Box<dyn EventSink>>,
}

impl<R: GitRunner> Syncer<R> {
    /// Creates an orchestrator for the given machine identity. The identity
    /// is normalized (uppercase, trimmed) to match `MachinePaths` keys.
    pub fn new(runner: R, machine: &str) -> Self {
        Syncer {
            runner,
            machine: normalize_machine(machine),
            sinks: Vec::new(),
        }
    }

    /// Registers a consumer for initialized/progress/fatal-error events.
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Uploads local changes for every repository, in configuration order.
    ///
    /// Emits one initialized event up front with the full name list, then
    /// per-repository progress ending at 100% with `is_complete`. A
    /// repository with a clean tree and nothing unpushed is reported as
    /// "No changes to upload" and skipped without staging, committing or
    /// pushing. The first failing repository aborts the run: the error is
    /// reported once through the fatal-error event and returned; totals
    /// accumulated for earlier repositories are lost with the run.
    pub fn upload(&mut self, config: &Configuration) -> Result<UploadResult, SyncError> {
        let mut result = UploadResult::default();

        let names: Vec<String> = config.repositories.iter().map(|r| r.name.clone()).collect();
        self.emit_initialized(&names);

        for repo in &config.repositories {
            if let Err(error) = self.upload_repo(repo, &mut result) {
                self.emit_fatal(&error);
                return Err(error);
            }
        }

        Ok(result)
    }

    /// Pulls every repository, in configuration order.
    ///
    /// A conflict marker in the pull output fails the run with
    /// [`SyncError::MergeConflict`]; repositories after the failing one are
    /// not processed. Unlike upload, this path emits no initialized or
    /// progress events (an asymmetry carried over from the tray-era
    /// behavior).
    pub fn download(&mut self, config: &Configuration) -> Result<(), SyncError> {
        for repo in &config.repositories {
            self.download_repo(repo)?;
        }
        Ok(())
    }

    fn upload_repo(&mut self, repo: &Repository, result: &mut UploadResult) -> Result<(), SyncError> {
        let path = resolve_repo_path(repo, &self.machine)?;
        ensure_initialized(&self.runner, &path, &repo.remote_url)?;

        let status = self.runner.run(&["status", "--porcelain"], &path)?;
        let unpushed = self.query_unpushed(&path)?;

        if status.trim().is_empty() && unpushed.trim().is_empty() {
            self.emit_progress(&repo.name, true, "No changes to upload".to_string(), 100.0);
            return Ok(());
        }

        self.emit_progress(&repo.name, false, "Uploading changes".to_string(), 0.0);

        let files_changed = count_lines(&status);
        let unpushed_commits = count_lines(&unpushed);
        result.total_files_changed += (files_changed + unpushed_commits) as u64;

        let summary = change_summary(files_changed, unpushed_commits);
        self.emit_progress(&repo.name, false, format!("Adding and committing {summary}"), 5.0);

        self.runner.run(&["add", "."], &path)?;
        let message = format!(
            "Auto-upload from {} at {}",
            self.machine,
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        self.runner.run(&["commit", "-m", &message], &path)?;

        self.emit_progress(&repo.name, false, "Uploading changes".to_string(), 15.0);
        let push_output = self.runner.run(&["push", "--progress"], &path)?;
        let bytes_pushed = parse_push_bytes(&push_output);
        result.total_bytes_pushed += bytes_pushed;

        self.emit_progress(
            &repo.name,
            true,
            format!("Uploaded {}", format_bytes(bytes_pushed)),
            100.0,
        );
        Ok(())
    }

    fn download_repo(&mut self, repo: &Repository) -> Result<(), SyncError> {
        let path = resolve_repo_path(repo, &self.machine)?;
        ensure_initialized(&self.runner, &path, &repo.remote_url)?;

        let output = self.runner.run(&["pull"], &path)?;
        if has_conflict(&output) {
            return Err(SyncError::MergeConflict {
                repo: repo.name.clone(),
                path,
            });
        }
        Ok(())
    }

    /// Lists commits ahead of the upstream tracking branch, one per line.
    ///
    /// The log command fails when no upstream is configured; that reads as
    /// "nothing known to be unpushed" rather than a fatal condition.
    fn query_unpushed(&self, path: &Path) -> Result<String, SyncError> {
        match self.runner.run(&["log", "@{u}..HEAD", "--oneline"], path) {
            Ok(output) => Ok(output),
            Err(SyncError::GitCommand { .. }) => Ok(String::new()),
            Err(other) => Err(other),
        }
    }

    fn emit_initialized(&mut self, repositories: &[String]) {
        for sink in &mut self.sinks {
            sink.on_initialized(repositories);
        }
    }

    fn emit_progress(
        &mut self,
        repository: &str,
        is_complete: bool,
        message: String,
        percent_complete: f32,
    ) {
        let progress = Progress {
            repository: repository.to_string(),
            is_complete,
            message,
            percent_complete,
        };
        for sink in &mut self.sinks {
            sink.on_progress(&progress);
        }
    }

    fn emit_fatal(&mut self, error: &SyncError) {
        for sink in &mut self.sinks {
            sink.on_fatal_error(error);
        }
    }
}

fn count_lines(output: &str) -> usize {
    output.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Builds the "N changed files and M unpushed commits" summary, dropping
/// either side (and the "and") when its count is zero.
fn change_summary(files_changed: usize, unpushed_commits: usize) -> String {
    let mut message = if files_changed > 0 {
        format!("{files_changed} changed files")
    } else {
        String::new()
    };

    if unpushed_commits > 0 {
        message = if message.is_empty() {
            format!("{unpushed_commits} unpushed commits")
        } else {
            format!("{message} and {unpushed_commits} unpushed commits")
        };
    }

    message
}
