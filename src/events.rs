//! Event surface for sync progress reporting
//!
//! The orchestrator reports its work through listeners registered by the
//! caller, so a progress UI or a logger can consume the stream without being
//! wired into the orchestrator's control flow. Dispatch is synchronous and in
//! emission order: one initialized event per upload run, then per-repository
//! progress terminating with `is_complete`, and at most one fatal error per
//! run. A blocking listener stalls the run.

use crate::error::SyncError;

/// A progress report for a single repository operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Name of the repository currently being processed.
    pub repository: String,
    /// True on the final report for this repository.
    pub is_complete: bool,
    /// Human-readable description of the current step.
    pub message: String,
    /// Completion of the current repository's operation, 0-100. Local to the
    /// repository, not a whole-run percentage.
    pub percent_complete: f32,
}

/// Consumer of sync events. Methods default to no-ops so implementors can
/// pick the notifications they care about.
pub trait EventSink {
    /// Fired once per upload run, before any repository work, with the names
    /// of all repositories about to be processed.
    fn on_initialized(&mut self, _repositories: &[String]) {}

    /// Fired as a repository operation advances.
    fn on_progress(&mut self, _progress: &Progress) {}

    /// Fired at most once per run, right before the error is returned to the
    /// caller.
    fn on_fatal_error(&mut self, _error: &SyncError) {}
}

/// Sink that discards every event.
pub struct NullSink;

impl EventSink for NullSink {}
