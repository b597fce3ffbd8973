//! Upload run summary

use std::fmt;

use crate::utils::format_bytes;

/// Aggregate totals for one upload run.
///
/// `total_files_changed` counts units of work: changed files plus unpushed
/// commits, summed across repositories. Folding the two counts into one
/// figure is deliberate and preserved as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadResult {
    pub total_files_changed: u64,
    pub total_bytes_pushed: u64,
}

impl fmt::Display for UploadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total_files_changed {
            0 => write!(f, "No files changed"),
            n => write!(
                f,
                "Upload complete. {n} files changed ({})",
                format_bytes(self.total_bytes_pushed)
            ),
        }
    }
}
