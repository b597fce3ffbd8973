//! Process-level git plumbing
//!
//! Everything that touches the external `git` binary lives here: running
//! commands, initializing working copies and interpreting the free-text
//! output git produces.

pub mod init;
pub mod output;
pub mod runner;

// Re-export commonly used items
pub use init::ensure_initialized;
pub use output::{has_conflict, parse_push_bytes};
pub use runner::{GitProcess, GitRunner};
