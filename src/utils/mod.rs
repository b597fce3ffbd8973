pub(crate) mod fmt;

// Public API - formatting helpers used by commands and the orchestrator
pub use fmt::format_bytes;
