//! Push and pull output interpretation
//!
//! git reports transfer sizes and merge conflicts only through free text, so
//! the captured output of `push --progress` and `pull` is scanned here.

use regex::Regex;
use std::sync::OnceLock;

/// Literal marker git prints when a merge cannot complete automatically.
const CONFLICT_MARKER: &str = "CONFLICT";

fn transfer_size_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)Writing objects:.+?(\d+(?:\.\d+)?)\s+(bytes|KiB|MiB|GiB|TiB)")
            .expect("transfer size pattern is valid")
    })
}

/// Extracts the byte count a push reported in its "Writing objects" phase.
///
/// Returns 0 when no phase line matches; not every push reports a size (an
/// up-to-date push, for example), so a missing match is not an error. The
/// scaled value is truncated toward zero.
pub fn parse_push_bytes(output: &str) -> u64 {
    let Some(captures) = transfer_size_pattern().captures(output) else {
        return 0;
    };

    let value: f64 = match captures[1].parse() {
        Ok(value) => value,
        Err(_) => return 0,
    };

    let multiplier: f64 = match captures[2].to_lowercase().as_str() {
        "kib" => 1024.0,
        "mib" => 1024.0 * 1024.0,
        "gib" => 1024.0 * 1024.0 * 1024.0,
        // git's own size formatting stops at GiB, but the unit table keeps TiB
        "tib" => 1024.0 * 1024.0 * 1024.0 * 1024.0,
        _ => 1.0,
    };

    (value * multiplier) as u64
}

/// Whether tool output contains the merge-conflict marker.
pub fn has_conflict(output: &str) -> bool {
    output.contains(CONFLICT_MARKER)
}
