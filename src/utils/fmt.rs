//! Display formatting helpers

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;
const TB: u64 = GB * 1024;

/// Formats a byte count as a short human-readable size.
///
/// Uses binary multiples with up to two decimal places, trailing zeros
/// trimmed: `2621440` becomes `"2.5 MB"`, `215` becomes `"215 B"`.
pub fn format_bytes(bytes: u64) -> String {
    let (scaled, unit) = match bytes {
        b if b >= TB => (b as f64 / TB as f64, "TB"),
        b if b >= GB => (b as f64 / GB as f64, "GB"),
        b if b >= MB => (b as f64 / MB as f64, "MB"),
        b if b >= KB => (b as f64 / KB as f64, "KB"),
        b => return format!("{b} B"),
    };

    let formatted = format!("{scaled:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {unit}")
}
