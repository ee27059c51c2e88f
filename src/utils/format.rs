//! Number formatting for dashboard counters.

/// Formats a counter compactly: `950`, `1.2K`, `3.4M`.
///
/// One decimal is kept for thousands and millions.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Formats `part / whole` as a percentage with one decimal.
///
/// Returns `"0.0"` when `whole` is zero.
pub fn format_percentage(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", part as f64 / whole as f64 * 100.0)
}
