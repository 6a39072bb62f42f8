/// Fraction of the current mode still remaining, clamped to `0.0..=1.0`.
///
/// A zero `total` yields `0.0`.
pub fn progress(remaining_secs: u64, total_secs: u64) -> f64 {
    if total_secs == 0 {
        return 0.0;
    }
    (remaining_secs as f64 / total_secs as f64).clamp(0.0, 1.0)
}

/// Split seconds into zero-padded `(minutes, seconds)` strings.
pub fn format_clock(remaining_secs: u64) -> (String, String) {
    (
        format!("{:02}", remaining_secs / 60),
        format!("{:02}", remaining_secs % 60),
    )
}

/// `MM:SS` text for a remaining time.
pub fn clock_text(remaining_secs: u64) -> String {
    let (minutes, seconds) = format_clock(remaining_secs);
    format!("{minutes}:{seconds}")
}
