/// Format milliseconds as zero-padded `MM:SS`, as drawn next to the progress bar.
///
/// Minutes are not wrapped into hours, so long mixes render as e.g. `125:07`.
pub fn format_clock(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Format milliseconds as `M:SS`, as used in captions.
pub fn format_clock_short(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Fraction of the track already played, in `[0, 1]`.
///
/// A zero duration yields `0.0`; progress beyond the duration (stale position data)
/// is clamped to `1.0`.
pub fn progress_fraction(progress_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 0.0;
    }
    (progress_ms.min(duration_ms) as f64) / (duration_ms as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/time.rs"]
mod tests;
