/// Format a task duration the way it reads best at a glance: whole
/// minutes+seconds above a minute, centiseconds above a second, otherwise
/// milliseconds.
pub fn format_duration(duration_ms: u64) -> String {
    if duration_ms >= 60_000 {
        format!("{}m{}s", duration_ms / 60_000, (duration_ms % 60_000) / 1000)
    } else if duration_ms >= 1000 {
        format!("{:.2}s", duration_ms as f64 / 1000.0)
    } else {
        format!("{}ms", duration_ms)
    }
}
