use serde_json::Value;

/// Builds the display line for a record.
///
/// ASCII labels read naturally after the bracketed tag (`[Net] ERR: ...`),
/// pictographic ones lead the line (`🟠 [App]: ...`).
pub fn format_line(tag: &str, label: &str, message: &str) -> String {
    match label.chars().next() {
        None => format!("[{tag}]: {message}"),
        Some(first) if first.is_ascii() => format!("[{tag}] {label}: {message}"),
        Some(_) => format!("{label} [{tag}]: {message}"),
    }
}

/// Whole milliseconds between two clock readings, clamped at zero.
pub fn elapsed_millis(start: f64, end: f64) -> u64 {
    let elapsed = end - start;
    if elapsed.is_finite() && elapsed > 0.0 {
        elapsed as u64
    } else {
        0
    }
}

/// Human readable duration: the two coarsest units plus precision that
/// matches the magnitude.
pub fn format_elapsed(milliseconds: u64) -> String {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let millis = milliseconds % 1000;

    if seconds < 1 {
        return format!("{milliseconds}ms");
    }

    if minutes < 1 {
        return format!("{seconds}.{millis:03}s");
    }

    let secs = seconds % 60;

    if hours < 1 {
        return format!("{minutes}:{secs:02}.{millis:03} (min:sec.ms)");
    }

    let mins = minutes % 60;
    format!("{hours}:{mins:02}:{secs:02} (hr:min:sec)")
}

/// Turns an arbitrary bridge payload message into a single line. Top-level
/// arrays are joined with spaces; nested structures become compact JSON.
pub fn flatten_message(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(flatten_item)
            .collect::<Vec<_>>()
            .join(" "),
        other => flatten_item(other),
    }
}

fn flatten_item(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
