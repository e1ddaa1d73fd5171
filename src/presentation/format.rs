use chrono::{DateTime, Utc};

/// Relative age of an RFC 3339 timestamp: `just now`, `15m ago`, `3h ago`, `2d ago`.
///
/// Unparseable input is returned unchanged.
pub fn format_time_ago(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(then) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };

    let diff_mins = (now - then.with_timezone(&Utc)).num_minutes();
    if diff_mins < 1 {
        return "just now".to_string();
    }
    if diff_mins < 60 {
        return format!("{}m ago", diff_mins);
    }

    let diff_hours = diff_mins / 60;
    if diff_hours < 24 {
        return format!("{}h ago", diff_hours);
    }

    format!("{}d ago", diff_hours / 24)
}

/// Replace a leading `/Users/<name>` or `/home/<name>` with `~`.
pub fn truncate_path(path: &str) -> String {
    for prefix in ["/Users/", "/home/"] {
        let Some(rest) = path.strip_prefix(prefix) else {
            continue;
        };
        let (user, tail) = match rest.find('/') {
            Some(index) => rest.split_at(index),
            None => (rest, ""),
        };
        if !user.is_empty() {
            return format!("~{}", tail);
        }
    }
    path.to_string()
}

/// Add `https://` to a stored URL that has no scheme.
pub fn display_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
