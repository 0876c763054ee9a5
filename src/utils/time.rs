use chrono::{DateTime, Utc};

/// Current time as seconds since the Unix epoch.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Discord timestamp markup in long date/time style (`<t:…:F>`).
///
/// The client renders it in each viewer's own locale and time zone.
pub fn discord_long_datetime(timestamp: i64) -> String {
    format!("<t:{}:F>", timestamp)
}

pub fn format_datetime_utc(timestamp: i64) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("@{}", timestamp),
    }
}
