use crate::utils::time::discord_long_datetime;
use std::fmt::Display;

/// Ephemeral acknowledgement sent when the real message goes to the audit channel.
pub const AUDIT_ACK_MESSAGE: &str = "Done ✅";

pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

pub fn format_checked_in(mention: impl Display, checkin_ts: i64) -> String {
    format!(
        "✅ {} checked in at {}",
        mention,
        discord_long_datetime(checkin_ts)
    )
}

pub fn format_checked_out(mention: impl Display, duration_seconds: u64) -> String {
    format!(
        "⏱ {} checked out\n• Worked: **{}**",
        mention,
        format_duration(duration_seconds)
    )
}

pub fn format_already_checked_in(since: i64) -> String {
    format!("⚠️ Already checked in since {}", discord_long_datetime(since))
}

pub fn format_not_checked_in() -> String {
    "⚠️ You are not checked in.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_seconds_only() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59), "59s");
    }

    #[test]
    fn duration_minutes() {
        assert_eq!(format_duration(60), "1m 0s");
        assert_eq!(format_duration(3599), "59m 59s");
    }

    #[test]
    fn duration_hours() {
        assert_eq!(format_duration(3661), "1h 1m 1s");
        assert_eq!(format_duration(7200), "2h 0m 0s");
        assert_eq!(format_duration(90_000), "25h 0m 0s");
    }

    #[test]
    fn checkin_message_mentions_user_and_time() {
        assert_eq!(
            format_checked_in("<@42>", 1_700_000_000),
            "✅ <@42> checked in at <t:1700000000:F>"
        );
    }

    #[test]
    fn checkout_message_contains_worked_time() {
        assert_eq!(
            format_checked_out("<@42>", 3661),
            "⏱ <@42> checked out\n• Worked: **1h 1m 1s**"
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            format_already_checked_in(1_700_000_000),
            "⚠️ Already checked in since <t:1700000000:F>"
        );
        assert_eq!(format_not_checked_in(), "⚠️ You are not checked in.");
    }
}
