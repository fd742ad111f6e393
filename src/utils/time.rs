//! Relative timestamps for questions and answers

use chrono::{DateTime, Utc};

/// Format how long ago `created_at` was, relative to `now`
///
/// Timestamps less than an hour old (or in the future) read "Just now".
pub fn format_time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - created_at).num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_just_now() {
        assert_eq!(format_time_ago(base(), base() + Duration::minutes(59)), "Just now");
        assert_eq!(format_time_ago(base(), base() - Duration::hours(3)), "Just now");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_time_ago(base(), base() + Duration::hours(1)), "1h ago");
        assert_eq!(format_time_ago(base(), base() + Duration::minutes(23 * 60 + 59)), "23h ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(format_time_ago(base(), base() + Duration::hours(24)), "1d ago");
        assert_eq!(format_time_ago(base(), base() + Duration::hours(71)), "2d ago");
    }
}
