use chrono::{DateTime, Utc};

/// Coarse relative age for the "Updated" badge.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    if seconds < 60 {
        return "Just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} min{} ago", minutes, if minutes > 1 { "s" } else { "" });
    }
    let hours = minutes / 60;
    format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn relative_age_buckets() {
        let now = Utc::now();
        assert_eq!(format_relative(now, now), "Just now");
        assert_eq!(format_relative(now - Duration::seconds(59), now), "Just now");
        assert_eq!(format_relative(now - Duration::seconds(60), now), "1 min ago");
        assert_eq!(format_relative(now - Duration::minutes(5), now), "5 mins ago");
        assert_eq!(format_relative(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3 hours ago");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let now = Utc::now();
        assert_eq!(format_relative(now + Duration::seconds(30), now), "Just now");
    }
}
