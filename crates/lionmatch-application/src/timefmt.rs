//! Relative timestamp labels for the conversation list.

use chrono::{DateTime, Utc};

/// Compact "how long ago" label: `now`, `12m`, `3h`, `5d`, then a short
/// date (`9 Jun`) past a week.
pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "now".to_string();
    }
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h", hours);
    }
    let days = elapsed.num_days();
    if days < 7 {
        return format!("{}d", days);
    }
    timestamp.format("%-d %b").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_buckets() {
        let now = at("2024-06-10T12:00:00Z");
        assert_eq!(relative_label(at("2024-06-10T11:59:30Z"), now), "now");
        assert_eq!(relative_label(at("2024-06-10T11:48:00Z"), now), "12m");
        assert_eq!(relative_label(at("2024-06-10T09:00:00Z"), now), "3h");
        assert_eq!(relative_label(at("2024-06-05T12:00:00Z"), now), "5d");
    }

    #[test]
    fn test_older_than_a_week_is_a_date() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let old = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        assert_eq!(relative_label(old, now), "1 May");
    }

    #[test]
    fn test_future_timestamp_reads_as_now() {
        let now = at("2024-06-10T12:00:00Z");
        assert_eq!(relative_label(at("2024-06-10T12:00:30Z"), now), "now");
    }
}
