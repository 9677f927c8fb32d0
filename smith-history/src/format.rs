use chrono::{DateTime, Utc};

const KIB: usize = 1024;
const MIB: usize = 1024 * 1024;

/// Human relative time for a version timestamp, as seen at `now`.
///
/// Timestamps in the future read as "Just now". Anything a week or more old
/// is shown as an absolute date such as `Mar 1, 2026`.
pub fn format_version_date(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    match elapsed.num_days() {
        1 => "Yesterday".to_string(),
        days if days < 7 => format!("{days} days ago"),
        _ => created_at.format("%b %-d, %Y").to_string(),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Size of `code` in UTF-8 bytes, as `B`, `KB` or `MB`.
pub fn get_code_size(code: &str) -> String {
    let bytes = code.len();
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        format_version_date(now() - d, now())
    }

    #[test]
    fn test_relative_buckets() {
        assert_eq!(ago(Duration::seconds(30)), "Just now");
        assert_eq!(ago(Duration::seconds(-90)), "Just now");
        assert_eq!(ago(Duration::minutes(1)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(59)), "59 minutes ago");
        assert_eq!(ago(Duration::minutes(60)), "1 hour ago");
        assert_eq!(ago(Duration::hours(23)), "23 hours ago");
        assert_eq!(ago(Duration::hours(24)), "Yesterday");
        assert_eq!(ago(Duration::hours(47)), "Yesterday");
        assert_eq!(ago(Duration::days(2)), "2 days ago");
        assert_eq!(ago(Duration::days(6)), "6 days ago");
    }

    #[test]
    fn test_absolute_date_after_a_week() {
        assert_eq!(ago(Duration::days(7)), "Mar 3, 2026");
        assert_eq!(ago(Duration::days(40)), "Jan 29, 2026");
    }

    #[test]
    fn test_code_size() {
        assert_eq!(get_code_size(""), "0 B");
        assert_eq!(get_code_size(&"a".repeat(500)), "500 B");
        assert_eq!(get_code_size(&"a".repeat(1023)), "1023 B");
        assert_eq!(get_code_size(&"a".repeat(1024)), "1.0 KB");
        assert_eq!(get_code_size(&"a".repeat(2048)), "2.0 KB");
        assert_eq!(get_code_size(&"a".repeat(1536)), "1.5 KB");
        assert_eq!(get_code_size(&"a".repeat(MIB)), "1.0 MB");
    }

    #[test]
    fn test_code_size_counts_bytes() {
        assert_eq!(get_code_size("é"), "2 B");
    }
}
