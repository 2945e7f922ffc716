use chrono::{DateTime, Utc};

/// Case-insensitive substring check using Unicode lowercase folding.
/// An empty needle is contained in every haystack.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Format the age of a timestamp relative to `now`, e.g. "5m ago", "2h ago".
pub fn format_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - at).num_minutes();
    if minutes < 1 {
        // Also covers clock skew
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        let hours = minutes / 60;
        if minutes % 60 >= 30 {
            // Round up: 1h 30m+ becomes 2h
            format!("{}h ago", hours + 1)
        } else {
            format!("{}h ago", hours)
        }
    } else {
        let days = minutes / 1440;
        if (minutes % 1440) / 60 >= 12 {
            format!("{}d ago", days + 1)
        } else {
            format!("{}d ago", days)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Madrid", "mad"));
        assert!(contains_ignore_case("Spain", "SPAIN"));
        assert!(contains_ignore_case("Spain", ""));
        assert!(!contains_ignore_case("Rome", "xyz"));
        assert!(!contains_ignore_case("", "a"));
    }

    #[test]
    fn test_contains_ignore_case_unicode() {
        assert!(contains_ignore_case("Reykjavík", "VÍK"));
        assert!(contains_ignore_case("ÅLAND ISLANDS", "åland"));
        assert!(contains_ignore_case("Côte d'Ivoire", "CÔTE"));
    }

    #[test]
    fn test_format_age() {
        let now = Utc::now();
        assert_eq!(format_age(now, now), "just now");
        assert_eq!(format_age(now + Duration::minutes(5), now), "just now");
        assert_eq!(format_age(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_age(now - Duration::minutes(80), now), "1h ago");
        assert_eq!(format_age(now - Duration::minutes(90), now), "2h ago");
        assert_eq!(format_age(now - Duration::hours(26), now), "1d ago");
        assert_eq!(format_age(now - Duration::hours(36), now), "2d ago");
    }
}
