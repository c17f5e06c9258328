//! Human-readable wording for recipe fields.

use chrono::{DateTime, Utc};

/// Words a preparation time in minutes, e.g. "2 hours 5 minutes".
///
/// Zero and negative times come back as an empty string.
pub fn friendly_prep_time(minutes: i32) -> String {
    if minutes <= 0 {
        return String::new();
    }

    let hours = minutes / 60;
    let minutes = minutes % 60;

    let mut parts = Vec::new();
    if hours == 1 {
        parts.push("1 hour".to_string());
    } else if hours > 1 {
        parts.push(format!("{} hours", hours));
    }
    if minutes == 1 {
        parts.push("1 minute".to_string());
    } else if minutes > 1 {
        parts.push(format!("{} minutes", minutes));
    }

    parts.join(" ")
}

/// Words a creation timestamp, e.g. "Monday 1 Jan 2024, 9:05 pm".
pub fn friendly_created_at(created_at: DateTime<Utc>) -> String {
    created_at.format("%A %-d %b %Y, %-I:%M %P").to_string()
}

/// Splits a directions string written as one comma-separated line into steps.
pub fn directions_steps(directions: &str) -> Vec<String> {
    directions.split(", ").map(|step| step.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_prep_time_zero_is_blank() {
        assert_eq!(friendly_prep_time(0), "");
    }

    #[test]
    fn test_prep_time_minutes_only() {
        assert_eq!(friendly_prep_time(1), "1 minute");
        assert_eq!(friendly_prep_time(45), "45 minutes");
    }

    #[test]
    fn test_prep_time_whole_hours() {
        assert_eq!(friendly_prep_time(60), "1 hour");
        assert_eq!(friendly_prep_time(120), "2 hours");
    }

    #[test]
    fn test_prep_time_hours_and_minutes() {
        assert_eq!(friendly_prep_time(61), "1 hour 1 minute");
        assert_eq!(friendly_prep_time(125), "2 hours 5 minutes");
    }

    #[test]
    fn test_created_at_wording() {
        let when = Utc.with_ymd_and_hms(2024, 1, 1, 21, 5, 0).unwrap();
        assert_eq!(friendly_created_at(when), "Monday 1 Jan 2024, 9:05 pm");
    }

    #[test]
    fn test_directions_split_into_steps() {
        assert_eq!(
            directions_steps("Boil water, add pasta, drain"),
            vec!["Boil water", "add pasta", "drain"]
        );
    }

    #[test]
    fn test_directions_without_commas_are_one_step() {
        assert_eq!(directions_steps("Stir"), vec!["Stir"]);
    }
}
