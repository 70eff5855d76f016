//! Free-text duration parsing.
//!
//! Duration entry tolerates human input ("1 hr 30 min", "90 min", "1.5")
//! without a rigid format. Patterns are tried most-specific first so the
//! result is deterministic.

use crate::config::BookingConfig;
use regex::Regex;
use std::sync::LazyLock;

static MINUTES_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)\s*min").unwrap());

static HOURS_AND_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)\s*hrs?(?:\s*(\d+)\s*min)?").unwrap());

static HOURS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)\s*(?:hrs?|hours?)").unwrap());

/// Parse a free-form duration string into hours.
///
/// Recognized forms, first match wins:
/// 1. minutes only: `"90 min"` → 1.5
/// 2. hours with optional minutes: `"1 hr 30 min"` → 1.5, `"2 hrs"` → 2.0
/// 3. hours only: `"2 hours"` → 2.0
/// 4. bare number: `"1.5"` → 1.5
///
/// Matching is case-insensitive and the input is trimmed first. Returns
/// `None` when nothing matches. Non-positive values are returned as parsed;
/// validating positivity is the caller's job.
pub fn parse_duration(text: &str) -> Option<f64> {
    let input = text.trim().to_lowercase();

    if let Some(caps) = MINUTES_ONLY.captures(&input) {
        let minutes: f64 = caps[1].parse().ok()?;
        return Some(minutes / 60.0);
    }

    if let Some(caps) = HOURS_AND_MINUTES.captures(&input) {
        // The minutes part needs its "min" unit; a bare trailing number
        // ("1 hr 30") is ignored rather than guessed at
        let hours: f64 = caps[1].parse().ok()?;
        let minutes: f64 = caps.get(2).map_or(0.0, |m| m.as_str().parse().unwrap_or(0.0));
        return Some(hours + minutes / 60.0);
    }

    if let Some(caps) = HOURS_ONLY.captures(&input) {
        let hours: f64 = caps[1].parse().ok()?;
        return Some(hours);
    }

    input.parse::<f64>().ok()
}

/// Number of duration "+" clicks needed to go from the configured default
/// to the requested duration. Requests at or below the default need none,
/// as does a config with a non-positive increment.
pub fn increments_from_default(hours: f64, config: &BookingConfig) -> u32 {
    if config.duration_increment_hours <= 0.0 {
        return 0;
    }
    let clicks = ((hours - config.default_duration_hours) / config.duration_increment_hours).round();
    if clicks > 0.0 { clicks as u32 } else { 0 }
}

/// Format a duration in hours as a human-readable string
pub fn format_duration(hours: f64) -> String {
    let whole = hours.trunc() as i64;
    let minutes = ((hours - hours.trunc()) * 60.0).round() as i64;

    let plural = |n: i64| if n == 1 { "" } else { "s" };

    if minutes == 0 {
        format!("{} hour{}", whole, plural(whole))
    } else if whole == 0 {
        format!("{} minutes", minutes)
    } else {
        format!("{} hour{} {} minutes", whole, plural(whole), minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_only() {
        assert_eq!(parse_duration("90 min"), Some(1.5));
        assert_eq!(parse_duration("30min"), Some(0.5));
        assert_eq!(parse_duration("45 mins"), Some(0.75));
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(parse_duration("1 hr 30 min"), Some(1.5));
        assert_eq!(parse_duration("2hrs 15min"), Some(2.25));
        assert_eq!(parse_duration("1 HR 30 MIN"), Some(1.5));
    }

    #[test]
    fn test_minutes_without_unit_are_ignored() {
        // A trailing number with no "min" unit does not count as minutes
        assert_eq!(parse_duration("1 hr 30"), Some(1.0));
    }

    #[test]
    fn test_hours_only() {
        assert_eq!(parse_duration("2 hrs"), Some(2.0));
        assert_eq!(parse_duration("1 hour"), Some(1.0));
        assert_eq!(parse_duration("3 hours"), Some(3.0));
        assert_eq!(parse_duration("1.5 hr"), Some(1.5));
    }

    #[test]
    fn test_bare_number() {
        assert_eq!(parse_duration("1.5"), Some(1.5));
        assert_eq!(parse_duration("2"), Some(2.0));
        assert_eq!(parse_duration("  0.5  "), Some(0.5));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_duration("abc"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("min 90"), None);
    }

    #[test]
    fn test_non_positive_passes_through() {
        // Positivity is the caller's responsibility
        assert_eq!(parse_duration("0"), Some(0.0));
        assert_eq!(parse_duration("-1"), Some(-1.0));
    }

    #[test]
    fn test_hours_patterns_agree_without_minutes() {
        // "N hr" must resolve identically whether the optional-minutes or
        // the hours-only pattern catches it
        for n in ["1", "2", "3", "1.5"] {
            let with_opt_min = parse_duration(&format!("{} hr", n));
            let hours_only = parse_duration(&format!("{} hour", n));
            assert_eq!(with_opt_min, hours_only);
        }
    }

    #[test]
    fn test_increments_from_default() {
        let config = BookingConfig::default();
        assert_eq!(increments_from_default(1.0, &config), 0);
        assert_eq!(increments_from_default(1.5, &config), 1);
        assert_eq!(increments_from_default(2.0, &config), 2);
        assert_eq!(increments_from_default(0.5, &config), 0);
    }

    #[test]
    fn test_non_positive_increment_needs_no_clicks() {
        let mut config = BookingConfig::default();
        config.duration_increment_hours = 0.0;
        assert_eq!(increments_from_default(2.0, &config), 0);

        config.duration_increment_hours = -0.5;
        assert_eq!(increments_from_default(2.0, &config), 0);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1.0), "1 hour");
        assert_eq!(format_duration(2.0), "2 hours");
        assert_eq!(format_duration(1.5), "1 hour 30 minutes");
        assert_eq!(format_duration(0.75), "45 minutes");
    }
}
