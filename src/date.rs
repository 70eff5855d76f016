use serde::{Deserialize, Serialize};

/// A booking date entered as `YYYY-MM-DD`
///
/// Validation is deliberately shallow: strict field widths and range checks,
/// no calendar arithmetic. The site's own calendar is the source of truth for
/// which days actually exist and are bookable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl BookingDate {
    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// Returns `None` unless fields have exact widths (4-2-2) and pass the
    /// range checks: year 2020–2030, month 1–12, day 1–31.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().split('-');
        let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return None;
        }

        let year: u16 = year.parse().ok()?;
        let month: u8 = month.parse().ok()?;
        let day: u8 = day.parse().ok()?;

        if !(2020..=2030).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day)
        {
            return None;
        }

        Some(Self { year, month, day })
    }

    /// Day label as rendered in the calendar popover, without a leading zero
    pub fn day_label(&self) -> String {
        self.day.to_string()
    }

    /// Whether a scraped calendar cell corresponds to this date's day.
    ///
    /// Cells may render with or without a leading zero.
    pub fn matches_day_cell(&self, cell_text: &str) -> bool {
        let text = cell_text.trim();
        text == self.day_label() || text.trim_start_matches('0') == self.day_label()
    }
}

impl std::fmt::Display for BookingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let date = BookingDate::parse("2025-07-04").unwrap();
        assert_eq!((date.year, date.month, date.day), (2025, 7, 4));
    }

    #[test]
    fn test_parse_rejects_wrong_widths() {
        assert!(BookingDate::parse("2025-7-4").is_none());
        assert!(BookingDate::parse("25-07-04").is_none());
        assert!(BookingDate::parse("2025-07-04-01").is_none());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(BookingDate::parse("2019-01-01").is_none());
        assert!(BookingDate::parse("2031-01-01").is_none());
        assert!(BookingDate::parse("2025-13-01").is_none());
        assert!(BookingDate::parse("2025-01-32").is_none());
        assert!(BookingDate::parse("2025-00-10").is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(BookingDate::parse("tomorrow").is_none());
        assert!(BookingDate::parse("").is_none());
        assert!(BookingDate::parse("2025/07/04").is_none());
    }

    #[test]
    fn test_day_label_strips_leading_zero() {
        let date = BookingDate::parse("2025-07-04").unwrap();
        assert_eq!(date.day_label(), "4");
    }

    #[test]
    fn test_matches_day_cell() {
        let date = BookingDate::parse("2025-07-04").unwrap();
        assert!(date.matches_day_cell("4"));
        assert!(date.matches_day_cell("04"));
        assert!(date.matches_day_cell(" 4 "));
        assert!(!date.matches_day_cell("14"));
    }

    #[test]
    fn test_display_round_trip() {
        let date = BookingDate::parse("2025-07-04").unwrap();
        assert_eq!(date.to_string(), "2025-07-04");
        assert_eq!(BookingDate::parse(&date.to_string()), Some(date));
    }
}
