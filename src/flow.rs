//! End-to-end booking orchestration.
//!
//! [`BookingFlow`] walks one booking from login through checkout, pulling
//! candidate lists from the [`PageDriver`], resolving choices through a
//! [`SelectionSession`] and handing resolved handles back to the driver.

use crate::auth::{is_valid_otp, is_valid_phone};
use crate::catalog::{Candidate, build_catalog, split_locality};
use crate::config::BookingConfig;
use crate::date::BookingDate;
use crate::driver::PageDriver;
use crate::duration::{format_duration, increments_from_default, parse_duration};
use crate::error::{BookingError, Result};
use crate::session::{Prompter, SelectionSession};

/// What a completed booking run selected
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub sport: String,
    pub venue: String,
    pub date: BookingDate,
    /// None when the booking page listed no time slots
    pub time_slot: Option<String>,
    pub duration_hours: f64,
    /// None when the booking page listed no court options
    pub court: Option<String>,
}

/// Drives one booking end-to-end against a page driver
pub struct BookingFlow<'a, D: PageDriver, P: Prompter> {
    driver: &'a mut D,
    prompter: &'a mut P,
    config: BookingConfig,
}

impl<'a, D: PageDriver, P: Prompter> BookingFlow<'a, D, P> {
    pub fn new(driver: &'a mut D, prompter: &'a mut P, config: BookingConfig) -> Self {
        Self { driver, prompter, config }
    }

    /// Run the whole flow: login, sport, venue, date, time slot, duration,
    /// court, checkout.
    pub fn run(&mut self) -> Result<BookingSummary> {
        self.login()?;

        let sport = self.choose_sport()?;
        self.choose_location()?;
        let venue = self.choose_venue()?;

        self.driver.open_booking(&sport)?;

        let date = self.choose_date()?;
        self.driver.select_day(&date.day_label())?;

        let time_slot = self.choose_time_slot()?;
        let duration_hours = self.choose_duration()?;
        let court = self.choose_court()?;

        self.driver.checkout()?;
        self.prompter.say("Booking flow completed.");

        Ok(BookingSummary { sport, venue, date, time_slot, duration_hours, court })
    }

    fn login(&mut self) -> Result<()> {
        if self.driver.is_logged_in()? {
            self.prompter.say("Already logged in, skipping login.");
            return Ok(());
        }

        let phone = self.prompter.read_line("Please enter your phone number: ")?;
        if !is_valid_phone(&phone) {
            return Err(BookingError::LoginAborted("invalid phone number".to_string()));
        }
        self.driver.begin_login(&phone)?;

        let otp = self
            .prompter
            .read_line("Please enter the 5-digit OTP you received: ")?;
        if !is_valid_otp(&otp) {
            return Err(BookingError::LoginAborted("invalid OTP format".to_string()));
        }
        self.driver.submit_otp(&otp)?;

        self.prompter.say("Login completed.");
        Ok(())
    }

    fn choose_sport(&mut self) -> Result<String> {
        let candidates: Vec<Candidate> =
            self.driver.scrape_sports()?.into_iter().map(Candidate::from).collect();

        let index =
            SelectionSession::new(self.prompter, &self.config).select_sport(&candidates)?;
        let chosen = &candidates[index];

        log::info!("sport selected: {}", chosen.name);
        self.driver.act_on(chosen.handle)?;
        Ok(chosen.name.clone())
    }

    fn choose_location(&mut self) -> Result<()> {
        let query = self.prompter.read_line(
            "Which area do you want to search for venues in? (e.g., Bellandur, HSR, Koramangala): ",
        )?;
        if !query.is_empty() {
            self.driver.search_location(&query)?;
        }
        Ok(())
    }

    fn choose_venue(&mut self) -> Result<String> {
        let catalog = build_catalog(self.driver.scrape_venues()?, &self.config);

        let index = SelectionSession::new(self.prompter, &self.config).select_venue(&catalog)?;
        let chosen = &catalog[index];

        let (venue, locality) = split_locality(&chosen.name);
        log::info!("venue selected: {} (locality: {})", venue, locality.unwrap_or("n/a"));

        self.driver.act_on(chosen.handle)?;
        Ok(chosen.name.clone())
    }

    fn choose_date(&mut self) -> Result<BookingDate> {
        loop {
            let input = self
                .prompter
                .read_line("What date do you want to book for? (YYYY-MM-DD): ")?;
            match BookingDate::parse(&input) {
                Some(date) => return Ok(date),
                None => self.prompter.say("Invalid date. Use YYYY-MM-DD, e.g. 2026-09-01."),
            }
        }
    }

    fn choose_time_slot(&mut self) -> Result<Option<String>> {
        let candidates: Vec<Candidate> =
            self.driver.scrape_time_slots()?.into_iter().map(Candidate::from).collect();

        // The slot picker is absent on some venues; not a hard stop
        if candidates.is_empty() {
            self.prompter.say("No time slots listed; continuing.");
            return Ok(None);
        }

        let index =
            SelectionSession::new(self.prompter, &self.config).select_time_slot(&candidates)?;
        let chosen = &candidates[index];

        log::info!("time slot selected: {}", chosen.name);
        self.driver.act_on(chosen.handle)?;
        Ok(Some(chosen.name.clone()))
    }

    fn choose_duration(&mut self) -> Result<f64> {
        let input = self.prompter.read_line(
            "How many hours do you want to book? (e.g., 1.5, 2 hrs, 1 hr 30 min, 90 min): ",
        )?;

        let hours = match parse_duration(&input) {
            Some(hours) if hours > 0.0 => hours,
            _ => {
                self.prompter.say(&format!(
                    "Invalid duration. Defaulting to {}.",
                    format_duration(self.config.default_duration_hours)
                ));
                self.config.default_duration_hours
            }
        };

        let clicks = increments_from_default(hours, &self.config);
        for _ in 0..clicks {
            self.driver.add_duration_increment()?;
        }

        self.prompter
            .say(&format!("Duration set to {}.", format_duration(hours)));
        Ok(hours)
    }

    fn choose_court(&mut self) -> Result<Option<String>> {
        let candidates: Vec<Candidate> =
            self.driver.scrape_courts()?.into_iter().map(Candidate::from).collect();

        // Single-court venues never show the dropdown; not a hard stop
        if candidates.is_empty() {
            self.prompter.say("No court options listed; continuing.");
            return Ok(None);
        }

        let index =
            SelectionSession::new(self.prompter, &self.config).select_court(&candidates)?;
        let chosen = &candidates[index];

        log::info!("court selected: {}", chosen.name);
        self.driver.act_on(chosen.handle)?;
        Ok(Some(chosen.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{DriverAction, FixtureDriver, PageFixture, VenueFixture};
    use crate::session::ScriptedPrompter;

    fn fixture() -> PageFixture {
        PageFixture {
            logged_in: true,
            sports: vec!["Badminton".to_string(), "Football".to_string()],
            venues: vec![VenueFixture {
                name: "Bellandur Sports Arena - HSR".to_string(),
                distance: "2.3 km".to_string(),
            }],
            time_slots: vec!["6:00 PM".to_string(), "7:00 PM".to_string()],
            courts: vec![],
        }
    }

    #[test]
    fn test_login_skipped_when_authenticated() {
        let mut driver = FixtureDriver::new(fixture());
        let mut prompter = ScriptedPrompter::new([
            "1",          // sport
            "",           // no location search
            "2026-09-01", // date
            "1",          // time slot
            "1",          // duration
        ]);

        let summary = BookingFlow::new(&mut driver, &mut prompter, BookingConfig::default())
            .run()
            .unwrap();

        assert_eq!(summary.sport, "Badminton");
        assert!(!driver
            .actions()
            .iter()
            .any(|action| matches!(action, DriverAction::LoginStarted(_))));
    }

    #[test]
    fn test_login_runs_when_not_authenticated() {
        let mut driver = FixtureDriver::new(PageFixture { logged_in: false, ..fixture() });
        let mut prompter = ScriptedPrompter::new([
            "9876543210",
            "12345",
            "1",
            "",
            "2026-09-01",
            "1",
            "1",
        ]);

        BookingFlow::new(&mut driver, &mut prompter, BookingConfig::default())
            .run()
            .unwrap();

        assert_eq!(driver.actions()[0], DriverAction::LoginStarted("9876543210".to_string()));
        assert_eq!(driver.actions()[1], DriverAction::OtpSubmitted("12345".to_string()));
    }

    #[test]
    fn test_invalid_otp_aborts_login() {
        let mut driver = FixtureDriver::new(PageFixture { logged_in: false, ..fixture() });
        let mut prompter = ScriptedPrompter::new(["9876543210", "12a45"]);

        let result =
            BookingFlow::new(&mut driver, &mut prompter, BookingConfig::default()).run();
        assert!(matches!(result, Err(BookingError::LoginAborted(_))));
    }

    #[test]
    fn test_invalid_date_reprompts() {
        let mut driver = FixtureDriver::new(fixture());
        let mut prompter = ScriptedPrompter::new([
            "1",
            "",
            "next friday", // rejected
            "2026-09-01",
            "1",
            "1",
        ]);

        let summary = BookingFlow::new(&mut driver, &mut prompter, BookingConfig::default())
            .run()
            .unwrap();

        assert_eq!(summary.date, BookingDate::parse("2026-09-01").unwrap());
        assert!(prompter.transcript().iter().any(|line| line.contains("Invalid date")));
    }

    #[test]
    fn test_duration_clicks_and_fallback() {
        let mut driver = FixtureDriver::new(fixture());
        let mut prompter = ScriptedPrompter::new(["1", "", "2026-09-01", "1", "2 hrs"]);

        let summary = BookingFlow::new(&mut driver, &mut prompter, BookingConfig::default())
            .run()
            .unwrap();

        assert_eq!(summary.duration_hours, 2.0);
        let increments = driver
            .actions()
            .iter()
            .filter(|action| matches!(action, DriverAction::DurationIncremented))
            .count();
        assert_eq!(increments, 2);
    }

    #[test]
    fn test_unparseable_duration_uses_default() {
        let mut driver = FixtureDriver::new(fixture());
        let mut prompter = ScriptedPrompter::new(["1", "", "2026-09-01", "1", "whatever"]);

        let summary = BookingFlow::new(&mut driver, &mut prompter, BookingConfig::default())
            .run()
            .unwrap();

        assert_eq!(summary.duration_hours, 1.0);
        assert!(prompter.transcript().iter().any(|line| line.contains("Invalid duration")));
    }

    #[test]
    fn test_missing_courts_is_not_fatal() {
        let mut driver = FixtureDriver::new(fixture());
        let mut prompter = ScriptedPrompter::new(["1", "", "2026-09-01", "1", "1"]);

        let summary = BookingFlow::new(&mut driver, &mut prompter, BookingConfig::default())
            .run()
            .unwrap();

        assert_eq!(summary.court, None);
        assert!(driver.actions().contains(&DriverAction::CheckedOut));
    }

    #[test]
    fn test_location_search_skipped_when_blank() {
        let mut driver = FixtureDriver::new(fixture());
        let mut prompter = ScriptedPrompter::new(["1", "", "2026-09-01", "1", "1"]);

        BookingFlow::new(&mut driver, &mut prompter, BookingConfig::default())
            .run()
            .unwrap();

        assert!(!driver
            .actions()
            .iter()
            .any(|action| matches!(action, DriverAction::LocationSearched(_))));
    }
}
