//! A [`PageDriver`] backed by a static JSON document.
//!
//! Used by the CLI dry-run mode and by tests: scrapes answer from fixture
//! data, handles are issued sequentially per scrape, and every action is
//! recorded for later inspection instead of touching a browser.

use crate::driver::{
    ElementHandle, PageDriver, ScrapedCourt, ScrapedSlot, ScrapedSport, ScrapedVenue,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_true() -> bool {
    true
}

/// Venue entry in a [`PageFixture`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueFixture {
    pub name: String,
    #[serde(default)]
    pub distance: String,
}

/// Court entry in a [`PageFixture`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourtFixture {
    pub name: String,
    #[serde(default)]
    pub price: String,
}

/// Static page content for a [`FixtureDriver`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageFixture {
    /// Whether the session starts authenticated (default: true)
    #[serde(default = "default_true")]
    pub logged_in: bool,
    pub sports: Vec<String>,
    pub venues: Vec<VenueFixture>,
    pub time_slots: Vec<String>,
    pub courts: Vec<CourtFixture>,
}

impl Default for PageFixture {
    fn default() -> Self {
        Self {
            logged_in: true,
            sports: Vec::new(),
            venues: Vec::new(),
            time_slots: Vec::new(),
            courts: Vec::new(),
        }
    }
}

/// An action the fixture driver was asked to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverAction {
    LoginStarted(String),
    OtpSubmitted(String),
    LocationSearched(String),
    Clicked(ElementHandle),
    BookingOpened(String),
    DaySelected(String),
    DurationIncremented,
    CheckedOut,
}

/// JSON-backed driver that records actions instead of driving a browser
pub struct FixtureDriver {
    fixture: PageFixture,
    next_handle: u64,
    actions: Vec<DriverAction>,
}

impl FixtureDriver {
    /// Create a driver over fixture content
    pub fn new(fixture: PageFixture) -> Self {
        Self { fixture, next_handle: 0, actions: Vec::new() }
    }

    /// Parse a fixture from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a fixture from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Everything the driver has been asked to do, in order
    pub fn actions(&self) -> &[DriverAction] {
        &self.actions
    }

    fn issue_handle(&mut self) -> ElementHandle {
        let handle = ElementHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }
}

impl PageDriver for FixtureDriver {
    fn is_logged_in(&mut self) -> Result<bool> {
        Ok(self.fixture.logged_in)
    }

    fn begin_login(&mut self, phone: &str) -> Result<()> {
        log::info!("fixture: login started for {phone}");
        self.actions.push(DriverAction::LoginStarted(phone.to_string()));
        Ok(())
    }

    fn submit_otp(&mut self, otp: &str) -> Result<()> {
        log::info!("fixture: OTP submitted");
        self.actions.push(DriverAction::OtpSubmitted(otp.to_string()));
        self.fixture.logged_in = true;
        Ok(())
    }

    fn scrape_sports(&mut self) -> Result<Vec<ScrapedSport>> {
        let sports = self
            .fixture
            .sports
            .clone()
            .into_iter()
            .map(|name| ScrapedSport { name, handle: self.issue_handle() })
            .collect();
        Ok(sports)
    }

    fn search_location(&mut self, query: &str) -> Result<()> {
        log::info!("fixture: location search for {query:?}");
        self.actions.push(DriverAction::LocationSearched(query.to_string()));
        Ok(())
    }

    fn scrape_venues(&mut self) -> Result<Vec<ScrapedVenue>> {
        let venues = self
            .fixture
            .venues
            .clone()
            .into_iter()
            .map(|venue| ScrapedVenue {
                name: venue.name,
                distance: venue.distance,
                handle: self.issue_handle(),
            })
            .collect();
        Ok(venues)
    }

    fn open_booking(&mut self, sport: &str) -> Result<()> {
        log::info!("fixture: booking page opened for {sport}");
        self.actions.push(DriverAction::BookingOpened(sport.to_string()));
        Ok(())
    }

    fn select_day(&mut self, day_label: &str) -> Result<()> {
        log::info!("fixture: day {day_label} selected");
        self.actions.push(DriverAction::DaySelected(day_label.to_string()));
        Ok(())
    }

    fn scrape_time_slots(&mut self) -> Result<Vec<ScrapedSlot>> {
        let slots = self
            .fixture
            .time_slots
            .clone()
            .into_iter()
            .map(|label| ScrapedSlot { label, handle: self.issue_handle() })
            .collect();
        Ok(slots)
    }

    fn add_duration_increment(&mut self) -> Result<()> {
        self.actions.push(DriverAction::DurationIncremented);
        Ok(())
    }

    fn scrape_courts(&mut self) -> Result<Vec<ScrapedCourt>> {
        let courts = self
            .fixture
            .courts
            .clone()
            .into_iter()
            .map(|court| ScrapedCourt {
                name: court.name,
                price: court.price,
                handle: self.issue_handle(),
            })
            .collect();
        Ok(courts)
    }

    fn act_on(&mut self, handle: ElementHandle) -> Result<()> {
        log::info!("fixture: clicked element {handle}");
        self.actions.push(DriverAction::Clicked(handle));
        Ok(())
    }

    fn checkout(&mut self) -> Result<()> {
        log::info!("fixture: checkout completed");
        self.actions.push(DriverAction::CheckedOut);
        Ok(())
    }
}
