//! The page-driver boundary.
//!
//! Everything that touches a live page sits behind [`PageDriver`]: scraping
//! candidate lists, searching, clicking resolved elements, checkout. The
//! core never holds page objects; scraped items carry an opaque
//! [`ElementHandle`] that is handed back verbatim through
//! [`PageDriver::act_on`]. Retry policy against an unreliable page (fallback
//! selectors, pointer simulation, polling) belongs entirely to driver
//! implementations.

mod fixture;

pub use fixture::{CourtFixture, DriverAction, FixtureDriver, PageFixture, VenueFixture};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Opaque token identifying a page element known to the driver
///
/// Issued by the driver during a scrape and meaningful only to that driver
/// for the lifetime of the scrape. The core treats it as an inert value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(pub u64);

impl std::fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A sport card scraped from the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedSport {
    pub name: String,
    pub handle: ElementHandle,
}

/// A venue card scraped from the search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedVenue {
    pub name: String,
    /// Distance text as shown on the card, e.g. "2.3 km"
    #[serde(default)]
    pub distance: String,
    pub handle: ElementHandle,
}

/// A time-slot option scraped from the booking page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedSlot {
    pub label: String,
    pub handle: ElementHandle,
}

/// A court option scraped from the booking page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedCourt {
    pub name: String,
    /// Price text as shown in the dropdown, e.g. "INR 400"
    #[serde(default)]
    pub price: String,
    pub handle: ElementHandle,
}

/// Capability interface to the live booking page
///
/// Implementations own all browser interaction and its failure handling.
/// Every method is fallible; failures surface as
/// [`BookingError::Driver`](crate::BookingError::Driver).
pub trait PageDriver {
    /// Whether an authenticated session is already active
    fn is_logged_in(&mut self) -> Result<bool>;

    /// Open the login form and submit the phone number, triggering an OTP
    fn begin_login(&mut self, phone: &str) -> Result<()>;

    /// Enter the OTP and confirm it
    fn submit_otp(&mut self, otp: &str) -> Result<()>;

    /// Scrape the sport cards currently on the page
    fn scrape_sports(&mut self) -> Result<Vec<ScrapedSport>>;

    /// Type a location query into the search box and submit it
    fn search_location(&mut self, query: &str) -> Result<()>;

    /// Scrape the venue cards currently on the page
    fn scrape_venues(&mut self) -> Result<Vec<ScrapedVenue>>;

    /// Open the booking page for the venue just clicked and make sure the
    /// given sport is the one selected there
    fn open_booking(&mut self, sport: &str) -> Result<()>;

    /// Pick a day in the calendar popover by its cell label
    fn select_day(&mut self, day_label: &str) -> Result<()>;

    /// Scrape the available time slots
    fn scrape_time_slots(&mut self) -> Result<Vec<ScrapedSlot>>;

    /// Click the duration "+" control once
    fn add_duration_increment(&mut self) -> Result<()>;

    /// Scrape the court options
    fn scrape_courts(&mut self) -> Result<Vec<ScrapedCourt>>;

    /// Click the element behind a previously issued handle
    fn act_on(&mut self, handle: ElementHandle) -> Result<()>;

    /// Add the configured slot to the cart and proceed to checkout
    fn checkout(&mut self) -> Result<()>;
}
