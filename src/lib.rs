//! # courtside
//!
//! The computation core of an interactive sports-venue booking tool:
//! duration parsing, scraped-text matching, venue catalog building and the
//! interactive selection session, with all live page interaction behind the
//! [`PageDriver`] trait.
//!
//! ## Design
//!
//! The core performs no I/O of its own. Scraped candidate lists come in from
//! a [`PageDriver`]; user input comes in through a [`Prompter`]; the core
//! resolves selections and hands opaque [`ElementHandle`]s back to the driver
//! to act on. Retry policy against an unreliable live page (fallback
//! selectors, pointer simulation, polling) is entirely a driver concern.
//!
//! ## Dry run
//!
//! [`FixtureDriver`] answers scrapes from a JSON document and records the
//! actions it is asked to perform, which makes the whole flow testable
//! without a browser:
//!
//! ```
//! use courtside::{
//!     BookingConfig, BookingFlow, FixtureDriver, PageFixture, ScriptedPrompter, VenueFixture,
//! };
//!
//! let mut driver = FixtureDriver::new(PageFixture {
//!     sports: vec!["Badminton".to_string()],
//!     venues: vec![VenueFixture {
//!         name: "Bellandur Sports Arena - HSR".to_string(),
//!         distance: "2.3 km".to_string(),
//!     }],
//!     time_slots: vec!["6:00 PM".to_string()],
//!     ..Default::default()
//! });
//! let mut prompter = ScriptedPrompter::new(["1", "", "2026-09-01", "1", "1 hr"]);
//!
//! let summary = BookingFlow::new(&mut driver, &mut prompter, BookingConfig::default())
//!     .run()
//!     .unwrap();
//! assert_eq!(summary.sport, "Badminton");
//! ```
//!
//! ## Module overview
//!
//! - [`duration`]: free-text duration parsing and increment math
//! - [`text`]: normalization and numeric-or-name selection matching
//! - [`catalog`]: candidate filtering, dedup and batch pagination
//! - [`session`]: prompter capability trait and per-category selection
//! - [`flow`]: end-to-end booking orchestration
//! - [`driver`]: the page-driver boundary and the JSON fixture driver
//! - [`date`], [`auth`]: booking-date and login input validation
//! - [`config`], [`error`]: run configuration and error types

pub mod auth;
pub mod catalog;
pub mod config;
pub mod date;
pub mod driver;
pub mod duration;
pub mod error;
pub mod flow;
pub mod session;
pub mod text;

pub use catalog::{BatchWindow, Candidate, build_catalog, split_locality};
pub use config::BookingConfig;
pub use date::BookingDate;
pub use driver::{
    CourtFixture, DriverAction, ElementHandle, FixtureDriver, PageDriver, PageFixture,
    ScrapedCourt, ScrapedSlot, ScrapedSport, ScrapedVenue, VenueFixture,
};
pub use duration::{format_duration, increments_from_default, parse_duration};
pub use error::{BookingError, Category, Result};
pub use flow::{BookingFlow, BookingSummary};
pub use session::{Prompter, ScriptedPrompter, SelectionSession, StdioPrompter};
pub use text::{MatchMode, Selection, normalize, normalize_loose, resolve_selection};
