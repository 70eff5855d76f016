use serde::{Deserialize, Serialize};

/// Scraped venue names at or below this length are discarded as noise
pub const DEFAULT_MIN_VENUE_NAME_LEN: usize = 5;

/// Number of venues shown per interactive batch
pub const DEFAULT_VENUE_BATCH_SIZE: usize = 3;

/// Duration the booking page starts at, in hours
pub const DEFAULT_DURATION_HOURS: f64 = 1.0;

/// Hours added per click of the duration "+" control
pub const DURATION_INCREMENT_HOURS: f64 = 0.5;

/// Substrings that mark a scraped card as non-venue text: category chips,
/// rating tokens and UI chrome share DOM structure with real venue cards.
/// Sport names in this list also drop genuinely sport-named venues
/// ("Badminton House Arena"); kept to match observed behavior.
pub const DEFAULT_VENUE_BLOCKLIST: &[&str] = &[
    "featured",
    "regular",
    "mixed doubles",
    "doubles",
    "singles",
    "badminton",
    "football",
    "cricket",
    "swimming",
    "tennis",
    "table tennis",
    "3.39",
    "2.91",
    "4.2",
    "4.5",
    "4.8",
    "4.9",
    "5.0",
    "playo",
    "logo",
    "menu",
    "search",
    "filter",
];

/// Configuration for a booking run
///
/// All values have working defaults; builder methods allow overriding
/// individual fields. The struct is plain data and is passed by reference
/// into the catalog builder and selection session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Lowercased substrings that disqualify a scraped venue name
    pub venue_blocklist: Vec<String>,

    /// Venue names with at most this many characters are discarded
    pub min_venue_name_len: usize,

    /// How many venues to show per interactive batch
    pub venue_batch_size: usize,

    /// Fallback duration when user input is unparseable or non-positive
    pub default_duration_hours: f64,

    /// Hours added per duration "+" click
    pub duration_increment_hours: f64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            venue_blocklist: DEFAULT_VENUE_BLOCKLIST.iter().map(|s| s.to_string()).collect(),
            min_venue_name_len: DEFAULT_MIN_VENUE_NAME_LEN,
            venue_batch_size: DEFAULT_VENUE_BATCH_SIZE,
            default_duration_hours: DEFAULT_DURATION_HOURS,
            duration_increment_hours: DURATION_INCREMENT_HOURS,
        }
    }
}

impl BookingConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: replace the venue blocklist
    pub fn with_blocklist(mut self, patterns: Vec<String>) -> Self {
        self.venue_blocklist = patterns;
        self
    }

    /// Builder method: set the venue batch size (must be > 0)
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.venue_batch_size = size.max(1);
        self
    }

    /// Builder method: set the fallback duration in hours
    pub fn with_default_duration(mut self, hours: f64) -> Self {
        self.default_duration_hours = hours;
        self
    }
}
