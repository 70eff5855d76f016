//! Candidate lists and the venue catalog builder.
//!
//! Scraped markup is not a reliable venue/non-venue discriminator, so the
//! catalog builder applies a minimum-length heuristic plus a substring
//! denylist, then deduplicates by name while preserving scrape order.

use crate::config::BookingConfig;
use crate::driver::{ElementHandle, ScrapedCourt, ScrapedSlot, ScrapedSport, ScrapedVenue};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A selectable item presented to the user
///
/// Identity for deduplication is the exact `name`; `detail` is secondary
/// display text (distance for venues, price for courts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Display name shown in selection lists
    pub name: String,

    /// Secondary text shown alongside the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Driver-owned token for acting on the underlying element
    pub handle: ElementHandle,
}

impl Candidate {
    /// Create a candidate with no secondary text
    pub fn new(name: impl Into<String>, handle: ElementHandle) -> Self {
        Self { name: name.into(), detail: None, handle }
    }

    /// Builder method: set the secondary text, dropping empty strings
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.detail = if detail.is_empty() { None } else { Some(detail) };
        self
    }
}

impl From<ScrapedSport> for Candidate {
    fn from(sport: ScrapedSport) -> Self {
        Candidate::new(sport.name, sport.handle)
    }
}

impl From<ScrapedSlot> for Candidate {
    fn from(slot: ScrapedSlot) -> Self {
        Candidate::new(slot.label, slot.handle)
    }
}

impl From<ScrapedCourt> for Candidate {
    fn from(court: ScrapedCourt) -> Self {
        Candidate::new(court.name, court.handle).with_detail(court.price)
    }
}

impl From<ScrapedVenue> for Candidate {
    fn from(venue: ScrapedVenue) -> Self {
        Candidate::new(venue.name, venue.handle).with_detail(venue.distance)
    }
}

/// Whether a scraped name looks like a real venue rather than page noise
fn is_valid_venue_name(name: &str, config: &BookingConfig) -> bool {
    if name.chars().count() <= config.min_venue_name_len {
        return false;
    }
    let lowered = name.to_lowercase();
    !config.venue_blocklist.iter().any(|pattern| lowered.contains(pattern.as_str()))
}

/// Build the venue catalog from raw scraped entries.
///
/// Order-preserving: drops names at or below the configured length, drops
/// names containing any blocklist substring, then deduplicates by exact
/// name keeping the first occurrence.
pub fn build_catalog(entries: Vec<ScrapedVenue>, config: &BookingConfig) -> Vec<Candidate> {
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut catalog = Vec::new();

    for entry in entries {
        if !is_valid_venue_name(&entry.name, config) {
            log::debug!("filtered scraped entry: {:?}", entry.name);
            continue;
        }
        if !seen.insert(entry.name.clone()) {
            continue;
        }
        catalog.push(Candidate::from(entry));
    }

    log::info!("venue catalog built: {} candidates", catalog.len());
    catalog
}

/// Split a venue name into venue and locality on the last `" - "`.
///
/// Cosmetic only; does not affect identity or deduplication.
pub fn split_locality(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once(" - ") {
        Some((venue, locality)) => (venue, Some(locality)),
        None => (name, None),
    }
}

/// The slice of the venue catalog currently shown to the user
///
/// Reset to the start for each venue search; [`advance`](BatchWindow::advance)
/// moves forward one batch and clamps so the offset never passes the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchWindow {
    /// Offset of the first shown candidate
    pub start: usize,

    /// Batch size, always > 0
    pub size: usize,
}

impl BatchWindow {
    /// Create a window at the start of the catalog
    pub fn new(size: usize) -> Self {
        Self { start: 0, size: size.max(1) }
    }

    /// The candidates currently in view
    pub fn slice<'a>(&self, catalog: &'a [Candidate]) -> &'a [Candidate] {
        let start = self.start.min(catalog.len());
        let end = (start + self.size).min(catalog.len());
        &catalog[start..end]
    }

    /// Whether another batch exists past the current one
    pub fn has_more(&self, len: usize) -> bool {
        self.start + self.size < len
    }

    /// Move to the next batch, clamped to the catalog length
    pub fn advance(&mut self, len: usize) {
        self.start = (self.start + self.size).min(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(name: &str, distance: &str, id: u64) -> ScrapedVenue {
        ScrapedVenue { name: name.to_string(), distance: distance.to_string(), handle: ElementHandle(id) }
    }

    fn catalog_of(names: &[&str]) -> Vec<Candidate> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Candidate::new(*name, ElementHandle(i as u64)))
            .collect()
    }

    #[test]
    fn test_build_catalog_filters_and_dedups() {
        let entries = vec![
            venue("Badminton", "", 0),
            venue("Bellandur Sports Arena - HSR", "2.3 km", 1),
            venue("Bellandur Sports Arena - HSR", "2.3 km", 2),
        ];

        let catalog = build_catalog(entries, &BookingConfig::default());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "Bellandur Sports Arena - HSR");
        assert_eq!(catalog[0].detail.as_deref(), Some("2.3 km"));
        assert_eq!(catalog[0].handle, ElementHandle(1));
    }

    #[test]
    fn test_build_catalog_drops_short_names() {
        let entries = vec![venue("Arena", "1 km", 0), venue("Play Arena", "1 km", 1)];
        let catalog = build_catalog(entries, &BookingConfig::default());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "Play Arena");
    }

    #[test]
    fn test_build_catalog_blocklist_is_case_insensitive() {
        let entries = vec![venue("FEATURED venues near you", "", 0)];
        assert!(build_catalog(entries, &BookingConfig::default()).is_empty());
    }

    #[test]
    fn test_blocklist_drops_sport_named_venues() {
        // Known quirk of the denylist heuristic: genuinely sport-named
        // venues are filtered along with the category chips
        let entries = vec![venue("Badminton House Arena", "4 km", 0)];
        assert!(build_catalog(entries, &BookingConfig::default()).is_empty());
    }

    #[test]
    fn test_build_catalog_preserves_order() {
        let entries = vec![
            venue("Zanter Courts", "5 km", 0),
            venue("Apex Sports Hub", "1 km", 1),
            venue("Zanter Courts", "5 km", 2),
        ];
        let catalog = build_catalog(entries, &BookingConfig::default());
        let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zanter Courts", "Apex Sports Hub"]);
    }

    #[test]
    fn test_split_locality() {
        assert_eq!(
            split_locality("Bellandur Sports Arena - HSR"),
            ("Bellandur Sports Arena", Some("HSR"))
        );
        // Split on the last occurrence
        assert_eq!(split_locality("A - B - C"), ("A - B", Some("C")));
        assert_eq!(split_locality("Plain Name"), ("Plain Name", None));
    }

    #[test]
    fn test_batch_window_pagination() {
        let catalog = catalog_of(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut window = BatchWindow::new(3);

        assert_eq!(window.slice(&catalog).len(), 3);
        assert_eq!(window.slice(&catalog)[0].name, "a");
        assert!(window.has_more(catalog.len()));

        window.advance(catalog.len());
        assert_eq!(window.start, 3);
        assert_eq!(window.slice(&catalog)[0].name, "d");

        // Third batch is the clamped remainder
        window.advance(catalog.len());
        assert_eq!(window.start, 6);
        assert_eq!(window.slice(&catalog).len(), 1);
        assert!(!window.has_more(catalog.len()));

        // Further advances are a no-op past the end
        window.advance(catalog.len());
        assert_eq!(window.start, 7);
        window.advance(catalog.len());
        assert_eq!(window.start, 7);
        assert!(window.slice(&catalog).is_empty());
    }

    #[test]
    fn test_batch_window_size_floor() {
        let window = BatchWindow::new(0);
        assert_eq!(window.size, 1);
    }

    #[test]
    fn test_candidate_empty_detail_dropped() {
        let candidate = Candidate::new("Apex Sports Hub", ElementHandle(0)).with_detail("");
        assert_eq!(candidate.detail, None);
    }
}
