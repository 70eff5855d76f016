//! Text normalization and numeric-or-name selection matching.
//!
//! Users pick from candidate lists either by 1-based number or by typing
//! part of a name; matching tolerates case and (for time-slot labels)
//! spacing differences, so copy/pasted or partially typed entries resolve.

use crate::catalog::Candidate;

/// Canonicalize for time-slot label comparison: lowercase, all whitespace
/// removed ("6:00 PM" and "6:00pm" compare equal)
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}

/// Canonicalize for name matching: lowercase and trimmed, inner spacing kept
pub fn normalize_loose(text: &str) -> String {
    text.trim().to_lowercase()
}

/// How candidate names are canonicalized before substring matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Lowercase + trim; for sport, venue and court names
    Loose,
    /// Lowercase + strip all whitespace; for time-slot labels
    Compact,
}

impl MatchMode {
    fn apply(self, text: &str) -> String {
        match self {
            MatchMode::Loose => normalize_loose(text),
            MatchMode::Compact => normalize(text),
        }
    }
}

/// Outcome of resolving user input against a candidate list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Exactly one candidate resolved; index is in range
    Index(usize),

    /// Several candidate names matched; indices in list order
    Ambiguous(Vec<usize>),

    /// No candidate number or name matched
    NoMatch,
}

/// Resolve user input against an ordered candidate list.
///
/// An integer between 1 and the list length selects directly (1-based
/// display, 0-based result); an out-of-range integer is [`Selection::NoMatch`]
/// and never falls through to name matching. Any other input is matched as
/// a normalized substring of the candidate names.
pub fn resolve_selection(input: &str, candidates: &[Candidate], mode: MatchMode) -> Selection {
    let trimmed = input.trim();

    if let Ok(number) = trimmed.parse::<usize>() {
        return if (1..=candidates.len()).contains(&number) {
            Selection::Index(number - 1)
        } else {
            Selection::NoMatch
        };
    }

    let needle = mode.apply(trimmed);
    if needle.is_empty() {
        return Selection::NoMatch;
    }

    let matches: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| mode.apply(&candidate.name).contains(&needle))
        .map(|(index, _)| index)
        .collect();

    match matches.len() {
        0 => Selection::NoMatch,
        1 => Selection::Index(matches[0]),
        _ => Selection::Ambiguous(matches),
    }
}
