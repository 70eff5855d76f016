//! Interactive selection over scraped candidate lists.
//!
//! Terminal prompting sits behind the [`Prompter`] capability trait so the
//! session logic is deterministic under test: [`StdioPrompter`] talks to the
//! terminal, [`ScriptedPrompter`] replays queued replies.

use crate::catalog::{BatchWindow, Candidate};
use crate::config::BookingConfig;
use crate::error::{BookingError, Category, Result};
use crate::text::{MatchMode, Selection, resolve_selection};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Blocking textual input/output capability
pub trait Prompter {
    /// Show a prompt and read one line of input, trimmed
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Show a message to the user
    fn say(&mut self, message: &str);
}

/// Prompter over stdin/stdout
#[derive(Debug, Default)]
pub struct StdioPrompter;

impl StdioPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for StdioPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Prompter that replays queued replies and records the conversation
///
/// Runs out of replies with [`BookingError::PromptExhausted`], which makes
/// a test that consumes more input than scripted fail loudly.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that will answer prompts with `replies` in order
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { replies: replies.into_iter().map(Into::into).collect(), transcript: Vec::new() }
    }

    /// Every prompt and message seen so far, in order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(prompt.to_string());
        self.replies
            .pop_front()
            .map(|reply| reply.trim().to_string())
            .ok_or_else(|| BookingError::PromptExhausted { prompt: prompt.to_string() })
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}

/// One interactive selection pass over candidate lists.
///
/// Each category is independent and stateless once resolved; the returned
/// index is always in range for the list that was passed in.
///
/// Policies match observed behavior: sport, court and time-slot selection
/// fall back (first candidate on no match, first match on ambiguity) so the
/// flow keeps moving; venue selection re-prompts, since picking the wrong
/// venue is the costly mistake.
pub struct SelectionSession<'a, P: Prompter> {
    prompter: &'a mut P,
    config: &'a BookingConfig,
}

impl<'a, P: Prompter> SelectionSession<'a, P> {
    pub fn new(prompter: &'a mut P, config: &'a BookingConfig) -> Self {
        Self { prompter, config }
    }

    /// Pick a sport by number or partial name
    pub fn select_sport(&mut self, candidates: &[Candidate]) -> Result<usize> {
        self.select_with_fallback(
            Category::Sport,
            candidates,
            MatchMode::Loose,
            "Which sport do you want? Enter the number or name: ",
        )
    }

    /// Pick a court by number or partial name
    pub fn select_court(&mut self, candidates: &[Candidate]) -> Result<usize> {
        self.select_with_fallback(
            Category::Court,
            candidates,
            MatchMode::Loose,
            "Which court do you want? Enter the number or name: ",
        )
    }

    /// Pick a time slot by number or label text
    pub fn select_time_slot(&mut self, candidates: &[Candidate]) -> Result<usize> {
        self.select_with_fallback(
            Category::TimeSlot,
            candidates,
            MatchMode::Compact,
            "Enter the number or time of your desired slot: ",
        )
    }

    fn select_with_fallback(
        &mut self,
        category: Category,
        candidates: &[Candidate],
        mode: MatchMode,
        prompt: &str,
    ) -> Result<usize> {
        if candidates.is_empty() {
            return Err(BookingError::EmptyCatalog(category));
        }

        self.prompter.say(&format!("Available {category}s:"));
        for (index, candidate) in candidates.iter().enumerate() {
            self.prompter.say(&describe(index, candidate));
        }

        let input = self.prompter.read_line(prompt)?;
        match resolve_selection(&input, candidates, mode) {
            Selection::Index(index) => Ok(index),
            Selection::Ambiguous(matches) => {
                let first = matches[0];
                self.prompter.say(&format!(
                    "Multiple matches; using the first: {}",
                    candidates[first].name
                ));
                Ok(first)
            }
            Selection::NoMatch => {
                self.prompter.say(&format!(
                    "No match found. Defaulting to first {category}: {}",
                    candidates[0].name
                ));
                Ok(0)
            }
        }
    }

    /// Pick a venue from a paginated catalog, re-prompting until resolved.
    ///
    /// Numbers and names match against the whole catalog, not just the
    /// batch in view; "more" reveals the next batch when one exists.
    pub fn select_venue(&mut self, catalog: &[Candidate]) -> Result<usize> {
        if catalog.is_empty() {
            return Err(BookingError::EmptyCatalog(Category::Venue));
        }

        if catalog.len() == 1 {
            self.prompter
                .say(&format!("Only one venue found: {}", describe_venue(&catalog[0])));
            return Ok(0);
        }

        let mut window = BatchWindow::new(self.config.venue_batch_size);

        loop {
            self.prompter.say("Available venues:");
            for (offset, candidate) in window.slice(catalog).iter().enumerate() {
                let index = window.start + offset;
                self.prompter
                    .say(&format!("{}. {}", index + 1, describe_venue(candidate)));
            }

            let prompt = if window.has_more(catalog.len()) {
                format!(
                    "Type 'more' to see more venues, or enter the number (1-{}) or name of your choice: ",
                    catalog.len()
                )
            } else {
                format!("Enter the number (1-{}) or name of your choice: ", catalog.len())
            };

            let input = self.prompter.read_line(&prompt)?;

            if input.eq_ignore_ascii_case("more") {
                if window.has_more(catalog.len()) {
                    window.advance(catalog.len());
                } else {
                    self.prompter.say("No more venues to show.");
                }
                continue;
            }

            match resolve_selection(&input, catalog, MatchMode::Loose) {
                Selection::Index(index) => {
                    self.prompter.say(&format!("Selected venue: {}", catalog[index].name));
                    return Ok(index);
                }
                Selection::Ambiguous(_) => {
                    self.prompter.say(
                        "Multiple venues match that name. Please be more specific or use the number.",
                    );
                }
                Selection::NoMatch => {
                    if input.parse::<usize>().is_ok() {
                        self.prompter.say(&format!(
                            "Please enter a number between 1 and {}.",
                            catalog.len()
                        ));
                    } else {
                        self.prompter.say("Venue not found. Please try again.");
                    }
                }
            }
        }
    }
}

fn describe(index: usize, candidate: &Candidate) -> String {
    match &candidate.detail {
        Some(detail) => format!("{}. {} ({})", index + 1, candidate.name, detail),
        None => format!("{}. {}", index + 1, candidate.name),
    }
}

fn describe_venue(candidate: &Candidate) -> String {
    match &candidate.detail {
        Some(distance) => format!("{} — {} from your current location", candidate.name, distance),
        None => format!("{} — distance unknown", candidate.name),
    }
}
