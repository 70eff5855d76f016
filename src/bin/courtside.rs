//! Courtside CLI
//!
//! Runs the interactive booking flow against a JSON page fixture (dry run).
//! A real page driver can reuse the same flow by implementing `PageDriver`.

use clap::Parser;
use courtside::{BookingConfig, BookingFlow, FixtureDriver, StdioPrompter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "courtside", version, about = "Interactive venue booking dry run")]
struct Cli {
    /// Path to a page fixture JSON file (sports, venues, time slots, courts)
    #[arg(long)]
    fixture: PathBuf,

    /// Venues shown per batch during venue selection
    #[arg(long)]
    batch_size: Option<usize>,

    /// Fallback duration in hours when input is unparseable
    #[arg(long)]
    default_duration: Option<f64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = BookingConfig::default();
    if let Some(size) = cli.batch_size {
        config = config.with_batch_size(size);
    }
    if let Some(hours) = cli.default_duration {
        config = config.with_default_duration(hours);
    }

    let mut driver = match FixtureDriver::from_path(&cli.fixture) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("Failed to load fixture {}: {err}", cli.fixture.display());
            return ExitCode::FAILURE;
        }
    };

    let mut prompter = StdioPrompter::new();
    match BookingFlow::new(&mut driver, &mut prompter, config).run() {
        Ok(summary) => {
            println!();
            println!("Booking summary");
            println!("  sport:    {}", summary.sport);
            println!("  venue:    {}", summary.venue);
            println!("  date:     {}", summary.date);
            println!("  slot:     {}", summary.time_slot.as_deref().unwrap_or("(none listed)"));
            println!("  duration: {}", courtside::format_duration(summary.duration_hours));
            println!("  court:    {}", summary.court.as_deref().unwrap_or("(none listed)"));
            println!("  driver actions recorded: {}", driver.actions().len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Booking failed: {err}");
            ExitCode::FAILURE
        }
    }
}
