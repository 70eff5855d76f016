use thiserror::Error;

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;

/// A selectable category presented to the user during a booking run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sport,
    Venue,
    TimeSlot,
    Court,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Sport => "sport",
            Category::Venue => "venue",
            Category::TimeSlot => "time slot",
            Category::Court => "court",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during a booking run
///
/// Every variant is recoverable by the caller: the core never aborts the
/// process. Page-level failures (element not found, click timeout) are the
/// driver's responsibility and surface here only as [`BookingError::Driver`].
#[derive(Debug, Error)]
pub enum BookingError {
    /// No candidates remained for a selectable category
    #[error("no {0} candidates available")]
    EmptyCatalog(Category),

    /// A page-driver operation failed
    #[error("driver operation '{operation}' failed: {reason}")]
    Driver { operation: String, reason: String },

    /// Reading user input or writing a prompt failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture document could not be parsed
    #[error("invalid fixture: {0}")]
    Fixture(#[from] serde_json::Error),

    /// A scripted prompter ran out of queued replies
    #[error("scripted prompter has no reply left for: {prompt}")]
    PromptExhausted { prompt: String },

    /// The login step was aborted before authentication completed
    #[error("login aborted: {0}")]
    LoginAborted(String),
}

impl BookingError {
    /// Convenience constructor for driver-side failures
    pub fn driver(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        BookingError::Driver { operation: operation.into(), reason: reason.into() }
    }
}
