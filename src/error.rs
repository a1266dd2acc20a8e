use thiserror::Error;

/// First violated form constraint. `Display` carries the message shown to
/// the user for that field; one violation per pass, never an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your starting location")]
    MissingStartLocation,
    #[error("Please enter your destination")]
    MissingDestination,
    #[error("Please select a start date")]
    MissingStartDate,
    #[error("Please select an end date")]
    MissingEndDate,
    #[error("Invalid date format")]
    InvalidDate,
    #[error("Start date cannot be in the past")]
    StartDateInPast,
    #[error("End date must be after start date")]
    EndNotAfterStart,
    #[error("Please enter a valid budget (minimum ₹1,000)")]
    BudgetTooLow,
    #[error("Trip duration cannot exceed 30 days")]
    TripTooLong,
}

/// Transport-level failure while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout, or body-decode failure inside reqwest.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status code.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// How a trip submission ended when it did not produce a plan.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The single-flight guard refused the call; no network traffic happened.
    #[error("a trip plan is already being generated")]
    InProgress,

    /// The request never completed, or the backend answered non-success.
    #[error("trip generation failed in transit")]
    Network(#[from] ApiError),

    /// The backend processed the request and declined it.
    #[error("{0}")]
    Rejected(String),

    /// A reply shape the client cannot interpret.
    #[error("unexpected backend reply: {0}")]
    Unexpected(String),
}
