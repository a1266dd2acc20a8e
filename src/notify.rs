//! User-facing notices and the fixed copy shown for each outcome.
//!
//! Every error the orchestrator catches ends up here as a `Notice`; nothing
//! propagates past the handler boundary.

use crate::error::SubmissionError;

pub const GENERATION_IN_PROGRESS: &str = "Please wait while we generate your current trip plan";
pub const GENERATING_OVERLAY: &str = "Generating your personalized trip plan...";
pub const GENERATION_SUCCESS: &str = "Trip plan generated successfully!";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please refresh the page.";
/// Standard rejection text when the backend declines without a message.
pub const DEFAULT_REJECTION: &str = "Failed to generate trip plan";

pub const PDF_OVERLAY: &str = "Generating PDF...";
pub const PDF_SUCCESS: &str = "PDF downloaded successfully!";
pub const PDF_FAILED: &str = "Failed to download PDF. Please try again.";

pub const SHARE_TITLE: &str = "My Trip Plan - TripAI";
pub const SHARE_TEXT: &str = "Check out my awesome trip plan generated by TripAI!";
pub const LINK_COPIED: &str = "Trip link copied to clipboard!";
pub const COPY_FAILED: &str = "Unable to copy link. Please share manually.";

pub const SAVE_SUCCESS: &str = "Trip saved successfully!";
pub const DEFAULT_SAVE_REJECTION: &str = "Failed to save trip";
pub const SAVE_FAILED: &str = "Failed to save trip. Please try again.";

pub const RECENT_TRIPS_FAILED: &str = "Failed to load recent trips. Please refresh the page.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One dismissible message for the surface to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Map a failed submission to the notice the user sees.
pub fn submission_notice(error: &SubmissionError) -> Notice {
    match error {
        SubmissionError::InProgress => Notice::warning(GENERATION_IN_PROGRESS),
        SubmissionError::Network(_) => Notice::error(NETWORK_ERROR),
        SubmissionError::Rejected(message) => Notice::error(message.clone()),
        SubmissionError::Unexpected(_) => Notice::error(UNEXPECTED_ERROR),
    }
}
