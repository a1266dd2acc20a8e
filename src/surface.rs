//! The seam between the orchestrator and whatever renders it.
//!
//! A browser page, a terminal, or a test recorder implements [`Surface`]; the
//! planner never touches a visual medium directly.

use async_trait::async_trait;

use crate::format::Fragment;
use crate::models::TripResult;
use crate::notify::Notice;

/// Payload handed to a native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// External collaborator that binds orchestrator output to a visual medium.
#[async_trait]
pub trait Surface: Send + Sync {
    /// Show a dismissible notice.
    async fn notify(&self, notice: Notice);

    /// Put up the blocking overlay with the given message.
    async fn show_overlay(&self, message: &str);

    /// Take the overlay down. Must be safe to call when none is up.
    async fn hide_overlay(&self);

    /// Bind a generated trip and its classified itinerary to the view.
    async fn present_trip(&self, trip: &TripResult, fragments: &[Fragment]);

    /// Leave the current view for `location`.
    async fn navigate(&self, location: &str);

    /// Whether a native share sheet exists; decides the share/clipboard split.
    fn supports_native_share(&self) -> bool;

    /// Hand the request to the native share sheet.
    async fn share(&self, request: &ShareRequest);

    /// Copy `text` for the user; returns whether the copy landed.
    async fn copy_to_clipboard(&self, text: &str) -> bool;

    /// Persist a downloaded document; returns whether it was saved.
    async fn save_document(&self, file_name: &str, bytes: &[u8]) -> bool;
}
