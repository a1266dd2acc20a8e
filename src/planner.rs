//! The trip-request orchestrator.
//!
//! `TripPlanner` owns the single-flight guard and the transient current trip.
//! Every `handle_*` method is a complete user action: it catches every error
//! and converts it into surface notices, so callers never see a `Result`.
//! Submission cycle: Idle -> Validating -> (Rejected | Submitting) ->
//! (Success | Failed) -> Idle; the guard is set exactly while Submitting.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::client::TripApi;
use crate::config::Config;
use crate::error::{ApiError, SubmissionError};
use crate::format::format_itinerary;
use crate::guard::RequestGuard;
use crate::models::{TripForm, TripRequest, TripResult, TripStats};
use crate::notify::{self, Notice, submission_notice};
use crate::surface::{ShareRequest, Surface};
use crate::validate::validate_now;

/// How a successful submission resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The backend returned a generated trip.
    Plan(TripResult),
    /// The backend asked the client to navigate elsewhere.
    Redirect(String),
}

/// Recent trips and aggregate stats for the dashboard view.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub trips: Vec<TripResult>,
    pub stats: Option<TripStats>,
}

pub struct TripPlanner {
    api: TripApi,
    surface: Arc<dyn Surface>,
    guard: RequestGuard,
    // Held only to set or clone the value, never across an await.
    current: Mutex<Option<TripResult>>,
}

impl TripPlanner {
    pub fn new(config: &Config, surface: Arc<dyn Surface>) -> Result<Self, ApiError> {
        Ok(Self {
            api: TripApi::new(config)?,
            surface,
            guard: RequestGuard::new(),
            current: Mutex::new(None),
        })
    }

    /// Whether a submission is currently in flight.
    pub fn is_generating(&self) -> bool {
        self.guard.is_set()
    }

    /// The most recently generated trip, superseded on the next submission.
    pub async fn current_trip(&self) -> Option<TripResult> {
        self.current.lock().await.clone()
    }

    /// Submit a validated request, single-flight.
    ///
    /// Returns `SubmissionError::InProgress` without any network traffic when
    /// another submission holds the guard. The guard clears on every path.
    pub async fn submit(&self, request: &TripRequest) -> Result<Submission, SubmissionError> {
        let _release = self
            .guard
            .try_acquire()
            .ok_or(SubmissionError::InProgress)?;

        let reply = self
            .api
            .generate_trip(request)
            .await
            .map_err(SubmissionError::Network)?;

        if !reply.success {
            let message = reply
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| notify::DEFAULT_REJECTION.to_string());
            info!(%message, "backend declined the trip request");
            return Err(SubmissionError::Rejected(message));
        }

        if let Some(location) = reply.redirect {
            info!(%location, "backend redirected the submission");
            return Ok(Submission::Redirect(location));
        }

        match reply.trip {
            Some(trip) => {
                info!(trip_id = %trip.trip_id, "trip plan generated");
                *self.current.lock().await = Some(trip.clone());
                Ok(Submission::Plan(trip))
            }
            None => Err(SubmissionError::Unexpected(
                "success reply carried neither a trip nor a redirect".to_string(),
            )),
        }
    }

    /// Full form-submission cycle: guard check, validation, submit, outcome.
    pub async fn handle_submission(&self, form: &TripForm) {
        if self.guard.is_set() {
            self.surface
                .notify(Notice::warning(notify::GENERATION_IN_PROGRESS))
                .await;
            return;
        }

        let request = match validate_now(form) {
            Ok(request) => request,
            Err(error) => {
                self.surface.notify(Notice::error(error.to_string())).await;
                return;
            }
        };

        self.surface.show_overlay(notify::GENERATING_OVERLAY).await;
        let outcome = self.submit(&request).await;
        self.surface.hide_overlay().await;

        match outcome {
            Ok(Submission::Plan(trip)) => {
                self.surface
                    .notify(Notice::success(notify::GENERATION_SUCCESS))
                    .await;
                let fragments = format_itinerary(&trip.trip_plan);
                self.surface.present_trip(&trip, &fragments).await;
            }
            Ok(Submission::Redirect(location)) => {
                self.surface
                    .notify(Notice::success(notify::GENERATION_SUCCESS))
                    .await;
                self.surface.navigate(&location).await;
            }
            Err(error) => {
                warn!(%error, "trip submission failed");
                self.surface.notify(submission_notice(&error)).await;
            }
        }
    }

    /// Fetch the PDF for a trip and hand it to the surface for saving.
    pub async fn handle_download(&self, trip_id: &str) {
        self.surface.show_overlay(notify::PDF_OVERLAY).await;
        let outcome = self.api.download_pdf(trip_id).await;
        self.surface.hide_overlay().await;

        match outcome {
            Ok(bytes) => {
                let file_name = format!("trip-plan-{trip_id}.pdf");
                if self.surface.save_document(&file_name, &bytes).await {
                    self.surface
                        .notify(Notice::success(notify::PDF_SUCCESS))
                        .await;
                } else {
                    self.surface.notify(Notice::error(notify::PDF_FAILED)).await;
                }
            }
            Err(error) => {
                warn!(trip_id, %error, "PDF download failed");
                self.surface.notify(Notice::error(notify::PDF_FAILED)).await;
            }
        }
    }

    /// Share the canonical trip link, falling back to the clipboard when no
    /// native share sheet exists.
    pub async fn handle_share(&self, trip_id: &str) {
        let url = self.api.trip_url(trip_id);
        if self.surface.supports_native_share() {
            let request = ShareRequest {
                title: notify::SHARE_TITLE.to_string(),
                text: notify::SHARE_TEXT.to_string(),
                url,
            };
            self.surface.share(&request).await;
        } else if self.surface.copy_to_clipboard(&url).await {
            self.surface
                .notify(Notice::success(notify::LINK_COPIED))
                .await;
        } else {
            self.surface.notify(Notice::error(notify::COPY_FAILED)).await;
        }
    }

    /// Ask the backend to persist a trip.
    pub async fn handle_save(&self, trip_id: &str) {
        match self.api.save_trip(trip_id).await {
            Ok(reply) if reply.success => {
                self.surface
                    .notify(Notice::success(notify::SAVE_SUCCESS))
                    .await;
            }
            Ok(reply) => {
                let message = reply
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| notify::DEFAULT_SAVE_REJECTION.to_string());
                self.surface.notify(Notice::error(message)).await;
            }
            Err(error) => {
                warn!(trip_id, %error, "saving trip failed");
                self.surface.notify(Notice::error(notify::SAVE_FAILED)).await;
            }
        }
    }

    /// Navigate the surface to a trip's canonical page.
    pub async fn handle_view(&self, trip_id: &str) {
        self.surface.navigate(&self.api.trip_url(trip_id)).await;
    }

    /// Load the dashboard data, firing both reads concurrently.
    ///
    /// A failed trips read surfaces a warning and yields an empty list; a
    /// failed stats read is only logged.
    pub async fn load_dashboard(&self) -> Dashboard {
        let (trips_reply, stats_reply) =
            futures::future::join(self.api.recent_trips(), self.api.trip_stats()).await;

        let trips = match trips_reply {
            Ok(reply) if reply.success => reply.trips,
            Ok(_) => {
                warn!("recent trips reply was unsuccessful");
                self.surface
                    .notify(Notice::warning(notify::RECENT_TRIPS_FAILED))
                    .await;
                Vec::new()
            }
            Err(error) => {
                warn!(%error, "loading recent trips failed");
                self.surface
                    .notify(Notice::warning(notify::RECENT_TRIPS_FAILED))
                    .await;
                Vec::new()
            }
        };

        let stats = match stats_reply {
            Ok(reply) if reply.success => reply.stats,
            Ok(_) => None,
            Err(error) => {
                warn!(%error, "loading trip stats failed");
                None
            }
        };

        Dashboard { trips, stats }
    }

    /// Minimum-budget estimate for a prospective trip.
    pub async fn estimate_min_budget(
        &self,
        start_location: &str,
        destination: &str,
        num_days: u32,
    ) -> Result<f64, ApiError> {
        self.api
            .calculate_min_budget(start_location, destination, num_days)
            .await
    }
}
