pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod guard;
pub mod models;
pub mod notify;
pub mod planner;
pub mod surface;
pub mod validate;

// Re-export the types an embedding UI needs
pub use config::Config;
pub use planner::{Dashboard, Submission, TripPlanner};
pub use surface::{ShareRequest, Surface};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing and logging for the embedding application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripai_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
