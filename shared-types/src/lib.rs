use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod options;
pub mod scrub;
pub mod settings;
pub mod summary;

pub use options::{DedupeMode, ParseDedupeModeError, ScrubOptions, ScrubOptionsOverride};
pub use scrub::{ScrubRequest, ScrubResponse};
pub use settings::SettingsResponse;
pub use summary::{group_thousands, RemovalReason, ScrubSummary};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize, TS)]
pub struct ErrorResponse {
    pub error: String,
}
