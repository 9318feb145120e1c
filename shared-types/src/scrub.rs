use crate::options::ScrubOptionsOverride;
use crate::summary::ScrubSummary;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Request to scrub a client list against a suppression list.
///
/// Both tables are CSV text with a header row. A missing table is reported
/// back as an error rather than treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct ScrubRequest {
    pub client_csv: Option<String>,
    pub suppression_csv: Option<String>,
    #[serde(default)]
    pub options: ScrubOptionsOverride,
}

/// Result of a successful scrub run
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ScrubResponse {
    pub run_id: String,
    /// Human-readable summary, same text the CLI prints
    pub message: String,
    pub summary: ScrubSummary,
    pub kept_csv: String,
    /// Removed rows with a leading `Reason` column
    pub removed_csv: String,
}
