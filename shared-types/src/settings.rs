use crate::options::ScrubOptions;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Response for settings endpoint
#[derive(Debug, Serialize, Deserialize, TS)]
pub struct SettingsResponse {
    pub config_file_path: String,
    pub defaults: ScrubOptions,
}
