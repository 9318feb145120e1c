use actix_web::{web, HttpResponse, Result};
use shared_types::{ScrubOptions, SettingsResponse};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct SettingsAppState {
    pub config_path: PathBuf,
    pub defaults: Arc<ScrubOptions>,
}

pub async fn get_settings(data: web::Data<SettingsAppState>) -> Result<HttpResponse> {
    let response = SettingsResponse {
        config_file_path: data.config_path.to_string_lossy().to_string(),
        defaults: data.defaults.as_ref().clone(),
    };

    Ok(HttpResponse::Ok().json(response))
}
