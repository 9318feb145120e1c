use crate::output::build_response;
use actix_web::{http::StatusCode, web, HttpResponse, Result as ActixResult};
use shared_types::{ErrorResponse, ScrubOptions, ScrubRequest, ScrubResponse};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct ScrubAppState {
    pub defaults: Arc<ScrubOptions>,
}

/// Run one scrub. Request options override the configured defaults.
///
/// Expected input problems come back as 422 with a message; anything else
/// is 500. No partial result is ever returned.
pub async fn run_scrub(
    data: web::Data<ScrubAppState>,
    request: web::Json<ScrubRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let options = data.defaults.merged(&request.options);
    let run_id = uuid::Uuid::new_v4().to_string();

    info!("Starting scrub run {}", run_id);

    let result = web::block(move || execute(run_id, &request, &options))
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;

    match result {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(err) => {
            warn!("Scrub run rejected: {}", err);
            let status = if err.is_expected() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            Ok(HttpResponse::build(status).json(ErrorResponse {
                error: err.user_message(),
            }))
        }
    }
}

fn execute(
    run_id: String,
    request: &ScrubRequest,
    options: &ScrubOptions,
) -> scrubber::Result<ScrubResponse> {
    let report = scrubber::scrub_csv(
        request.client_csv.as_deref().map(str::as_bytes),
        request.suppression_csv.as_deref().map(str::as_bytes),
        options,
    )?;

    build_response(run_id, &report)
}
