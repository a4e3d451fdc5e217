//! Part identification API handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::identify::client::VisionCompletion;
use crate::api::identify::models::{ErrorBody, IdentifyRequest, PartIdentification};
use crate::api::identify::prompt::IDENTIFY_PROMPT;
use crate::metrics::METRICS;

/// Identify API state
#[derive(Clone)]
pub struct IdentifyState {
    pub client: Arc<dyn VisionCompletion>,
}

/// Identify a vehicle part and the vehicle's make/model from an image
///
/// POST /api/identify-part
pub async fn identify_part(
    State(state): State<IdentifyState>,
    payload: Result<Json<IdentifyRequest>, JsonRejection>,
) -> Result<Json<PartIdentification>, (StatusCode, Json<ErrorBody>)> {
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    info!(%request_id, "Part identification request");

    // Validate request. A body that fails JSON extraction (malformed JSON,
    // wrong content type) takes the same path as a missing image so the
    // caller never sees axum's plain-text rejection or the serde detail.
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            METRICS.record_identify(false);
            METRICS
                .identify_request_duration
                .observe(start.elapsed().as_secs_f64());
            info!(%request_id, "Rejected request body: {}", rejection);
            return Err(image_required());
        }
    };

    if request.image.is_empty() {
        METRICS.record_identify(false);
        METRICS
            .identify_request_duration
            .observe(start.elapsed().as_secs_f64());
        return Err(image_required());
    }

    // Single provider call, no retry; the caller retries at its own
    // discretion.
    let raw = match state
        .client
        .complete_vision_prompt(IDENTIFY_PROMPT, &request.image)
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            METRICS.record_identify(false);
            METRICS
                .identify_request_duration
                .observe(start.elapsed().as_secs_f64());
            error!(%request_id, "Vision provider call failed: {}", e);
            return Err(internal_error());
        }
    };

    // Normalize: only the two recognized keys survive; provider extras are
    // dropped and explicit nulls pass through. Malformed output takes the
    // same failure path as a provider error.
    match serde_json::from_str::<PartIdentification>(&raw) {
        Ok(result) => {
            METRICS.record_identify(true);
            METRICS
                .identify_request_duration
                .observe(start.elapsed().as_secs_f64());
            Ok(Json(result))
        }
        Err(e) => {
            METRICS.record_identify(false);
            METRICS
                .identify_request_duration
                .observe(start.elapsed().as_secs_f64());
            error!(%request_id, "Failed to parse provider answer: {}", e);
            Err(internal_error())
        }
    }
}

/// Fallback for non-POST verbs on the identify route
///
/// Axum's default method fallback sends an empty 405; the caller contract
/// promises a JSON error body instead.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Method Not Allowed")),
    )
}

fn image_required() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody::new("The image field is required.")),
    )
}

fn internal_error() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(
            "Failed to communicate with the AI or process the response.",
        )),
    )
}
