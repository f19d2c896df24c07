use axum::{
    Json,
    body::{Body, to_bytes},
    extract::State,
    http::HeaderMap,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::client_ip::client_identifier;
use crate::error::ApiError;
use crate::metrics::{ACCEPTED, RATE_LIMITED, REJECTED, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{ContactSubmission, RouteInfo, SubmitResponse};
use crate::state::AppState;

// Largest body read for a submission, well above the field limits even
// with every character \u-escaped
pub const MAX_BODY_BYTES: usize = 64 * 1024;

// GET /api/contact - lets a browser check the route is wired up
pub async fn contact_info() -> Json<RouteInfo> {
    Json(RouteInfo {
        ok: true,
        route: "contact",
    })
}

// POST /api/contact
// Takes the raw body so the rate limit runs before anything is read.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Body,
) -> Result<Json<SubmitResponse>, ApiError> {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    let result = handle_submission(&state, &headers, body).await;

    match &result {
        Ok(()) => ACCEPTED.inc(),
        Err(ApiError::RateLimited) => RATE_LIMITED.inc(),
        Err(ApiError::UnreadableBody(_) | ApiError::InvalidJson(_)) => {
            REJECTED.with_label_values(&["invalid_json"]).inc()
        }
        Err(ApiError::Validation(_)) => REJECTED.with_label_values(&["validation"]).inc(),
    }
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    result.map(|()| Json(SubmitResponse { ok: true }))
}

async fn handle_submission(
    state: &AppState,
    headers: &HeaderMap,
    body: Body,
) -> Result<(), ApiError> {
    let ip = client_identifier(headers);
    if !state.rate_limiter.check_and_record(&ip) {
        info!(%ip, "Contact submission rate limited");
        return Err(ApiError::RateLimited);
    }

    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        debug!(%ip, error = %e, "Contact submission body could not be read");
        ApiError::UnreadableBody(e)
    })?;

    let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
        debug!(%ip, error = %e, "Contact submission is not JSON");
        ApiError::InvalidJson(e)
    })?;

    let submission = ContactSubmission::from_json(value)
        .and_then(|s| s.validate().map(|()| s))
        .map_err(|e| {
            debug!(%ip, error = %e, "Contact submission failed validation");
            ApiError::Validation(e)
        })?;

    info!(
        name = %submission.name,
        email = %submission.email,
        message = %submission.message,
        %ip,
        "Contact form"
    );

    Ok(())
}
