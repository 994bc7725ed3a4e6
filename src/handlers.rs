// handlers.rs

use crate::{
    error::AppError,
    models::{AppState, ColorRequest, ColorResponse},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use metrics::counter;
use std::sync::Arc;
use tracing::{error, info};
use validator::{Validate, ValidationErrors};

/// Validate an RGB triple and forward it to the configured bulb.
///
/// Out-of-range channels and malformed bodies never reach the bulb; a
/// forwarding failure is reported as a server-side error carrying the
/// underlying cause.
#[utoipa::path(
    post,
    path = "/api/color",
    request_body = ColorRequest,
    responses(
        (status = 200, description = "Color forwarded to the bulb", body = ColorResponse),
        (status = 400, description = "Invalid RGB values or malformed body", body = ColorResponse),
        (status = 500, description = "Bulb did not accept the color", body = ColorResponse)
    )
)]
pub async fn set_color(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ColorRequest>, JsonRejection>,
) -> Result<Json<ColorResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    request
        .validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;

    counter!("color_requests_total").increment(1);

    // Channels are known to be in 0..=255 here, so the narrowing is lossless.
    if let Err(err) = state
        .bulb
        .set_color(request.red as u8, request.green as u8, request.blue as u8)
        .await
    {
        counter!("color_forward_failures_total").increment(1);
        error!(%err, "forwarding color to bulb failed");
        return Err(err.into());
    }

    info!(
        red = request.red,
        green = request.green,
        blue = request.blue,
        "color forwarded to bulb"
    );

    Ok(Json(ColorResponse {
        success: true,
        message: "Color set successfully".to_string(),
    }))
}

// Field order in ValidationErrors is a hash map's, so sort for a stable message.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is out of range", field),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
