use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::{IntoResponse, Json as AxumJson},
    http::StatusCode,
};
use serde_json::Value;
use crate::AppState;
use crate::db;
use crate::error::ApiError;
use crate::validation;

pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let subscription = validation::new_newsletter(&body).map_err(|e| {
        tracing::warn!("Newsletter signup rejected: {}", e);
        ApiError::from(e)
    })?;

    // Uniqueness is checked against newsletter subscribers only.
    match db::subscribe_unique(&state.db, subscription).await {
        Ok(Some(created)) => {
            tracing::info!("Newsletter subscription id={}", created.id);
            Ok((StatusCode::CREATED, AxumJson(created)))
        }
        Ok(None) => Err(ApiError::Conflict("Email already subscribed to the newsletter")),
        Err(e) => Err(ApiError::internal("Failed to subscribe to newsletter", e)),
    }
}
