use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::{IntoResponse, Json as AxumJson},
    http::StatusCode,
};
use serde_json::Value;
use crate::AppState;
use crate::db;
use crate::db::models::PublicUser;
use crate::error::ApiError;
use crate::validation;

pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let new_user = validation::new_user(&body).map_err(|e| {
        tracing::warn!("Registration rejected: {}", e);
        ApiError::from(e)
    })?;

    match db::register_user(&state.db, new_user).await {
        Ok(Some(user)) => {
            tracing::info!("Registered user id={}", user.id);
            Ok((StatusCode::CREATED, AxumJson(PublicUser::from(user))))
        }
        Ok(None) => {
            tracing::warn!("Registration rejected: email already in use");
            Err(ApiError::Conflict("Email already in use"))
        }
        Err(e) => Err(ApiError::internal("Failed to register user", e)),
    }
}
