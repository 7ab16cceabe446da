use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json as AxumJson},
};
use crate::AppState;
use crate::db;
use crate::error::ApiError;

pub async fn list_donation_options(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let options = db::list_donation_options(&state.db)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch donation options", e))?;
    Ok(AxumJson(options))
}

// Unknown categories are not an error; they just match nothing.
pub async fn list_donation_options_by_category(
    Path(category): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let options = db::list_donation_options_by_category(&state.db, &category)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch donation options by category", e))?;
    Ok(AxumJson(options))
}
