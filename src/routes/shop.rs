use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json as AxumJson},
};
use crate::AppState;
use crate::db;
use crate::error::{parse_id, ApiError};

pub async fn list_shop_items(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = db::list_shop_items(&state.db)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch shop items", e))?;
    Ok(AxumJson(items))
}

pub async fn get_shop_item(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, "Invalid shop item ID")?;
    match db::get_shop_item(&state.db, id).await {
        Ok(Some(item)) => Ok(AxumJson(item)),
        Ok(None) => Err(ApiError::NotFound("Shop item not found")),
        Err(e) => Err(ApiError::internal("Failed to fetch shop item", e)),
    }
}
