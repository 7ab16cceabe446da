use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json as AxumJson},
};
use crate::AppState;
use crate::db;
use crate::error::{parse_id, ApiError};

pub async fn list_animals(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let animals = db::list_animals(&state.db)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch animals", e))?;
    Ok(AxumJson(animals))
}

pub async fn list_animals_by_type(
    Path(kind): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let animals = db::list_animals_by_type(&state.db, &kind)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch animals by type", e))?;
    Ok(AxumJson(animals))
}

pub async fn get_animal(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, "Invalid animal ID")?;
    match db::get_animal(&state.db, id).await {
        Ok(Some(animal)) => Ok(AxumJson(animal)),
        Ok(None) => Err(ApiError::NotFound("Animal not found")),
        Err(e) => Err(ApiError::internal("Failed to fetch animal", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn poisoned_store_gives_generic_500() {
        let pool = db::init_pool(true).await.expect("init pool");
        pool.poison();
        let state = AppState::new(pool, pages::DEFAULT_SHELL);
        let resp = list_animals(State(state)).await.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = resp.into_body().collect().await.expect("body").to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["message"], "Failed to fetch animals");
        assert!(!body.to_string().contains("poisoned"));
    }
}
